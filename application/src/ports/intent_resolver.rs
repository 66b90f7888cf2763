//! Intent resolver port
//!
//! Both resolution strategies implement [`IntentResolver`], so the dispatcher
//! and everything downstream stay identical whichever one is deployed.

use async_trait::async_trait;
use taskmate_domain::RouteCandidate;

/// Strategy that maps one raw input line to a [`RouteCandidate`].
///
/// Never fails: anything that cannot be mapped comes back as
/// [`RouteCandidate::Unresolved`].
#[async_trait]
pub trait IntentResolver: Send + Sync {
    async fn resolve(&self, input: &str) -> RouteCandidate;

    /// Short name used in logs ("keyword", "model")
    fn name(&self) -> &'static str;
}
