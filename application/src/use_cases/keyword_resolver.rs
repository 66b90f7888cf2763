//! Deterministic resolver
//!
//! Offline, immediate and reproducible: the ordered keyword rules from the
//! domain decide the capability, and the registry fills in any required
//! parameter the rules could not extract.

use crate::ports::intent_resolver::IntentResolver;
use async_trait::async_trait;
use std::sync::Arc;
use taskmate_domain::{CapabilityRegistry, RouteCandidate, match_keywords};

/// Resolver backed by fixed keyword/prefix rules
pub struct KeywordResolver {
    registry: Arc<CapabilityRegistry>,
}

impl KeywordResolver {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve without suspending.
    pub fn resolve_now(&self, input: &str) -> RouteCandidate {
        let Some((capability, mut arguments)) = match_keywords(input) else {
            return RouteCandidate::Unresolved;
        };
        self.registry.fill_defaults(capability, &mut arguments);
        RouteCandidate::resolved(capability, arguments)
    }
}

#[async_trait]
impl IntentResolver for KeywordResolver {
    async fn resolve(&self, input: &str) -> RouteCandidate {
        self.resolve_now(input)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
