//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-like fields stay strings here and are parsed (with warnings) on use.

mod logging;
mod notes;
mod provider;
mod repl;
mod router;
mod storage;

pub use logging::FileLoggingConfig;
pub use notes::FileNotesConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use router::FileRouterConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use taskmate_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Resolver selection
    pub router: FileRouterConfig,
    /// Language-model endpoint
    pub provider: FileProviderConfig,
    /// Where collections live
    pub storage: FileStorageConfig,
    /// Note summaries
    pub notes: FileNotesConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Route log and diagnostic log locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks enum-like strings (`router.mode`, `notes.summarizer`) and the
    /// provider's required values.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.router.parse_mode().1);
        issues.extend(self.notes.parse_summarizer().1);
        issues.extend(self.provider.validate());
        issues
    }
}
