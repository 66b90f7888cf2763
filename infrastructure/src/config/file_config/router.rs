//! Router configuration from TOML (`[router]` section)

use serde::{Deserialize, Serialize};
use taskmate_domain::{ConfigIssue, ConfigIssueCode, ResolverMode};

/// Raw router configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Resolver to use: "keyword" or "model"
    pub mode: String,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::default().to_string(),
        }
    }
}

impl FileRouterConfig {
    /// Parse `mode`, falling back to the default on unknown values.
    pub fn parse_mode(&self) -> (ResolverMode, Vec<ConfigIssue>) {
        match self.mode.parse() {
            Ok(mode) => (mode, Vec::new()),
            Err(_) => (
                ResolverMode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "router.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["keyword".to_string(), "model".to_string()],
                    },
                    format!(
                        "router.mode: unknown value '{}', falling back to '{}'",
                        self.mode,
                        ResolverMode::default()
                    ),
                )],
            ),
        }
    }
}
