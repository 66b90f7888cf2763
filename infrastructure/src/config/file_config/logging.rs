//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per routed input
    pub route_log: Option<String>,
    /// Directory for the daily-rotated diagnostic log
    pub log_dir: Option<String>,
}
