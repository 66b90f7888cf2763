//! Presentation-level configuration
//!
//! REPL behavior derived from the `[repl]` section and CLI flags.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while the model works
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: default_history_file(),
        }
    }
}

/// `$XDG_DATA_HOME/taskmate/history.txt`
pub fn default_history_file() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("taskmate").join("history.txt"))
}
