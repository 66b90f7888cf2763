//! Notes configuration from TOML (`[notes]` section)

use serde::{Deserialize, Serialize};
use taskmate_domain::{ConfigIssue, ConfigIssueCode, SummarizerKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotesConfig {
    /// "deterministic" or "model"
    pub summarizer: String,
    /// Character budget for summaries
    pub summary_max_chars: usize,
}

impl Default for FileNotesConfig {
    fn default() -> Self {
        Self {
            summarizer: "deterministic".to_string(),
            summary_max_chars: 120,
        }
    }
}

impl FileNotesConfig {
    pub fn parse_summarizer(&self) -> (SummarizerKind, Vec<ConfigIssue>) {
        match self.summarizer.parse() {
            Ok(kind) => (kind, Vec::new()),
            Err(_) => (
                SummarizerKind::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "notes.summarizer".to_string(),
                        value: self.summarizer.clone(),
                        valid_values: vec!["deterministic".to_string(), "model".to_string()],
                    },
                    format!(
                        "notes.summarizer: unknown value '{}', falling back to 'deterministic'",
                        self.summarizer
                    ),
                )],
            ),
        }
    }
}
