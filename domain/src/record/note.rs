//! Note records

use serde::{Deserialize, Serialize};

/// A free-text note as stored in the `notes` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    /// Creation time, already formatted for display (`dd/mm HH:MM`)
    #[serde(default)]
    pub created_at: String,
}

impl Note {
    pub fn new(content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: created_at.into(),
        }
    }

    /// Case-insensitive substring match on the content
    pub fn matches(&self, term: &str) -> bool {
        self.content.to_lowercase().contains(&term.to_lowercase())
    }
}
