//! Task records

use serde::{Deserialize, Serialize};

/// A to-do item as stored in the `tasks` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl TaskItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.done = true;
        self
    }

    /// Checkbox marker used in listings
    pub fn marker(&self) -> &'static str {
        if self.done { "[x]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        assert_eq!(TaskItem::new("a").marker(), "[ ]");
        assert_eq!(TaskItem::new("a").completed().marker(), "[x]");
    }

    #[test]
    fn test_missing_done_defaults_to_false() {
        let task: TaskItem = serde_json::from_str(r#"{"title": "legacy"}"#).unwrap();
        assert!(!task.done);
    }
}
