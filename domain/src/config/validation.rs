//! Configuration validation issues
//!
//! Produced by the config layer when a file parses but carries values the
//! assistant cannot use as written. Every issue is non-fatal: a fallback value
//! is used instead and callers decide how to surface the warning.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field does not name one of the accepted values.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field that must be positive is zero.
    ZeroValue { field: String },
    /// A required string field is empty.
    EmptyValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
