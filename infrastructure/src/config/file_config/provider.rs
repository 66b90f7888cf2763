//! Language-model provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};
use taskmate_domain::{ConfigIssue, ConfigIssueCode};

/// OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Model name sent with every request.
    pub model: String,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Completion budget for routing requests.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Attempts per request, including the first one.
    pub max_attempts: u32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3.1:8b".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: 200,
            timeout_secs: 30,
            max_attempts: 3,
        }
    }
}

impl FileProviderConfig {
    /// API key from the config file or the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Routing completion budget; zero falls back to the default.
    pub fn effective_max_tokens(&self) -> u32 {
        or_default(self.max_tokens, Self::default().max_tokens)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        or_default(self.timeout_secs, Self::default().timeout_secs)
    }

    pub fn effective_max_attempts(&self) -> u32 {
        or_default(self.max_attempts, Self::default().max_attempts)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [("provider.model", &self.model), ("provider.base_url", &self.base_url)] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} cannot be empty", field),
                ));
            }
        }

        for (field, value) in [
            ("provider.max_tokens", u64::from(self.max_tokens)),
            ("provider.timeout_secs", self.timeout_secs),
            ("provider.max_attempts", u64::from(self.max_attempts)),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroValue {
                        field: field.to_string(),
                    },
                    format!("{} cannot be 0, using the default", field),
                ));
            }
        }

        issues
    }
}

fn or_default<T: PartialEq + Default>(value: T, default: T) -> T {
    if value == T::default() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileProviderConfig::default().validate().is_empty());
    }

    #[test]
    fn test_zero_and_empty_values() {
        let config = FileProviderConfig {
            model: " ".to_string(),
            max_attempts: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyValue { field } if field == "provider.model"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::ZeroValue { field } if field == "provider.max_attempts"
        )));
    }

    #[test]
    fn test_zero_values_resolve_to_defaults() {
        let config = FileProviderConfig {
            max_tokens: 0,
            timeout_secs: 0,
            max_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_max_tokens(), 200);
        assert_eq!(config.effective_timeout_secs(), 30);
        assert_eq!(config.effective_max_attempts(), 3);

        let config = FileProviderConfig {
            max_tokens: 64,
            timeout_secs: 5,
            max_attempts: 1,
            ..Default::default()
        };
        assert_eq!(config.effective_max_tokens(), 64);
        assert_eq!(config.effective_timeout_secs(), 5);
        assert_eq!(config.effective_max_attempts(), 1);
    }

    #[test]
    fn test_inline_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-inline".to_string()),
            api_key_env: "TASKMATE_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-inline"));

        let config = FileProviderConfig {
            api_key_env: "TASKMATE_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
