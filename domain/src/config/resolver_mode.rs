//! Resolver mode value object

use serde::{Deserialize, Serialize};

/// Which resolver turns input lines into routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Offline keyword rules (default)
    #[default]
    Keyword,
    /// Language-model classification with JSON-contract parsing
    Model,
}

impl ResolverMode {
    pub fn as_str(&self) -> &str {
        match self {
            ResolverMode::Keyword => "keyword",
            ResolverMode::Model => "model",
        }
    }
}

impl std::fmt::Display for ResolverMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" | "keywords" | "offline" => Ok(ResolverMode::Keyword),
            "model" | "llm" | "ai" => Ok(ResolverMode::Model),
            _ => Err(format!("unknown resolver mode: {}", s)),
        }
    }
}

/// Which summarizer the Notes plugin uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerKind {
    #[default]
    Deterministic,
    Model,
}

impl std::str::FromStr for SummarizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deterministic" => Ok(SummarizerKind::Deterministic),
            "model" | "llm" => Ok(SummarizerKind::Model),
            _ => Err(format!("unknown summarizer: {}", s)),
        }
    }
}
