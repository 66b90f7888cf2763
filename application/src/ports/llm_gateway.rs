//! LLM Gateway port
//!
//! Defines the interface for communicating with a language-model completion
//! service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Gateway not configured: {0}")]
    NotConfigured(String),
}

impl GatewayError {
    /// Whether repeating the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_) | GatewayError::Timeout => true,
            GatewayError::Http { status, .. } => matches!(status, 429 | 502 | 503 | 504),
            GatewayError::InvalidResponse(_) | GatewayError::NotConfigured(_) => false,
        }
    }
}

/// Gateway for LLM communication
///
/// One request, one response: the prompt is sent as a single user message and
/// the completion text comes back. No streaming, no state across calls.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` and return the completion text, limited to `max_tokens`.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError>;

    /// Model identifier, for diagnostics
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::ConnectionError("refused".into()).is_transient());
        assert!(
            GatewayError::Http {
                status: 503,
                message: "busy".into()
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Http {
                status: 401,
                message: "nope".into()
            }
            .is_transient()
        );
        assert!(!GatewayError::InvalidResponse("empty".into()).is_transient());
    }
}
