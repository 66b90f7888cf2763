//! Model-backed note summarizer

use async_trait::async_trait;
use std::sync::Arc;
use taskmate_application::{LlmGateway, Summarizer};
use taskmate_domain::PromptTemplate;
use taskmate_domain::summary::first_sentence;
use taskmate_domain::util::truncate_chars;
use tracing::warn;

/// Asks the language model for a summary, falling back to the first
/// sentence when the model is unreachable or answers with nothing.
pub struct ModelSummarizer {
    gateway: Arc<dyn LlmGateway>,
    max_tokens: u32,
}

impl ModelSummarizer {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            max_tokens: 100,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl Summarizer for ModelSummarizer {
    async fn summarize(&self, text: &str, max_chars: usize) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let prompt = PromptTemplate::summarize(text, max_chars);
        match self.gateway.complete(&prompt, self.max_tokens).await {
            Ok(reply) if !reply.trim().is_empty() => truncate_chars(reply.trim(), max_chars),
            Ok(_) => {
                warn!("Empty summary from model, using first sentence");
                first_sentence(text, max_chars)
            }
            Err(e) => {
                warn!(error = %e, "Summary request failed, using first sentence");
                first_sentence(text, max_chars)
            }
        }
    }
}
