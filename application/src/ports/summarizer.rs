//! Summarizer port

use async_trait::async_trait;
use taskmate_domain::summary::first_sentence;

/// Produces a short summary of a note
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` in at most `max_chars` characters (plus an ellipsis
    /// when cut).
    async fn summarize(&self, text: &str, max_chars: usize) -> String;
}

/// Offline summarizer: the first sentence of the text.
pub struct DeterministicSummarizer;

#[async_trait]
impl Summarizer for DeterministicSummarizer {
    async fn summarize(&self, text: &str, max_chars: usize) -> String {
        first_sentence(text, max_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_summarizer() {
        let summary = DeterministicSummarizer
            .summarize("Primeira frase. Segunda frase.", 120)
            .await;
        assert_eq!(summary, "Primeira frase.");
    }
}
