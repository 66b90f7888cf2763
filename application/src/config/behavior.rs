//! Behavior parameters: output budgets for model calls.
//!
//! [`BehaviorConfig`] groups the static knobs the use cases read when they
//! talk to the language model. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};

/// Output budgets for model-backed operations.
///
/// The numbers are tuned by hand; correctness never depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Completion budget for one routing request.
    pub routing_max_tokens: u32,
    /// Completion budget for a next-task recommendation.
    pub advice_max_tokens: u32,
    /// Completion budget for a note summary.
    pub summary_max_tokens: u32,
    /// Character budget for note summaries.
    pub summary_max_chars: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            routing_max_tokens: 200,
            advice_max_tokens: 100,
            summary_max_tokens: 100,
            summary_max_chars: 120,
        }
    }
}

impl BehaviorConfig {
    pub fn with_routing_max_tokens(mut self, max: u32) -> Self {
        self.routing_max_tokens = max;
        self
    }

    pub fn with_advice_max_tokens(mut self, max: u32) -> Self {
        self.advice_max_tokens = max;
        self
    }
}
