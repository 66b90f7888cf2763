//! Model-assisted resolver
//!
//! Sends a structured-output prompt describing the capability registry to the
//! language model, then coerces the free-form reply into a route:
//!
//! 1. Blank input short-circuits to unresolved (no request is made)
//! 2. The greedy `{...}` span of the reply is parsed as JSON
//! 3. plugin/function must name a registered capability
//! 4. Supplied parameters are merged (explicit `null`s dropped)
//! 5. AddTask/AddNote text is backfilled from the user's words
//! 6. Remaining required parameters get their registry defaults
//!
//! A service failure and an out-of-contract reply both end as
//! [`RouteCandidate::Unresolved`]; neither is retried here.

use crate::ports::intent_resolver::IntentResolver;
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use std::sync::Arc;
use taskmate_domain::util::truncate_chars;
use taskmate_domain::{
    CapabilityRegistry, PromptTemplate, RouteCandidate, backfill_from_input, parse_route_response,
};
use tracing::{debug, warn};

/// Default completion budget for one routing request
pub const DEFAULT_ROUTING_MAX_TOKENS: u32 = 200;

/// Resolver that asks a language model to classify the input
pub struct ModelResolver {
    gateway: Arc<dyn LlmGateway>,
    registry: Arc<CapabilityRegistry>,
    max_tokens: u32,
}

impl ModelResolver {
    pub fn new(gateway: Arc<dyn LlmGateway>, registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            gateway,
            registry,
            max_tokens: DEFAULT_ROUTING_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl IntentResolver for ModelResolver {
    async fn resolve(&self, input: &str) -> RouteCandidate {
        if input.trim().is_empty() {
            return RouteCandidate::Unresolved;
        }

        let prompt = PromptTemplate::router(&self.registry, input);
        let response = match self.gateway.complete(&prompt, self.max_tokens).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    model = self.gateway.model(),
                    error = %e,
                    "Routing request failed, treating input as not understood"
                );
                return RouteCandidate::Unresolved;
            }
        };

        match parse_route_response(&response, &self.registry) {
            Ok((capability, mut arguments)) => {
                backfill_from_input(capability, &mut arguments, input);
                self.registry.fill_defaults(capability, &mut arguments);
                debug!(%capability, "Model routed input");
                RouteCandidate::resolved(capability, arguments)
            }
            Err(e) => {
                debug!(
                    error = %e,
                    response = %truncate_chars(&response, 200),
                    "Model reply outside the routing contract"
                );
                RouteCandidate::Unresolved
            }
        }
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
