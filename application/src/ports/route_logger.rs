//! Port for structured route logging.
//!
//! Records every routing decision (input, resolver, chosen capability and
//! arguments) to a machine-readable log for operators. Separate from
//! `tracing`, which carries human-readable diagnostics.

use taskmate_domain::RouteCandidate;

/// One routing decision.
pub struct RouteEvent {
    /// Resolver that produced the candidate
    pub resolver: &'static str,
    /// Raw input line
    pub input: String,
    /// The candidate handed to the dispatcher
    pub candidate: RouteCandidate,
}

impl RouteEvent {
    pub fn new(resolver: &'static str, input: impl Into<String>, candidate: RouteCandidate) -> Self {
        Self {
            resolver,
            input: input.into(),
            candidate,
        }
    }

    /// JSON payload (without type/timestamp, which the writer adds).
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "resolver": self.resolver,
            "input": self.input,
            "plugin": self.candidate.plugin(),
            "function": self.candidate.function(),
            "arguments": self.candidate.arguments(),
        })
    }
}

/// Port for logging routing decisions.
///
/// `log` is synchronous and infallible; write failures are swallowed by the
/// implementation.
pub trait RouteLogger: Send + Sync {
    fn log(&self, event: RouteEvent);
}

/// No-op implementation for tests and when the route log is disabled.
pub struct NoRouteLog;

impl RouteLogger for NoRouteLog {
    fn log(&self, _event: RouteEvent) {}
}
