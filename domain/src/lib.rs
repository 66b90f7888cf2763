//! Domain layer for taskmate
//!
//! This crate contains the core logic of the assistant: which capabilities
//! exist, how a line of text maps onto one of them, and the records the
//! capabilities operate on. It performs no I/O.
//!
//! # Core Concepts
//!
//! - **Capability Registry**: the plugin → function → parameter declaration
//!   that every resolver and the dispatcher agree on
//! - **RouteCandidate**: the resolved-or-unresolved result of reading one line
//! - **Keyword rules**: ordered, first-match-wins deterministic matching
//! - **Routing replies**: untrusted model output coerced into a candidate

pub mod capability;
pub mod config;
pub mod intent;
pub mod prompt;
pub mod record;
pub mod summary;
pub mod util;

// Re-export commonly used types
pub use capability::{
    Capability, CapabilityRegistry, FunctionSpec, ParameterKind, ParameterSpec, PluginSpec,
};
pub use config::{ConfigIssue, ConfigIssueCode, ResolverMode, SummarizerKind};
pub use intent::{
    Arguments, Route, RouteCandidate, RouteParseError, backfill_from_input, extract_json_span,
    match_keywords, parse_route_response,
};
pub use prompt::PromptTemplate;
pub use record::{NOTES_COLLECTION, Note, TASKS_COLLECTION, TaskItem};
