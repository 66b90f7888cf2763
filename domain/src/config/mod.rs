//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod resolver_mode;
pub mod validation;

pub use resolver_mode::{ResolverMode, SummarizerKind};
pub use validation::{ConfigIssue, ConfigIssueCode};
