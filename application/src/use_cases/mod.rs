//! Use cases
//!
//! Resolvers, plugins and the dispatcher that together turn one input line
//! into one user-facing message.

pub mod assistant;
pub mod dispatch;
pub mod keyword_resolver;
pub mod messages;
pub mod model_resolver;
pub mod notes;
pub mod plugin_error;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;
