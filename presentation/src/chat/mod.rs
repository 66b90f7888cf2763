//! Interactive prompt module
//!
//! Provides a readline-based interactive interface to the assistant.

mod repl;

pub use repl::{AssistantRepl, ReplInput, is_exit_token};
