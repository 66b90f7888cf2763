//! Presentation layer for taskmate
//!
//! This crate contains CLI definitions, output formatting, the progress
//! spinner, and the interactive prompt.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::AssistantRepl;
pub use cli::commands::{Cli, ModeArg};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::Spinner;
