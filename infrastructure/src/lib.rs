//! Infrastructure layer for taskmate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod store;
pub mod summarizer;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileNotesConfig, FileProviderConfig,
    FileReplConfig, FileRouterConfig, FileStorageConfig,
};
pub use logging::JsonlRouteLogger;
pub use providers::OpenAiCompatibleGateway;
pub use store::JsonFileStore;
pub use summarizer::ModelSummarizer;
