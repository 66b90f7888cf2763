//! Application layer for taskmate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    intent_resolver::IntentResolver,
    llm_gateway::{GatewayError, LlmGateway},
    record_store::{RecordStore, StoreError},
    route_logger::{NoRouteLog, RouteEvent, RouteLogger},
    summarizer::{DeterministicSummarizer, Summarizer},
};
pub use use_cases::assistant::Assistant;
pub use use_cases::dispatch::Dispatcher;
pub use use_cases::keyword_resolver::KeywordResolver;
pub use use_cases::model_resolver::ModelResolver;
pub use use_cases::notes::NotesPlugin;
pub use use_cases::plugin_error::PluginError;
pub use use_cases::tasks::TaskPlugin;
