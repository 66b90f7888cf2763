//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod intent_resolver;
pub mod llm_gateway;
pub mod record_store;
pub mod route_logger;
pub mod summarizer;
