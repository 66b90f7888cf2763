//! Language-model provider adapters
//!
//! Implementations of the [`LlmGateway`](taskmate_application::LlmGateway)
//! port.

mod openai;

pub use openai::OpenAiCompatibleGateway;
