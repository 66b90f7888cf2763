//! Prompt domain
//!
//! Templates for the prompts sent to the language model.

mod template;

pub use template::PromptTemplate;
