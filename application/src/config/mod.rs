//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: output budgets for routing, advice and summaries

pub mod behavior;

pub use behavior::BehaviorConfig;
