//! Capabilities: the plugins and functions the assistant can dispatch to

pub mod entities;
pub mod registry;

pub use entities::{Capability, FunctionSpec, ParameterKind, ParameterSpec, PluginSpec};
pub use registry::CapabilityRegistry;
