//! Capability Registry
//!
//! The single declaration of which plugins exist, which functions each one
//! exposes and which parameters those functions take. Both resolvers and the
//! dispatcher query it; nothing mutates it after construction.

use super::entities::{Capability, FunctionSpec, ParameterSpec, PluginSpec};
use crate::intent::candidate::Arguments;

/// Immutable plugin → function → parameter declaration
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityRegistry {
    plugins: Vec<PluginSpec>,
}

impl CapabilityRegistry {
    pub fn new(plugins: Vec<PluginSpec>) -> Self {
        Self { plugins }
    }

    /// The Tasks and Notes plugins shipped with the assistant.
    pub fn builtin() -> Self {
        let tasks = PluginSpec::new("Tasks")
            .with_function(
                FunctionSpec::new(Capability::AddTask, "Add a task").with_parameter(
                    ParameterSpec::text("title", "Title of the task").with_default("Untitled"),
                ),
            )
            .with_function(FunctionSpec::new(Capability::ListTasks, "List every task"))
            .with_function(
                FunctionSpec::new(Capability::CompleteTask, "Mark a task as done")
                    .with_parameter(
                        ParameterSpec::integer("index", "1-based position of the task")
                            .with_default(-1),
                    ),
            )
            .with_function(FunctionSpec::new(
                Capability::RecommendNext,
                "Suggest which pending task to do next",
            ));

        let notes = PluginSpec::new("Notes")
            .with_function(
                FunctionSpec::new(Capability::AddNote, "Add a note").with_parameter(
                    ParameterSpec::text("content", "Text of the note").with_default("Empty"),
                ),
            )
            .with_function(FunctionSpec::new(Capability::ListNotes, "List every note"))
            .with_function(
                FunctionSpec::new(Capability::SearchNotes, "Find notes containing a term")
                    .with_parameter(
                        ParameterSpec::text("term", "Text to look for").with_default(""),
                    ),
            )
            .with_function(
                FunctionSpec::new(Capability::SummarizeNote, "Summarize one note")
                    .with_parameter(
                        ParameterSpec::integer("index", "1-based position of the note")
                            .with_default(-1),
                    ),
            );

        Self::new(vec![tasks, notes])
    }

    pub fn plugins(&self) -> impl Iterator<Item = &PluginSpec> {
        self.plugins.iter()
    }

    fn plugin(&self, plugin: &str) -> Option<&PluginSpec> {
        self.plugins
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(plugin))
    }

    /// Function names of a plugin, in declaration order. Empty for unknown plugins.
    pub fn functions_of(&self, plugin: &str) -> Vec<&str> {
        self.plugin(plugin)
            .map(|p| p.functions.iter().map(|f| f.name()).collect())
            .unwrap_or_default()
    }

    /// Parameter names of a function, in declaration order.
    pub fn parameters_of(&self, plugin: &str, function: &str) -> Vec<&str> {
        self.function(plugin, function)
            .map(|f| f.parameters.iter().map(|p| p.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn is_valid(&self, plugin: &str, function: &str) -> bool {
        self.function(plugin, function).is_some()
    }

    /// Map a plugin/function pair onto the allow-listed [`Capability`].
    ///
    /// Names are compared ASCII case-insensitively; anything not declared
    /// here yields `None`.
    pub fn capability(&self, plugin: &str, function: &str) -> Option<Capability> {
        self.function(plugin, function).map(|f| f.capability)
    }

    pub fn function(&self, plugin: &str, function: &str) -> Option<&FunctionSpec> {
        self.plugin(plugin)?
            .functions
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(function))
    }

    pub fn spec(&self, capability: Capability) -> Option<&FunctionSpec> {
        self.plugins
            .iter()
            .flat_map(|p| p.functions.iter())
            .find(|f| f.capability == capability)
    }

    /// Insert the declared default for every required parameter that is missing.
    pub fn fill_defaults(&self, capability: Capability, arguments: &mut Arguments) {
        let Some(spec) = self.spec(capability) else {
            return;
        };
        for param in spec.parameters.iter().filter(|p| p.required) {
            if !arguments.contains(&param.name)
                && let Some(default) = &param.default
            {
                arguments.insert(param.name.clone(), default.clone());
            }
        }
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
