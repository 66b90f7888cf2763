//! Capability domain entities

use serde::{Deserialize, Serialize};

/// Every operation the assistant can dispatch.
///
/// This is the allow-list: a resolver may only hand the dispatcher a
/// plugin/function pair that maps onto one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    AddTask,
    ListTasks,
    CompleteTask,
    RecommendNext,
    AddNote,
    ListNotes,
    SearchNotes,
    SummarizeNote,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::AddTask,
        Capability::ListTasks,
        Capability::CompleteTask,
        Capability::RecommendNext,
        Capability::AddNote,
        Capability::ListNotes,
        Capability::SearchNotes,
        Capability::SummarizeNote,
    ];

    /// Name of the plugin that owns this capability
    pub fn plugin(&self) -> &'static str {
        match self {
            Capability::AddTask
            | Capability::ListTasks
            | Capability::CompleteTask
            | Capability::RecommendNext => "Tasks",
            Capability::AddNote
            | Capability::ListNotes
            | Capability::SearchNotes
            | Capability::SummarizeNote => "Notes",
        }
    }

    /// Function name as exposed to resolvers
    pub fn function(&self) -> &'static str {
        match self {
            Capability::AddTask => "AddTask",
            Capability::ListTasks => "ListTasks",
            Capability::CompleteTask => "CompleteTask",
            Capability::RecommendNext => "RecommendNext",
            Capability::AddNote => "AddNote",
            Capability::ListNotes => "ListNotes",
            Capability::SearchNotes => "SearchNotes",
            Capability::SummarizeNote => "SummarizeNote",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.plugin(), self.function())
    }
}

/// Wire type of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Text,
    Integer,
}

impl ParameterKind {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterKind::Text => "string",
            ParameterKind::Integer => "integer",
        }
    }
}

/// Declared parameter of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name (e.g., "title")
    pub name: String,
    /// Human-readable description, used when prompting a model
    pub description: String,
    /// Wire type
    pub kind: ParameterKind,
    /// Whether the function cannot run without it
    pub required: bool,
    /// Value a resolver supplies when it cannot fill a required parameter
    pub default: Option<serde_json::Value>,
}

impl ParameterSpec {
    pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ParameterKind::Text,
            required: true,
            default: None,
        }
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ParameterKind::Integer,
            ..Self::text(name, description)
        }
    }

    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A callable function of a plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub capability: Capability,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
}

impl FunctionSpec {
    pub fn new(capability: Capability, description: impl Into<String>) -> Self {
        Self {
            capability,
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn name(&self) -> &'static str {
        self.capability.function()
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A named group of related functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,
    pub functions: Vec<FunctionSpec>,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }
}
