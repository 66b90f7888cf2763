//! Route candidates and their arguments
//!
//! A [`RouteCandidate`] is built fresh for every input line by exactly one
//! resolver, consumed once by the dispatcher and then dropped.

use crate::capability::Capability;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parameter name → value mapping passed to a capability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(BTreeMap<String, Value>);

static NO_ARGUMENTS: Arguments = Arguments(BTreeMap::new());

impl Arguments {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merge a JSON object into these arguments. `null` values are skipped so
    /// that an explicit `null` counts as "not supplied".
    pub fn merge_object(&mut self, object: &serde_json::Map<String, Value>) {
        for (key, value) in object {
            if !value.is_null() {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }

    /// Get a string argument
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Get a string argument, rendering numbers and booleans as text.
    pub fn text_lossy(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Coerce an integer argument from its wire form (number or numeric
    /// string). Absent or non-numeric values become `0`.
    pub fn integer(&self, key: &str) -> i64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}

/// A fully resolved route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub plugin: String,
    pub function: String,
    pub arguments: Arguments,
}

/// Outcome of resolving one input line.
///
/// Plugin and function are either both present or both absent; the enum makes
/// the partial state unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteCandidate {
    Resolved(Route),
    Unresolved,
}

impl RouteCandidate {
    pub fn resolved(capability: Capability, arguments: Arguments) -> Self {
        Self::Resolved(Route {
            plugin: capability.plugin().to_string(),
            function: capability.function().to_string(),
            arguments,
        })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn plugin(&self) -> Option<&str> {
        match self {
            Self::Resolved(route) => Some(&route.plugin),
            Self::Unresolved => None,
        }
    }

    pub fn function(&self) -> Option<&str> {
        match self {
            Self::Resolved(route) => Some(&route.function),
            Self::Unresolved => None,
        }
    }

    pub fn arguments(&self) -> &Arguments {
        match self {
            Self::Resolved(route) => &route.arguments,
            Self::Unresolved => &NO_ARGUMENTS,
        }
    }
}
