//! Routing-response parsing for the model-assisted resolver.
//!
//! The model is asked for `{"plugin", "function", "parameters"}` but its reply
//! is untrusted free text. Everything here is pure: find the JSON span, check
//! it against the [`CapabilityRegistry`], and backfill arguments from the
//! user's own words.

use super::candidate::Arguments;
use super::text::text_after_keyword;
use crate::capability::{Capability, CapabilityRegistry};
use serde_json::Value;
use thiserror::Error;

/// Why a model reply could not be turned into a route
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteParseError {
    #[error("no JSON object in response")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON value is not an object")]
    NotAnObject,

    #[error("model declined to pick a function")]
    NoFunction,

    #[error("unknown capability {plugin}.{function}")]
    UnknownCapability { plugin: String, function: String },
}

/// Greedy `{ ... }` span: from the first `{` to the last `}` in the text.
pub fn extract_json_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}

/// Parse a routing reply into an allow-listed capability plus the arguments
/// the model supplied.
pub fn parse_route_response(
    response: &str,
    registry: &CapabilityRegistry,
) -> Result<(Capability, Arguments), RouteParseError> {
    let span = extract_json_span(response).ok_or(RouteParseError::NoJsonObject)?;
    let parsed: Value =
        serde_json::from_str(span).map_err(|e| RouteParseError::InvalidJson(e.to_string()))?;
    let object = parsed.as_object().ok_or(RouteParseError::NotAnObject)?;

    let plugin = object.get("plugin").and_then(Value::as_str).map(str::trim);
    let function = object.get("function").and_then(Value::as_str).map(str::trim);

    let (Some(plugin), Some(function)) = (plugin, function) else {
        return Err(RouteParseError::NoFunction);
    };
    if plugin.is_empty() || function.is_empty() {
        return Err(RouteParseError::NoFunction);
    }

    let capability =
        registry
            .capability(plugin, function)
            .ok_or_else(|| RouteParseError::UnknownCapability {
                plugin: plugin.to_string(),
                function: function.to_string(),
            })?;

    let mut arguments = Arguments::new();
    if let Some(parameters) = object.get("parameters").and_then(Value::as_object) {
        arguments.merge_object(parameters);
    }

    Ok((capability, arguments))
}

/// Fill the free-text argument of AddTask/AddNote from the original input
/// when the model left it out (or blank).
///
/// Only writes when the keyword yields text; otherwise the registry default
/// applies later.
pub fn backfill_from_input(capability: Capability, arguments: &mut Arguments, input: &str) {
    let (param, keyword) = match capability {
        Capability::AddTask => ("title", "tarefa"),
        Capability::AddNote => ("content", "nota"),
        _ => return,
    };

    let supplied = arguments
        .text_lossy(param)
        .is_some_and(|value| !value.trim().is_empty());
    if supplied {
        return;
    }

    let text = text_after_keyword(input, keyword);
    if text.is_empty() {
        // Drop a blank value so the registry default takes its place.
        arguments.remove(param);
    } else {
        arguments.insert(param, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(response: &str) -> Result<(Capability, Arguments), RouteParseError> {
        parse_route_response(response, &CapabilityRegistry::builtin())
    }

    #[test]
    fn test_extract_json_span_tolerates_commentary() {
        let response = "Sure! Here it is:\n```json\n{\"plugin\": \"Tasks\"}\n```\nAnything else?";
        assert_eq!(extract_json_span(response), Some("{\"plugin\": \"Tasks\"}"));
        assert_eq!(extract_json_span("no braces"), None);
        assert_eq!(extract_json_span("} backwards {"), None);
    }

    #[test]
    fn test_extract_json_span_is_greedy() {
        let response = r#"{"a": {"b": 1}} trailing {"c": 2}"#;
        assert_eq!(extract_json_span(response), Some(response));
    }

    #[test]
    fn test_parse_valid_route() {
        let (c, args) = parse(
            r#"{"plugin": "Tasks", "function": "CompleteTask", "parameters": {"index": 2}}"#,
        )
        .unwrap();
        assert_eq!(c, Capability::CompleteTask);
        assert_eq!(args.integer("index"), 2);
    }

    #[test]
    fn test_parse_plain_prose_fails() {
        assert_eq!(
            parse("I think you want to add a task."),
            Err(RouteParseError::NoJsonObject)
        );
    }

    #[test]
    fn test_parse_broken_json_fails() {
        assert!(matches!(
            parse(r#"{"plugin": "Tasks", "function": }"#),
            Err(RouteParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_null_function_fails() {
        assert_eq!(
            parse(r#"{"plugin": null, "function": null, "parameters": {}}"#),
            Err(RouteParseError::NoFunction)
        );
        assert_eq!(
            parse(r#"{"plugin": "Tasks", "parameters": {}}"#),
            Err(RouteParseError::NoFunction)
        );
    }

    #[test]
    fn test_parse_hallucinated_function_fails() {
        assert_eq!(
            parse(r#"{"plugin": "Tasks", "function": "DeleteAllTasks"}"#),
            Err(RouteParseError::UnknownCapability {
                plugin: "Tasks".to_string(),
                function: "DeleteAllTasks".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_ignores_non_object_parameters() {
        let (c, args) =
            parse(r#"{"plugin": "Notes", "function": "ListNotes", "parameters": [1, 2]}"#)
                .unwrap();
        assert_eq!(c, Capability::ListNotes);
        assert!(args.is_empty());
    }

    #[test]
    fn test_backfill_title_from_input() {
        let mut args = Arguments::new();
        backfill_from_input(Capability::AddTask, &mut args, "Nova TAREFA: lavar o carro");
        assert_eq!(args.text("title"), Some(": lavar o carro"));
    }

    #[test]
    fn test_backfill_without_keyword_leaves_default_to_registry() {
        let mut args = Arguments::new();
        backfill_from_input(Capability::AddTask, &mut args, "lembrar de comprar pão");
        assert!(!args.contains("title"));
    }

    #[test]
    fn test_backfill_keeps_model_value() {
        let mut args = Arguments::new().with("content", "from model");
        backfill_from_input(Capability::AddNote, &mut args, "add nota from user");
        assert_eq!(args.text("content"), Some("from model"));
    }

    #[test]
    fn test_backfill_replaces_blank_value() {
        let mut args = Arguments::new().with("content", "  ").with("extra", json!(1));
        backfill_from_input(Capability::AddNote, &mut args, "sem palavra chave");
        assert!(!args.contains("content"));
        assert!(args.contains("extra"));
    }

    #[test]
    fn test_backfill_ignores_other_capabilities() {
        let mut args = Arguments::new();
        backfill_from_input(Capability::SearchNotes, &mut args, "buscar nota café");
        assert!(args.is_empty());
    }
}
