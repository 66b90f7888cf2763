//! Prompt templates for model-assisted routing, recommendations and summaries

use crate::capability::CapabilityRegistry;
use crate::record::TaskItem;

/// Templates for every prompt the assistant sends to a model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Single-turn routing prompt.
    ///
    /// Enumerates every plugin/function/parameter from the registry, embeds the
    /// user's line verbatim and asks for a bare JSON object.
    pub fn router(registry: &CapabilityRegistry, input: &str) -> String {
        let mut prompt = String::from(
            r#"You route user requests for a personal assistant that manages tasks and notes.
Pick the single function that matches the user's request.

Available functions:
"#,
        );

        for plugin in registry.plugins() {
            prompt.push_str(&format!("\nPlugin {}:\n", plugin.name));
            for function in &plugin.functions {
                let params = if function.parameters.is_empty() {
                    "no parameters".to_string()
                } else {
                    function
                        .parameters
                        .iter()
                        .map(|p| format!("{} ({}): {}", p.name, p.kind.as_str(), p.description))
                        .collect::<Vec<_>>()
                        .join("; ")
                };
                prompt.push_str(&format!(
                    "- {}: {} [{}]\n",
                    function.name(),
                    function.description,
                    params
                ));
            }
        }

        prompt.push_str(&format!(
            r#"
User input: {}

Answer with one JSON object and nothing else:
{{
  "plugin": "<plugin name>",
  "function": "<function name>",
  "parameters": {{ "<parameter name>": <value> }}
}}

If no function applies, answer with "plugin": null and "function": null."#,
            input
        ));

        prompt
    }

    /// Prompt asking which pending task to tackle next.
    pub fn recommend_next(tasks: &[TaskItem]) -> String {
        let listing = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let status = if task.done { "DONE" } else { "PENDING" };
                format!("{}. [{}] {}", i + 1, status, task.title)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Based on the task list below, recommend the most important task to do next.
Consider completed tasks, implicit priorities and logical dependencies.
Only choose among PENDING tasks.

TASKS:
{}

Reply in the form: 'Task N: <title>' followed by one short sentence of reasoning."#,
            listing
        )
    }

    /// Prompt asking for a short summary of a note.
    pub fn summarize(text: &str, max_chars: usize) -> String {
        format!(
            r#"Summarize the following text in at most {} characters, keeping the most important information.
Reply with the summary only.

{}"#,
            max_chars, text
        )
    }
}
