//! Console formatter for assistant replies

use colored::Colorize;
use taskmate_application::use_cases::messages::NOT_UNDERSTOOD;

/// Formats messages for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Colour a reply by kind: faults red, the not-understood hint yellow,
    /// everything else unchanged.
    pub fn format_reply(message: &str) -> String {
        if message.starts_with("Error: ") {
            message.red().to_string()
        } else if message == NOT_UNDERSTOOD {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    pub fn format_banner(resolver: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Taskmate".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Resolver:".cyan().bold(), resolver));
        output.push_str(&Self::format_tips());
        output
    }

    pub fn format_tips() -> String {
        let mut output = format!("{}\n", "Try:".cyan().bold());
        for (example, what) in [
            ("add tarefa Buy coffee", "add a task"),
            ("listar tarefas", "list tasks"),
            ("concluir 1", "complete task 1"),
            ("sugerir proxima", "recommend the next task"),
            ("add nota <text>", "save a note"),
            ("listar notas", "list notes"),
            ("buscar nota <term>", "search notes"),
            ("resumo 1", "summarize note 1"),
        ] {
            output.push_str(&format!("  {:<24} {}\n", example, what.dimmed()));
        }
        output.push_str(&format!(
            "\n{}\n",
            "Type 'exit', 'quit' or 'sair' to leave, /help to see this again.".dimmed()
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_is_unchanged() {
        colored::control::set_override(false);
        assert_eq!(ConsoleFormatter::format_reply("Note saved."), "Note saved.");
        assert_eq!(
            ConsoleFormatter::format_reply("Error: disk full"),
            "Error: disk full"
        );
    }

    #[test]
    fn test_tips_list_every_capability() {
        colored::control::set_override(false);
        let tips = ConsoleFormatter::format_tips();
        for example in ["add tarefa", "listar tarefas", "concluir", "sugerir proxima", "resumo"] {
            assert!(tips.contains(example), "{}", example);
        }
        assert!(ConsoleFormatter::format_banner("keyword").contains("Resolver: keyword"));
    }
}
