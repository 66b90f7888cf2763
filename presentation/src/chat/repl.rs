//! REPL (Read-Eval-Print Loop) for the assistant

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use crate::progress::reporter::Spinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use taskmate_application::{Assistant, RecordStore};
use tracing::debug;

const PROMPT: &str = "> ";
const EXIT_TOKENS: [&str; 3] = ["exit", "quit", "sair"];

/// Whether `line` ends the session (case-insensitive).
pub fn is_exit_token(line: &str) -> bool {
    let line = line.trim();
    EXIT_TOKENS.iter().any(|token| line.eq_ignore_ascii_case(token))
}

/// Classified input line
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Skip,
    Exit,
    Help,
    UnknownCommand(&'a str),
    Request(&'a str),
}

impl<'a> ReplInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Skip;
        }
        if is_exit_token(line) {
            return ReplInput::Exit;
        }
        match line {
            "/help" | "/h" | "/?" => ReplInput::Help,
            "/quit" | "/exit" | "/q" => ReplInput::Exit,
            _ if line.starts_with('/') => ReplInput::UnknownCommand(line),
            _ => ReplInput::Request(line),
        }
    }
}

/// Interactive assistant REPL
pub struct AssistantRepl<S> {
    assistant: Assistant<S>,
    config: ReplConfig,
}

impl<S: RecordStore> AssistantRepl<S> {
    pub fn new(assistant: Assistant<S>) -> Self {
        Self {
            assistant,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until an exit token or Ctrl-D.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        print!("{}", ConsoleFormatter::format_banner(self.assistant.resolver_name()));

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => match ReplInput::parse(&line) {
                    ReplInput::Skip => continue,
                    ReplInput::Exit => break,
                    ReplInput::Help => print!("{}", ConsoleFormatter::format_tips()),
                    ReplInput::UnknownCommand(cmd) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type /help for available commands");
                    }
                    ReplInput::Request(request) => {
                        let _ = rl.add_history_entry(request);
                        let reply = self.process(request).await;
                        println!("{}", ConsoleFormatter::format_reply(&reply));
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        println!("Bye!");
        Ok(())
    }

    async fn process(&self, request: &str) -> String {
        let _spinner = (self.config.show_progress && self.assistant.resolver_name() == "model")
            .then(|| Spinner::start("Thinking..."));
        self.assistant.handle(request).await
    }
}
