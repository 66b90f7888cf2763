//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use taskmate_domain::ResolverMode;

/// Resolver selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Offline keyword rules
    Keyword,
    /// Language-model classification
    Model,
}

impl From<ModeArg> for ResolverMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keyword => ResolverMode::Keyword,
            ModeArg::Model => ResolverMode::Model,
        }
    }
}

/// CLI arguments for taskmate
#[derive(Parser, Debug)]
#[command(name = "taskmate")]
#[command(author, version, about = "Personal assistant for tasks and notes")]
#[command(long_about = r#"
Taskmate turns short natural-language commands into task and note operations.

Requests are routed either by fixed keyword rules (offline, default) or by a
language model that picks the matching function.

Configuration files are loaded from (in priority order):
1. TASKMATE_* environment variables
2. --config <path>     Explicit config file
3. ./taskmate.toml     Project-level config
4. ~/.config/taskmate/config.toml   Global config

Example:
  taskmate add tarefa Buy coffee
  taskmate listar tarefas
  taskmate --mode model "remind me to call the bank"
  taskmate                       (interactive prompt)
"#)]
pub struct Cli {
    /// Run a single command and exit (interactive prompt when omitted)
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,

    /// How input is routed (overrides [router] mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Directory holding tasks.json and notes.json (overrides [storage] data_dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Write daily-rotated diagnostic logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The one-shot command line, if words were given.
    pub fn one_shot(&self) -> Option<String> {
        let line = self.command.join(" ");
        (!line.trim().is_empty()).then_some(line)
    }
}
