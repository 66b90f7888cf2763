//! CLI entrypoint for taskmate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use taskmate_application::{
    Assistant, BehaviorConfig, DeterministicSummarizer, Dispatcher, IntentResolver,
    KeywordResolver, LlmGateway, ModelResolver, NotesPlugin, RouteLogger, Summarizer, TaskPlugin,
};
use taskmate_domain::{CapabilityRegistry, ResolverMode, SummarizerKind};
use taskmate_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStore, JsonlRouteLogger, ModelSummarizer,
    OpenAiCompatibleGateway,
};
use taskmate_presentation::config::default_history_file;
use taskmate_presentation::{AssistantRepl, Cli, ReplConfig};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        eprintln!("Warning: {}", issue.message);
    }

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.logging.log_dir.as_ref().map(PathBuf::from));
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref());

    let mode = cli
        .mode
        .map(ResolverMode::from)
        .unwrap_or_else(|| config.router.parse_mode().0);
    let summarizer_kind = config.notes.parse_summarizer().0;
    info!(%mode, "Starting taskmate");

    let behavior = BehaviorConfig {
        summary_max_chars: config.notes.summary_max_chars,
        ..BehaviorConfig::default()
    }
    .with_routing_max_tokens(config.provider.effective_max_tokens());

    // === Dependency Injection ===
    let registry = Arc::new(CapabilityRegistry::builtin());

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_dir));
    let store = Arc::new(JsonFileStore::new(data_dir));
    info!(data_dir = %store.data_dir().display(), "Record store ready");

    let needs_model = mode == ResolverMode::Model || summarizer_kind == SummarizerKind::Model;
    let gateway: Option<Arc<dyn LlmGateway>> = if needs_model {
        let gateway = OpenAiCompatibleGateway::from_config(&config.provider)
            .context("Language-model provider is not usable")?;
        info!(model = gateway.model(), endpoint = gateway.endpoint(), "Model gateway ready");
        Some(Arc::new(gateway))
    } else {
        None
    };

    let resolver: Arc<dyn IntentResolver> = match (mode, &gateway) {
        (ResolverMode::Model, Some(gateway)) => Arc::new(
            ModelResolver::new(gateway.clone(), registry.clone())
                .with_max_tokens(behavior.routing_max_tokens),
        ),
        _ => Arc::new(KeywordResolver::new(registry.clone())),
    };

    let mut tasks =
        TaskPlugin::new(store.clone()).with_advice_max_tokens(behavior.advice_max_tokens);
    if mode == ResolverMode::Model
        && let Some(gateway) = &gateway
    {
        tasks = tasks.with_advisor(gateway.clone());
    }

    let summarizer: Arc<dyn Summarizer> = match (summarizer_kind, &gateway) {
        (SummarizerKind::Model, Some(gateway)) => Arc::new(
            ModelSummarizer::new(gateway.clone()).with_max_tokens(behavior.summary_max_tokens),
        ),
        _ => Arc::new(DeterministicSummarizer),
    };
    let notes = NotesPlugin::new(store)
        .with_summarizer(summarizer)
        .with_summary_max_chars(behavior.summary_max_chars);

    let mut assistant = Assistant::new(resolver, Dispatcher::new(registry, tasks, notes));
    if let Some(route_log) = route_logger(&config) {
        assistant = assistant.with_route_log(route_log);
    }

    // One-shot mode
    if let Some(line) = cli.one_shot() {
        println!("{}", assistant.handle(&line).await);
        return Ok(());
    }

    let repl_config = ReplConfig {
        show_progress: !cli.quiet && config.repl.show_progress,
        history_file: config
            .repl
            .history_file
            .as_ref()
            .map(PathBuf::from)
            .or_else(default_history_file),
    };
    AssistantRepl::new(assistant)
        .with_config(repl_config)
        .run()
        .await?;

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a daily file under
/// `log_dir` when given. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace", // -vvv or more
        })
    });

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "taskmate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn route_logger(config: &FileConfig) -> Option<Arc<dyn RouteLogger>> {
    let path = config.logging.route_log.as_ref()?;
    match JsonlRouteLogger::new(path) {
        Some(logger) => {
            info!(path = %logger.path().display(), "Route log enabled");
            Some(Arc::new(logger))
        }
        None => {
            warn!("Route log disabled");
            None
        }
    }
}
