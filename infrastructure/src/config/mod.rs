//! Configuration file loading for taskmate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TASKMATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./taskmate.toml` or `./.taskmate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/taskmate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileNotesConfig, FileProviderConfig, FileReplConfig,
    FileRouterConfig, FileStorageConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
