//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Prefix for environment overrides (`TASKMATE_PROVIDER__MODEL=...`)
pub const ENV_PREFIX: &str = "TASKMATE_";

const PROJECT_FILES: [&str; 2] = ["taskmate.toml", ".taskmate.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `TASKMATE_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./taskmate.toml` or `./.taskmate.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/taskmate/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn extract(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/taskmate/config.toml if set,
    /// otherwise the platform config dir.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("taskmate").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./taskmate.toml or ./.taskmate.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.router.mode, "keyword");
        assert_eq!(config.storage.data_dir, "data");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("taskmate"));
    }

    /// Point the global config at a file inside the jail.
    fn isolate_global(jail: &mut Jail) -> PathBuf {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        xdg.join("taskmate").join("config.toml")
    }

    #[test]
    fn test_load_merges_sources_in_priority_order() {
        Jail::expect_with(|jail| {
            let global = isolate_global(jail);
            std::fs::create_dir_all(global.parent().unwrap()).unwrap();
            std::fs::write(
                &global,
                "[router]\nmode = \"model\"\n\n[storage]\ndata_dir = \"global\"\n",
            )
            .unwrap();
            jail.create_file(
                "taskmate.toml",
                "[storage]\ndata_dir = \"project\"\n\n[provider]\nmax_attempts = 2\n",
            )?;
            jail.create_file(
                "custom.toml",
                "[provider]\nmax_attempts = 5\nmodel = \"explicit\"\n",
            )?;
            jail.set_env("TASKMATE_PROVIDER__MODEL", "from-env");

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.router.mode, "model");
            assert_eq!(config.storage.data_dir, "project");
            assert_eq!(config.provider.max_attempts, 5);
            assert_eq!(config.provider.model, "from-env");
            assert_eq!(config.provider.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_override_splits_sections() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(".taskmate.toml", "[router]\nmode = \"keyword\"\n")?;
            jail.set_env("TASKMATE_ROUTER__MODE", "model");
            jail.set_env("TASKMATE_PROVIDER__MAX_ATTEMPTS", "7");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.router.mode, "model");
            assert_eq!(config.provider.max_attempts, 7);
            assert_eq!(config.storage.data_dir, "data");
            Ok(())
        });
    }

    #[test]
    fn test_env_value_for_whole_section_is_rejected() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.set_env("TASKMATE_STORAGE", "x");

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_types() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("taskmate.toml", "[provider]\nmax_attempts = \"many\"\n")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
