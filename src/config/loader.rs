//! Configuration loading and saving
//!
//! Loads the root YAML configuration file when present, applies environment
//! variable overrides, and falls back to built-in defaults.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides (MAIL2PDF_SERVER)
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = match Self::load_file(&paths::root_config_path()) {
            Ok(file_config) => file_config,
            Err(_) => Self::load_defaults(),
        };
        config = Self::apply_env_overrides(config);
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration file and the merged result
    pub fn validate() -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            let config = Self::load_file(&root_path)?;
            url::Url::parse(&config.server_url).with_context(|| {
                format!("serverUrl is not a valid URL: {}", config.server_url)
            })?;
        }
        let merged = Self::load().context("Failed to load merged configuration")?;
        url::Url::parse(&merged.server_url)
            .with_context(|| format!("serverUrl is not a valid URL: {}", merged.server_url))?;
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Save the configuration to the root config file
    pub fn save_root(config: &Config) -> Result<()> {
        let path = paths::root_config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
        std::fs::write(&path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(server) = std::env::var("MAIL2PDF_SERVER") {
            if !server.is_empty() {
                tracing::debug!("Using server URL from MAIL2PDF_SERVER: {}", server);
                config.server_url = server;
            }
        }
        config
    }
}
