use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Environment variable prefix; `__` separates nested keys
const ENV_PREFIX: &str = "IVCALC_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Catalog path cannot be empty")]
    EmptyCatalogPath,

    #[error("Invalid session timeout: {0}s. Must be at least 1 second")]
    InvalidSessionTimeout(u64),

    #[error("Invalid queue_capacity: {0}. Must be at least 1")]
    InvalidQueueCapacity(usize),

    #[error("Invalid report_limit: {0}. Must be at least 1")]
    InvalidReportLimit(usize),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .ivcalc/config.yaml (project config)
    /// 3. .ivcalc/local.yaml (local overrides, optional)
    /// 4. Environment variables (IVCALC_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".ivcalc/config.yaml"))
            .merge(Yaml::file(".ivcalc/local.yaml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCatalogPath);
        }

        if config.session.timeout_secs == 0 {
            return Err(ConfigError::InvalidSessionTimeout(config.session.timeout_secs));
        }

        if config.session.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity(config.session.queue_capacity));
        }

        if config.search.report_limit == 0 {
            return Err(ConfigError::InvalidReportLimit(config.search.report_limit));
        }

        Ok(())
    }
}
