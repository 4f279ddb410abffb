use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for ivcalc
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Creature catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Conversation session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Search report configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Creature catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Path to the JSON creature catalog
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/creatures.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Conversation session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    /// Seconds from creation until a conversation expires
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Capacity of each conversation's input queue
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_queue_capacity() -> usize {
    32
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// Search report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum number of rows in a rendered report
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
}

const fn default_report_limit() -> usize {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            report_limit: default_report_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (console only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Also log to the console (stderr) when a log directory is set
    #[serde(default = "default_true")]
    pub enable_stdout: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            enable_stdout: default_true(),
        }
    }
}
