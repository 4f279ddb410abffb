//! Command-line interface
//!
//! Clap definitions, command handlers and terminal output.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

pub use types::{Cli, Commands};

use crate::domain::models::{Config, LevelTable};
use crate::infrastructure::catalog::JsonCatalog;
use crate::infrastructure::config::ConfigLoader;
use crate::services::SearchEngine;

/// Collaborators every command works against, built once per invocation
pub struct AppContext {
    /// Loaded configuration
    pub config: Config,
    /// Creature catalog
    pub catalog: Arc<JsonCatalog>,
    /// IV search over the standard level table
    pub engine: Arc<SearchEngine>,
}

impl AppContext {
    /// Loads the catalog named by the configuration and builds the engine
    pub fn load(config: Config) -> Result<Self> {
        let catalog = JsonCatalog::load(&config.catalog.path)?;
        let engine = SearchEngine::new(Arc::new(LevelTable::standard()))
            .with_report_limit(config.search.report_limit);

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
        })
    }
}

/// Loads configuration from an explicit file or the default hierarchy
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

/// Prints an error and exits with a failure status
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
