//! ivcalc - Conversational IV calculator
//!
//! Recovers the hidden individual values (IVs) of a caught creature from its
//! observed CP and optional HP, level, stardust cost and appraisal hint. Users
//! drive the calculation through a short per-user conversation; every user
//! has at most one conversation at a time and conversations expire after a
//! configurable timeout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): stat formulas, search engine, conversation and session manager
//! - **Infrastructure Layer** (`infrastructure`): catalog loading, outbound sinks, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ivcalc::{BaseStats, Level, LevelTable, Observation, SearchEngine};
//!
//! let engine = SearchEngine::new(Arc::new(LevelTable::standard()));
//! let outcome = engine.search(
//!     &BaseStats::new(118, 111, 128),
//!     &Observation::with_cp(637).level(Level::whole(20)),
//! )?;
//! println!("{}", outcome.report);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BaseStats, Config, CreatureStats, DominantStats, InboundEvent, IvCandidate, Level, LevelTable,
    Observation, SessionState, UserMessage,
};
pub use domain::ports::{Catalog, Outbound};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ConversationContext, SearchEngine, SearchOutcome, SessionManager};
