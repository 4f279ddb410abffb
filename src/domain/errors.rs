//! Domain errors for the IV calculator.

use thiserror::Error;

use super::models::Level;

/// Domain-level errors that can occur while resolving creatures and levels.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Creature not found: {0}")]
    CreatureNotFound(String),

    #[error("Level {0} is not in the level table")]
    UnknownLevel(Level),

    #[error("Invalid level: {0}. Levels go in steps of 0.5")]
    InvalidLevel(f64),

    #[error("Invalid dominant stats hint: {0:?}. Use letters a, d and s")]
    InvalidDominantStats(String),

    #[error("Observation has no CP")]
    MissingCp,
}

pub type DomainResult<T> = Result<T, DomainError>;
