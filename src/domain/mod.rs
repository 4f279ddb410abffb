//! Domain layer for the IV calculator
//!
//! This module contains the core models, errors and the port traits that
//! infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
