//! Infrastructure layer module
//!
//! This module contains the adapters around the core:
//! - Creature catalog loaded from JSON
//! - Outbound message sinks (console, recording)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod outbound;
