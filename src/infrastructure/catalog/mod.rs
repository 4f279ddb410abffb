//! Creature catalog infrastructure
//!
//! Loads the creature catalog once at startup into an immutable lookup
//! structure shared by the session manager and the CLI.

pub mod json_catalog;

pub use json_catalog::JsonCatalog;
