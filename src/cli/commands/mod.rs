//! CLI command implementations.

pub mod chat;
pub mod creature;
pub mod iv;
pub mod raid;
