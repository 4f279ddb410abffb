//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces infrastructure adapters implement:
//! - Catalog: creature lookup by name or catalog index
//! - Outbound: delivery of prompts and results to a user
//!
//! These traits keep the session manager and search engine independent of
//! where creature data comes from and how messages reach the user.

pub mod catalog;
pub mod outbound;

pub use catalog::Catalog;
pub use outbound::Outbound;
