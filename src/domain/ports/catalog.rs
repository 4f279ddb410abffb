//! Creature catalog port.
//!
//! The catalog is loaded once at startup and is read-only afterwards, so
//! lookups are synchronous and need no locking.

use crate::domain::errors::DomainResult;
use crate::domain::models::CreatureStats;

/// Read-only creature lookup
pub trait Catalog: Send + Sync {
    /// Resolves a creature by name, id or numeric catalog index
    ///
    /// Matching is case-insensitive. A purely numeric query is first
    /// resolved through the index-to-name table.
    ///
    /// # Errors
    /// Returns `DomainError::CreatureNotFound` when nothing matches
    fn find_creature(&self, name_or_index: &str) -> DomainResult<CreatureStats>;

    /// Number of creatures known to the catalog
    fn len(&self) -> usize;

    /// Whether the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
