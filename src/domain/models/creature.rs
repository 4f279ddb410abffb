use serde::{Deserialize, Serialize};

/// Base stats of a creature species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    /// Base attack
    pub base_attack: u32,
    /// Base defense
    pub base_defense: u32,
    /// Base stamina
    pub base_stamina: u32,
}

impl BaseStats {
    /// Creates base stats from attack, defense and stamina
    pub const fn new(base_attack: u32, base_defense: u32, base_stamina: u32) -> Self {
        Self {
            base_attack,
            base_defense,
            base_stamina,
        }
    }
}

/// A creature as resolved from the catalog
///
/// Immutable once loaded; the search engine and sessions only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    /// Normalized catalog identifier (lower-case, `-` separated)
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog index (dex number)
    pub dex: u32,
    /// Base stats used by the stat formulas
    pub stats: BaseStats,
    /// Maximum CP as published by the catalog
    pub max_cp: u32,
}

impl CreatureStats {
    /// Creates a creature record
    pub fn new(id: impl Into<String>, name: impl Into<String>, dex: u32, stats: BaseStats, max_cp: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dex,
            stats,
            max_cp,
        }
    }
}
