use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::level_table::Level;
use crate::domain::errors::DomainError;

/// Which IV axes tie for the visually largest bar
///
/// Parsed from letters, e.g. `"a"`, `"ds"` or `"ads"`. At least one axis is
/// always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominantStats {
    /// Attack is among the highest IVs
    pub attack: bool,
    /// Defense is among the highest IVs
    pub defense: bool,
    /// Stamina is among the highest IVs
    pub stamina: bool,
}

impl DominantStats {
    /// The axes tied for the maximum of an IV triple
    pub fn of(attack: u8, defense: u8, stamina: u8) -> Self {
        let highest = attack.max(defense).max(stamina);
        Self {
            attack: attack == highest,
            defense: defense == highest,
            stamina: stamina == highest,
        }
    }
}

impl FromStr for DominantStats {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hint = Self {
            attack: false,
            defense: false,
            stamina: false,
        };
        for c in s.trim().chars() {
            match c.to_ascii_lowercase() {
                'a' => hint.attack = true,
                'd' => hint.defense = true,
                's' => hint.stamina = true,
                _ => return Err(DomainError::InvalidDominantStats(s.to_string())),
            }
        }
        if !(hint.attack || hint.defense || hint.stamina) {
            return Err(DomainError::InvalidDominantStats(s.to_string()));
        }
        Ok(hint)
    }
}

impl fmt::Display for DominantStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attack {
            f.write_str("a")?;
        }
        if self.defense {
            f.write_str("d")?;
        }
        if self.stamina {
            f.write_str("s")?;
        }
        Ok(())
    }
}

/// Evidence accumulated about a creature before searching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Exact level, if known
    pub level: Option<Level>,
    /// Observed CP
    pub cp: Option<u32>,
    /// Observed HP
    pub hp: Option<u32>,
    /// Stardust cost of the next power-up
    pub stardust: Option<u32>,
    /// Dominant-stat hint
    pub best: Option<DominantStats>,
}

impl Observation {
    /// Observation with only CP known
    pub fn with_cp(cp: u32) -> Self {
        Self {
            cp: Some(cp),
            ..Self::default()
        }
    }

    /// Sets the level
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the HP
    #[must_use]
    pub const fn hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Sets the stardust cost
    #[must_use]
    pub const fn stardust(mut self, stardust: u32) -> Self {
        self.stardust = Some(stardust);
        self
    }

    /// Sets the dominant-stat hint
    #[must_use]
    pub const fn best(mut self, best: DominantStats) -> Self {
        self.best = Some(best);
        self
    }
}
