use serde::{Deserialize, Serialize};

use super::level_table::Level;

/// Highest possible IV on each axis
pub const MAX_IV: u8 = 15;

/// Lowest IV a raid or research creature can have
pub const RAID_MIN_IV: u8 = 10;

/// IV percentage: `round(100 * (atk + def + sta) / 45)`
pub fn iv_percent(attack: u8, defense: u8, stamina: u8) -> u8 {
    let total = f64::from(attack) + f64::from(defense) + f64::from(stamina);
    (total * 100.0 / 45.0).round() as u8
}

/// One IV combination consistent with an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvCandidate {
    /// Level the combination was found at
    pub level: Level,
    /// Attack IV
    pub attack: u8,
    /// Defense IV
    pub defense: u8,
    /// Stamina IV
    pub stamina: u8,
    /// Rounded IV percentage
    pub percent: u8,
}

impl IvCandidate {
    /// Creates a candidate and derives its percentage
    pub fn new(level: Level, attack: u8, defense: u8, stamina: u8) -> Self {
        Self {
            level,
            attack,
            defense,
            stamina,
            percent: iv_percent(attack, defense, stamina),
        }
    }
}

/// One row of the raid CP chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidChartRow {
    /// Attack IV
    pub attack: u8,
    /// Defense IV
    pub defense: u8,
    /// Stamina IV
    pub stamina: u8,
    /// Rounded IV percentage
    pub percent: u8,
    /// CP at level 15
    pub cp15: u32,
    /// CP at level 20
    pub cp20: u32,
    /// CP at level 25
    pub cp25: u32,
}

/// Anything carrying a percentage, sortable by the chart ordering
pub trait Ranked {
    /// IV percentage used for ranking
    fn percent(&self) -> u8;
}

impl Ranked for IvCandidate {
    fn percent(&self) -> u8 {
        self.percent
    }
}

impl Ranked for RaidChartRow {
    fn percent(&self) -> u8 {
        self.percent
    }
}

/// Sorts by percentage descending, keeping enumeration order among ties
pub fn sort_ranked<T: Ranked>(rows: &mut [T]) {
    rows.sort_by(|a, b| b.percent().cmp(&a.percent()));
}
