//! Level multiplier table and stardust reverse lookup.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// A creature level in half-level steps.
///
/// Stored as twice the level so it can be ordered, hashed and compared
/// exactly (`Level::from_f64(20.5)` is stored as `41`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Level(u16);

impl Level {
    /// Creates a level from a whole level number
    pub const fn whole(level: u16) -> Self {
        Self(level * 2)
    }

    /// Creates a level from a count of half levels (`41` is level 20.5)
    pub const fn from_half_steps(half_steps: u16) -> Self {
        Self(half_steps)
    }

    /// Converts a decimal level, rejecting values off the 0.5 grid
    pub fn from_f64(level: f64) -> DomainResult<Self> {
        let doubled = level * 2.0;
        if !doubled.is_finite() || doubled < 1.0 || doubled > f64::from(u16::MAX) || doubled.fract() != 0.0 {
            return Err(DomainError::InvalidLevel(level));
        }
        Ok(Self(doubled as u16))
    }

    /// Returns the level as a decimal
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Number of half levels
    pub const fn half_steps(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

impl From<Level> for f64 {
    fn from(level: Level) -> Self {
        level.as_f64()
    }
}

impl TryFrom<f64> for Level {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

/// Combat-power multipliers for levels 1.0 through 40.0 in half-level steps
const CP_MULTIPLIERS: [f64; 79] = [
    0.094,
    0.135_137_431_8,
    0.166_397_87,
    0.192_650_919,
    0.215_732_47,
    0.236_572_661_3,
    0.255_720_05,
    0.273_530_381_2,
    0.290_249_88,
    0.306_057_377_5,
    0.321_087_6,
    0.335_445_036_2,
    0.349_212_68,
    0.362_457_751_1,
    0.375_235_6,
    0.387_592_416,
    0.399_567_28,
    0.411_193_551_4,
    0.4225,
    0.432_926_409_1,
    0.443_107_55,
    0.453_059_959_1,
    0.462_798_4,
    0.472_336_093,
    0.481_684_95,
    0.490_855_800_3,
    0.499_858_44,
    0.508_701_765,
    0.517_393_95,
    0.525_942_511_3,
    0.534_354_3,
    0.542_635_737_5,
    0.550_792_7,
    0.558_830_586_2,
    0.566_754_5,
    0.574_569_133_3,
    0.582_278_9,
    0.589_887_907_2,
    0.5974,
    0.604_823_665_1,
    0.612_157_3,
    0.619_404_121_6,
    0.626_567_1,
    0.633_649_143_2,
    0.640_652_95,
    0.647_580_966_6,
    0.654_435_63,
    0.661_219_252_4,
    0.667_934,
    0.674_581_895_9,
    0.681_164_9,
    0.687_684_903_8,
    0.694_143_65,
    0.700_542_87,
    0.706_884_2,
    0.713_169_109_1,
    0.719_399_1,
    0.725_575_613_6,
    0.7317,
    0.734_741_009_3,
    0.737_769_5,
    0.740_785_593_8,
    0.743_789_43,
    0.746_781_210_9,
    0.749_761_04,
    0.752_729_086_7,
    0.755_685_51,
    0.758_630_368_3,
    0.761_563_84,
    0.764_486_064_7,
    0.767_397_17,
    0.770_297_265_6,
    0.773_186_5,
    0.776_064_961_6,
    0.778_932_75,
    0.781_790_054_8,
    0.784_636_97,
    0.787_473_607_5,
    0.790_300_01,
];

/// Power-up stardust cost per pair of whole levels, starting at level 1
const STARDUST_COSTS: [u32; 20] = [
    200, 400, 600, 800, 1000, 1300, 1600, 1900, 2200, 2500, 3000, 3500, 4000, 4500, 5000, 6000,
    7000, 8000, 9000, 10000,
];

/// Ordered level → multiplier table with a stardust → levels reverse index
#[derive(Debug, Clone)]
pub struct LevelTable {
    multipliers: BTreeMap<Level, f64>,
    stardust: BTreeMap<u32, Vec<Level>>,
}

impl LevelTable {
    /// Builds a table from explicit entries
    ///
    /// Stardust level lists are kept in ascending level order.
    pub fn new(
        multipliers: impl IntoIterator<Item = (Level, f64)>,
        stardust: impl IntoIterator<Item = (u32, Vec<Level>)>,
    ) -> Self {
        let multipliers = multipliers.into_iter().collect();
        let stardust = stardust
            .into_iter()
            .map(|(cost, mut levels)| {
                levels.sort_unstable();
                levels.dedup();
                (cost, levels)
            })
            .collect();
        Self {
            multipliers,
            stardust,
        }
    }

    /// Standard table for levels 1–40
    ///
    /// Each stardust cost covers two whole levels and the half levels after
    /// them, so 2500 maps to 19, 19.5, 20 and 20.5. Levels past 40 are left out.
    pub fn standard() -> Self {
        let multipliers = CP_MULTIPLIERS
            .iter()
            .enumerate()
            .map(|(i, &m)| (Level::from_half_steps(i as u16 + 2), m));
        let max_half_steps = CP_MULTIPLIERS.len() as u16 + 1;
        let stardust = STARDUST_COSTS.iter().enumerate().map(move |(i, &cost)| {
            let first = Level::whole(i as u16 * 2 + 1).half_steps();
            let levels = (first..first + 4)
                .filter(|&half_steps| half_steps <= max_half_steps)
                .map(Level::from_half_steps)
                .collect();
            (cost, levels)
        });
        Self::new(multipliers, stardust)
    }

    /// Multiplier for a level in the table
    pub fn multiplier(&self, level: Level) -> DomainResult<f64> {
        self.multipliers
            .get(&level)
            .copied()
            .ok_or(DomainError::UnknownLevel(level))
    }

    /// Whether the level is a key of the table
    pub fn contains(&self, level: Level) -> bool {
        self.multipliers.contains_key(&level)
    }

    /// All levels in ascending order
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.multipliers.keys().copied()
    }

    /// Levels that cost the given amount of stardust, if the cost is known
    pub fn levels_for_stardust(&self, cost: u32) -> Option<&[Level]> {
        self.stardust.get(&cost).map(Vec::as_slice)
    }

    /// Number of levels in the table
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether the table has no levels
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_bounds() {
        let table = LevelTable::standard();
        assert_eq!(table.len(), 79);
        assert_eq!(table.levels().next(), Some(Level::whole(1)));
        assert_eq!(table.levels().last(), Some(Level::whole(40)));
        assert!((table.multiplier(Level::whole(20)).unwrap() - 0.5974).abs() < f64::EPSILON);
        assert!((table.multiplier(Level::whole(10)).unwrap() - 0.4225).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multipliers_increase() {
        let table = LevelTable::standard();
        let values: Vec<f64> = table
            .levels()
            .map(|l| table.multiplier(l).unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_level() {
        let table = LevelTable::standard();
        let result = table.multiplier(Level::whole(41));
        assert!(matches!(result, Err(DomainError::UnknownLevel(_))));
    }

    #[test]
    fn test_stardust_lookup() {
        let table = LevelTable::standard();
        assert_eq!(
            table.levels_for_stardust(2500),
            Some(
                &[
                    Level::whole(19),
                    Level::from_half_steps(39),
                    Level::whole(20),
                    Level::from_half_steps(41),
                ][..]
            )
        );
        assert_eq!(
            table.levels_for_stardust(200),
            Some(
                &[
                    Level::whole(1),
                    Level::from_half_steps(3),
                    Level::whole(2),
                    Level::from_half_steps(5),
                ][..]
            )
        );
        assert_eq!(
            table.levels_for_stardust(10000),
            Some(&[Level::whole(39), Level::from_half_steps(79), Level::whole(40)][..])
        );
        assert!(table.levels_for_stardust(1234).is_none());
    }

    #[test]
    fn test_level_parsing_and_display() {
        assert_eq!(Level::from_f64(20.5).unwrap(), Level::from_half_steps(41));
        assert_eq!(Level::from_f64(20.0).unwrap().to_string(), "20");
        assert_eq!(Level::from_f64(20.5).unwrap().to_string(), "20.5");
        assert!(Level::from_f64(20.25).is_err());
        assert!(Level::from_f64(0.0).is_err());
        assert!(Level::from_f64(-3.0).is_err());
        assert!(Level::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_custom_table_sorts_stardust_levels() {
        let table = LevelTable::new(
            [(Level::whole(1), 0.1), (Level::whole(2), 0.2)],
            [(100, vec![Level::whole(2), Level::whole(1), Level::whole(2)])],
        );
        assert_eq!(
            table.levels_for_stardust(100),
            Some(&[Level::whole(1), Level::whole(2)][..])
        );
    }
}
