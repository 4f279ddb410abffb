//! CP and HP formulas.
//!
//! Both formulas add the IV to the base stat and scale by the level's
//! multiplier. Results are floored and never drop below 10.

use crate::domain::errors::DomainResult;
use crate::domain::models::{BaseStats, Level, LevelTable};

/// Lowest CP or HP any creature can have
pub const MIN_STAT: u32 = 10;

/// CP for an IV triple at a known multiplier
pub fn cp_with_multiplier(base: &BaseStats, attack: u8, defense: u8, stamina: u8, multiplier: f64) -> u32 {
    let attack = f64::from(base.base_attack + u32::from(attack));
    let defense = f64::from(base.base_defense + u32::from(defense));
    let stamina = f64::from(base.base_stamina + u32::from(stamina));

    let cp = (attack * defense.sqrt() * stamina.sqrt() * multiplier * multiplier / 10.0).floor();
    (cp as u32).max(MIN_STAT)
}

/// HP for a stamina IV at a known multiplier
pub fn hp_with_multiplier(base: &BaseStats, stamina: u8, multiplier: f64) -> u32 {
    let stamina = f64::from(base.base_stamina + u32::from(stamina));
    ((stamina * multiplier).floor() as u32).max(MIN_STAT)
}

/// CP for an IV triple at a level of the table
pub fn compute_cp(
    table: &LevelTable,
    base: &BaseStats,
    attack: u8,
    defense: u8,
    stamina: u8,
    level: Level,
) -> DomainResult<u32> {
    let multiplier = table.multiplier(level)?;
    Ok(cp_with_multiplier(base, attack, defense, stamina, multiplier))
}

/// HP for a stamina IV at a level of the table
pub fn compute_hp(table: &LevelTable, base: &BaseStats, stamina: u8, level: Level) -> DomainResult<u32> {
    let multiplier = table.multiplier(level)?;
    Ok(hp_with_multiplier(base, stamina, multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cp_matches_formula() {
        let table = LevelTable::standard();
        let base = BaseStats::new(100, 100, 100);
        let cp = compute_cp(&table, &base, 15, 15, 15, Level::whole(20)).unwrap();

        // 115 * sqrt(115) * sqrt(115) * 0.5974^2 / 10
        let expected = (115.0_f64 * 115.0 * 0.5974 * 0.5974 / 10.0).floor() as u32;
        assert_eq!(cp, expected);
        assert_eq!(cp, 471);
    }

    #[test]
    fn test_hp_matches_formula() {
        let table = LevelTable::standard();
        let base = BaseStats::new(100, 100, 100);
        assert_eq!(compute_hp(&table, &base, 15, Level::whole(20)).unwrap(), 68);
        assert_eq!(compute_hp(&table, &base, 0, Level::whole(40)).unwrap(), 79);
    }

    #[test]
    fn test_stats_never_below_floor() {
        let table = LevelTable::standard();
        let base = BaseStats::new(1, 1, 1);
        assert_eq!(compute_cp(&table, &base, 0, 0, 0, Level::whole(1)).unwrap(), MIN_STAT);
        assert_eq!(compute_hp(&table, &base, 0, Level::whole(1)).unwrap(), MIN_STAT);
    }

    #[test]
    fn test_cp_increases_with_level() {
        let table = LevelTable::standard();
        let base = BaseStats::new(186, 168, 260);
        let low = compute_cp(&table, &base, 10, 10, 10, Level::whole(15)).unwrap();
        let high = compute_cp(&table, &base, 10, 10, 10, Level::whole(25)).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let table = LevelTable::standard();
        let base = BaseStats::new(100, 100, 100);
        assert!(compute_cp(&table, &base, 0, 0, 0, Level::whole(50)).is_err());
        assert!(compute_hp(&table, &base, 0, Level::whole(50)).is_err());
    }
}
