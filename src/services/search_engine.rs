//! IV constraint search.
//!
//! Enumerates every (level, attack, defense, stamina) combination allowed by
//! an observation and keeps the ones whose derived stats match. Candidates
//! are collected in enumeration order (levels ascending, each IV axis
//! descending from 15) and then stably sorted by percentage, so ties keep
//! that order.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    iv_percent, sort_ranked, BaseStats, DominantStats, IvCandidate, Level, LevelTable,
    Observation, RaidChartRow, MAX_IV, RAID_MIN_IV,
};
use crate::services::report::{render_iv_report, render_raid_chart, render_raid_report};
use crate::services::stat_formulas::{cp_with_multiplier, hp_with_multiplier};

/// Default number of rows in a rendered report
pub const DEFAULT_REPORT_LIMIT: usize = 30;

/// Level of research encounters
pub const RESEARCH_LEVEL: Level = Level::whole(15);
/// Level of raid catches
pub const RAID_LEVEL: Level = Level::whole(20);
/// Level of weather-boosted raid catches
pub const BOOSTED_RAID_LEVEL: Level = Level::whole(25);

/// Every IV from 15 down to `min`
fn ivs_descending(min: u8) -> impl Iterator<Item = u8> + Clone {
    (min..=MAX_IV).rev()
}

/// Ordered candidates plus their rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Every matching candidate, ranked
    pub candidates: Vec<IvCandidate>,
    /// Rendered report (possibly truncated)
    pub report: String,
}

impl SearchOutcome {
    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Raid CP chart rows plus their rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidChart {
    /// Every raid IV triple with its CP at levels 15, 20 and 25
    pub rows: Vec<RaidChartRow>,
    /// Rendered chart
    pub report: String,
}

/// Searches IV combinations against observed stats
#[derive(Debug, Clone)]
pub struct SearchEngine {
    levels: Arc<LevelTable>,
    report_limit: usize,
}

impl SearchEngine {
    /// Creates an engine over a level table
    pub fn new(levels: Arc<LevelTable>) -> Self {
        Self {
            levels,
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }

    /// Sets how many rows the rendered report keeps
    #[must_use]
    pub fn with_report_limit(mut self, report_limit: usize) -> Self {
        self.report_limit = report_limit;
        self
    }

    /// The level table this engine searches
    pub fn level_table(&self) -> &LevelTable {
        &self.levels
    }

    /// Levels to try for an observation
    ///
    /// An explicit level wins, then the stardust cost, then the whole table.
    /// An explicit level outside the table yields no levels at all.
    pub fn candidate_levels(&self, observation: &Observation) -> Vec<Level> {
        if let Some(level) = observation.level {
            return if self.levels.contains(level) {
                vec![level]
            } else {
                Vec::new()
            };
        }
        if let Some(levels) = observation
            .stardust
            .and_then(|cost| self.levels.levels_for_stardust(cost))
        {
            return levels
                .iter()
                .copied()
                .filter(|&l| self.levels.contains(l))
                .collect();
        }
        self.levels.levels().collect()
    }

    /// Finds every IV combination consistent with an observation
    ///
    /// # Errors
    /// Returns `DomainError::MissingCp` when the observation has no CP
    #[instrument(skip(self, base), fields(cp = ?observation.cp, hp = ?observation.hp))]
    pub fn search(&self, base: &BaseStats, observation: &Observation) -> DomainResult<SearchOutcome> {
        let cp = observation.cp.ok_or(DomainError::MissingCp)?;
        let levels = self.candidate_levels(observation);

        let mut candidates = Vec::new();
        for level in &levels {
            let multiplier = self.levels.multiplier(*level)?;
            for attack in ivs_descending(0) {
                for defense in ivs_descending(0) {
                    for stamina in ivs_descending(0) {
                        if cp_with_multiplier(base, attack, defense, stamina, multiplier) != cp {
                            continue;
                        }
                        if observation
                            .hp
                            .is_some_and(|hp| hp_with_multiplier(base, stamina, multiplier) != hp)
                        {
                            continue;
                        }
                        if observation
                            .best
                            .is_some_and(|best| DominantStats::of(attack, defense, stamina) != best)
                        {
                            continue;
                        }
                        candidates.push(IvCandidate::new(*level, attack, defense, stamina));
                    }
                }
            }
        }

        sort_ranked(&mut candidates);
        debug!(
            levels = levels.len(),
            matches = candidates.len(),
            "IV search finished"
        );

        let report = render_iv_report(&candidates, self.report_limit);
        Ok(SearchOutcome { candidates, report })
    }

    /// Finds raid IVs (10–15 on each axis) matching a CP at level 15, 20 or 25
    ///
    /// When CP matches at several levels the candidate is reported at 25,
    /// then 15, then 20. The report is never truncated.
    #[instrument(skip(self, base))]
    pub fn raid_search(&self, base: &BaseStats, cp: u32, hp: Option<u32>) -> DomainResult<SearchOutcome> {
        let precedence = [BOOSTED_RAID_LEVEL, RESEARCH_LEVEL, RAID_LEVEL];
        let multipliers = precedence
            .iter()
            .map(|&level| self.levels.multiplier(level).map(|m| (level, m)))
            .collect::<DomainResult<Vec<_>>>()?;

        let mut candidates = Vec::new();
        for attack in ivs_descending(RAID_MIN_IV) {
            for defense in ivs_descending(RAID_MIN_IV) {
                for stamina in ivs_descending(RAID_MIN_IV) {
                    let matched = multipliers.iter().find(|(_, m)| {
                        cp_with_multiplier(base, attack, defense, stamina, *m) == cp
                            && hp.is_none_or(|hp| hp_with_multiplier(base, stamina, *m) == hp)
                    });
                    if let Some((level, _)) = matched {
                        candidates.push(IvCandidate::new(*level, attack, defense, stamina));
                    }
                }
            }
        }

        sort_ranked(&mut candidates);
        debug!(matches = candidates.len(), "raid IV search finished");

        let report = render_raid_report(&candidates);
        Ok(SearchOutcome { candidates, report })
    }

    /// CP at levels 15, 20 and 25 for every raid IV triple
    pub fn raid_cp_chart(&self, base: &BaseStats) -> DomainResult<RaidChart> {
        let m15 = self.levels.multiplier(RESEARCH_LEVEL)?;
        let m20 = self.levels.multiplier(RAID_LEVEL)?;
        let m25 = self.levels.multiplier(BOOSTED_RAID_LEVEL)?;

        let mut rows = Vec::new();
        for attack in ivs_descending(RAID_MIN_IV) {
            for defense in ivs_descending(RAID_MIN_IV) {
                for stamina in ivs_descending(RAID_MIN_IV) {
                    rows.push(RaidChartRow {
                        attack,
                        defense,
                        stamina,
                        percent: iv_percent(attack, defense, stamina),
                        cp15: cp_with_multiplier(base, attack, defense, stamina, m15),
                        cp20: cp_with_multiplier(base, attack, defense, stamina, m20),
                        cp25: cp_with_multiplier(base, attack, defense, stamina, m25),
                    });
                }
            }
        }

        sort_ranked(&mut rows);
        let report = render_raid_chart(&rows);
        Ok(RaidChart { rows, report })
    }

    /// Minimum (10/10/10) and maximum (15/15/15) CP at the raid levels
    pub fn raid_cp_range(&self, base: &BaseStats) -> DomainResult<String> {
        let lines = [RESEARCH_LEVEL, RAID_LEVEL, BOOSTED_RAID_LEVEL]
            .iter()
            .map(|&level| {
                let m = self.levels.multiplier(level)?;
                let min = cp_with_multiplier(base, RAID_MIN_IV, RAID_MIN_IV, RAID_MIN_IV, m);
                let max = cp_with_multiplier(base, MAX_IV, MAX_IV, MAX_IV, m);
                Ok(format!("Level {level}: {min} - **{max}**"))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}
