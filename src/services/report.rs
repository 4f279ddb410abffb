//! Fixed-width text reports for search and raid results.
//!
//! The layouts are part of the user-visible output and are golden-tested.

use crate::domain::models::{IvCandidate, RaidChartRow};

/// Shown instead of a table when nothing matched
pub const NO_MATCH: &str = "No IV combinations match those stats.";

const IV_HEADER: &str = "|Lvl | At | Df | St | %  |";
const IV_SEPARATOR: &str = "|----|----|----|----|----|";

const RAID_HEADER: &str = "| At | Df | St | %  |";
const RAID_SEPARATOR: &str = "|----|----|----|----|";

const CHART_HEADER: &str = "[ % ]At|Df|St[ 15 | 20 | 25 ]";
const CHART_SEPARATOR: &str = "-----------------------------";

/// Renders at most `limit` candidates as a level/IV table
pub fn render_iv_report(candidates: &[IvCandidate], limit: usize) -> String {
    if candidates.is_empty() {
        return NO_MATCH.to_string();
    }

    let mut lines = vec![IV_HEADER.to_string(), IV_SEPARATOR.to_string()];
    lines.extend(candidates.iter().take(limit).map(|c| {
        format!(
            "|{:<4}|{:>3} |{:>3} |{:>3} |{:>3} |",
            c.level.to_string(),
            c.attack,
            c.defense,
            c.stamina,
            c.percent
        )
    }));
    lines.join("\n")
}

/// Renders raid candidates without a level column and without truncation
pub fn render_raid_report(candidates: &[IvCandidate]) -> String {
    if candidates.is_empty() {
        return NO_MATCH.to_string();
    }

    let mut lines = vec![RAID_HEADER.to_string(), RAID_SEPARATOR.to_string()];
    lines.extend(candidates.iter().map(|c| {
        format!(
            "|{:>3} |{:>3} |{:>3} |{:>3} |",
            c.attack, c.defense, c.stamina, c.percent
        )
    }));
    lines.join("\n")
}

/// Renders the raid CP chart
pub fn render_raid_chart(rows: &[RaidChartRow]) -> String {
    let mut lines = vec![CHART_HEADER.to_string(), CHART_SEPARATOR.to_string()];
    lines.extend(rows.iter().map(|r| {
        format!(
            "[{:>3}]{:>2}|{:>2}|{:>2}[ {} | {} | {} ]",
            r.percent, r.attack, r.defense, r.stamina, r.cp15, r.cp20, r.cp25
        )
    }));
    lines.join("\n")
}
