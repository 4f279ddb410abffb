//! Table output formatting for CLI commands
//!
//! Renders full candidate lists and creature details with comfy-table.
//! The conversation reports use the fixed-width layouts in
//! `services::report` instead.

use crate::domain::models::{CreatureStats, IvCandidate};
use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Create a new table formatter with colors switched on or off
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format every candidate as a table
    pub fn format_candidates(&self, candidates: &[IvCandidate]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Level").add_attribute(Attribute::Bold),
            Cell::new("Attack").add_attribute(Attribute::Bold),
            Cell::new("Defense").add_attribute(Attribute::Bold),
            Cell::new("Stamina").add_attribute(Attribute::Bold),
            Cell::new("IV %").add_attribute(Attribute::Bold),
        ]);

        for candidate in candidates {
            let percent = Cell::new(candidate.percent).set_alignment(CellAlignment::Right);
            let percent = if self.use_colors {
                percent.fg(percent_color(candidate.percent))
            } else {
                percent
            };

            table.add_row(vec![
                Cell::new(candidate.level.to_string()),
                Cell::new(candidate.attack).set_alignment(CellAlignment::Right),
                Cell::new(candidate.defense).set_alignment(CellAlignment::Right),
                Cell::new(candidate.stamina).set_alignment(CellAlignment::Right),
                percent,
            ]);
        }

        table.to_string()
    }

    /// Format a creature's catalog entry
    pub fn format_creature(&self, creature: &CreatureStats) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Name"), Cell::new(&creature.name)]);
        table.add_row(vec![Cell::new("Id"), Cell::new(&creature.id)]);
        table.add_row(vec![Cell::new("Dex"), Cell::new(creature.dex)]);
        table.add_row(vec![Cell::new("Base attack"), Cell::new(creature.stats.base_attack)]);
        table.add_row(vec![Cell::new("Base defense"), Cell::new(creature.stats.base_defense)]);
        table.add_row(vec![Cell::new("Base stamina"), Cell::new(creature.stats.base_stamina)]);
        table.add_row(vec![Cell::new("Max CP"), Cell::new(creature.max_cp)]);

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map IV percentage to color
const fn percent_color(percent: u8) -> Color {
    match percent {
        100 => Color::Magenta,
        82..=99 => Color::Green,
        67..=81 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BaseStats, Level};

    #[test]
    fn test_format_candidates() {
        let formatter = TableFormatter::with_colors(false);
        let output = formatter.format_candidates(&[
            IvCandidate::new(Level::whole(20), 15, 15, 15),
            IvCandidate::new(Level::from_half_steps(41), 1, 2, 3),
        ]);

        assert!(output.contains("Level"));
        assert!(output.contains("IV %"));
        assert!(output.contains("100"));
        assert!(output.contains("20.5"));
    }

    #[test]
    fn test_format_creature() {
        let formatter = TableFormatter::with_colors(false);
        let output = formatter.format_creature(&CreatureStats::new(
            "bulbasaur",
            "Bulbasaur",
            1,
            BaseStats::new(118, 111, 128),
            1115,
        ));

        assert!(output.contains("Bulbasaur"));
        assert!(output.contains("1115"));
        assert!(output.contains("128"));
    }

    #[test]
    fn test_percent_color() {
        assert_eq!(percent_color(100), Color::Magenta);
        assert_eq!(percent_color(91), Color::Green);
        assert_eq!(percent_color(67), Color::Yellow);
        assert_eq!(percent_color(20), Color::Red);
    }
}
