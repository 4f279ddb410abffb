//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::{DominantStats, Level};

#[derive(Parser)]
#[command(name = "ivcalc")]
#[command(about = "IV calculator for catchable creatures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .ivcalc/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the IV combinations matching observed stats
    Iv(IvArgs),

    /// Raid IV lookup, or the raid CP chart when no CP is given
    Raid(RaidArgs),

    /// Run the interactive conversation over stdin and stdout
    Chat(ChatArgs),

    /// Show a creature's catalog entry
    Creature(CreatureArgs),
}

#[derive(Args)]
pub struct IvArgs {
    /// Creature name, id or dex number
    pub creature: String,

    /// Observed CP
    #[arg(long)]
    pub cp: u32,

    /// Observed HP
    #[arg(long)]
    pub hp: Option<u32>,

    /// Exact level, in steps of 0.5
    #[arg(short, long, value_parser = parse_level)]
    pub level: Option<Level>,

    /// Stardust cost of the next power-up
    #[arg(short, long)]
    pub stardust: Option<u32>,

    /// Dominant stats from the appraisal, e.g. "ad"
    #[arg(short, long)]
    pub best: Option<DominantStats>,

    /// Print every candidate instead of the capped report
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args)]
pub struct RaidArgs {
    /// Creature name, id or dex number
    pub creature: String,

    /// Observed CP after the catch
    #[arg(long)]
    pub cp: Option<u32>,

    /// Observed HP after the catch
    #[arg(long, requires = "cp")]
    pub hp: Option<u32>,
}

#[derive(Args)]
pub struct ChatArgs {
    /// User the typed lines are attributed to
    #[arg(short, long, default_value = "trainer")]
    pub user: String,

    /// Channel the typed lines are posted in
    #[arg(long, default_value = "console")]
    pub channel: String,
}

#[derive(Args)]
pub struct CreatureArgs {
    /// Creature name, id or dex number
    pub name: String,
}

fn parse_level(value: &str) -> Result<Level, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("level must be a number, got {value}"))?;
    Level::from_f64(number).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_iv_command() {
        let cli = Cli::try_parse_from([
            "ivcalc", "iv", "bulbasaur", "--cp", "500", "--level", "20.5", "--best", "ad", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Iv(args) => {
                assert_eq!(args.creature, "bulbasaur");
                assert_eq!(args.cp, 500);
                assert_eq!(args.level, Some(Level::from_half_steps(41)));
                assert_eq!(args.best, Some(DominantStats::of(1, 1, 0)));
                assert!(!args.all);
            }
            _ => panic!("expected iv command"),
        }
    }

    #[test]
    fn test_off_grid_level_is_rejected() {
        assert!(Cli::try_parse_from(["ivcalc", "iv", "bulbasaur", "--cp", "500", "--level", "20.3"]).is_err());
        assert!(Cli::try_parse_from(["ivcalc", "iv", "bulbasaur", "--cp", "500", "--level", "x"]).is_err());
    }

    #[test]
    fn test_raid_hp_requires_cp() {
        assert!(Cli::try_parse_from(["ivcalc", "raid", "mewtwo", "--hp", "150"]).is_err());
        assert!(Cli::try_parse_from(["ivcalc", "raid", "mewtwo"]).is_ok());
    }

    #[test]
    fn test_chat_defaults() {
        let cli = Cli::try_parse_from(["ivcalc", "chat"]).unwrap();
        match cli.command {
            Commands::Chat(args) => {
                assert_eq!(args.user, "trainer");
                assert_eq!(args.channel, "console");
            }
            _ => panic!("expected chat command"),
        }
    }
}
