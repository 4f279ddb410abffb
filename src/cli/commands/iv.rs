use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::output::TableFormatter;
use crate::cli::types::IvArgs;
use crate::cli::AppContext;
use crate::domain::models::Observation;
use crate::domain::ports::Catalog;

/// Builds the observation described by the command-line flags
pub fn observation_from_args(args: &IvArgs) -> Observation {
    Observation {
        level: args.level,
        cp: Some(args.cp),
        hp: args.hp,
        stardust: args.stardust,
        best: args.best,
    }
}

/// Handle iv command
pub fn execute(args: IvArgs, ctx: &AppContext, json: bool) -> Result<()> {
    let creature = ctx
        .catalog
        .find_creature(&args.creature)
        .with_context(|| format!("Failed to look up creature {}", args.creature))?;
    let observation = observation_from_args(&args);

    let outcome = ctx
        .engine
        .search(&creature.stats, &observation)
        .context("IV search failed")?;

    if json {
        let body = json!({
            "creature": creature,
            "observation": observation,
            "candidates": outcome.candidates,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Possible IVs for {} with CP {}:", creature.name, args.cp);
    if args.all && !outcome.is_empty() {
        println!("{}", TableFormatter::new().format_candidates(&outcome.candidates));
        println!("\nShowing {} candidates", outcome.candidates.len());
    } else {
        println!("{}", outcome.report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DominantStats, Level};

    #[test]
    fn test_observation_from_args() {
        let args = IvArgs {
            creature: "bulbasaur".to_string(),
            cp: 637,
            hp: Some(65),
            level: Some(Level::whole(20)),
            stardust: None,
            best: Some(DominantStats::of(15, 0, 0)),
            all: false,
        };

        let observation = observation_from_args(&args);
        assert_eq!(observation.cp, Some(637));
        assert_eq!(observation.hp, Some(65));
        assert_eq!(observation.level, Some(Level::whole(20)));
        assert!(observation.stardust.is_none());
        assert_eq!(observation.best, Some(DominantStats::of(15, 0, 0)));
    }
}
