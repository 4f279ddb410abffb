use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::types::RaidArgs;
use crate::cli::AppContext;
use crate::domain::ports::Catalog;

/// Handle raid command
///
/// With a CP, lists the raid IVs that produce it. Without one, prints the
/// CP range at the raid levels followed by the full chart.
pub fn execute(args: RaidArgs, ctx: &AppContext, json: bool) -> Result<()> {
    let creature = ctx
        .catalog
        .find_creature(&args.creature)
        .with_context(|| format!("Failed to look up creature {}", args.creature))?;

    if let Some(cp) = args.cp {
        let outcome = ctx
            .engine
            .raid_search(&creature.stats, cp, args.hp)
            .context("Raid IV search failed")?;

        if json {
            let body = json!({ "creature": creature, "cp": cp, "hp": args.hp, "candidates": outcome.candidates });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!("Raid IVs for {} with CP {cp}:", creature.name);
            println!("{}", outcome.report);
        }
        return Ok(());
    }

    let range = ctx
        .engine
        .raid_cp_range(&creature.stats)
        .context("Failed to compute raid CP range")?;
    let chart = ctx
        .engine
        .raid_cp_chart(&creature.stats)
        .context("Failed to compute raid CP chart")?;

    if json {
        let body = json!({ "creature": creature, "chart": chart.rows });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("Raid CP for {}:", creature.name);
        println!("{range}\n");
        println!("{}", chart.report);
    }

    Ok(())
}
