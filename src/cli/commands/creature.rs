use anyhow::{Context, Result};

use crate::cli::output::TableFormatter;
use crate::cli::types::CreatureArgs;
use crate::cli::AppContext;
use crate::domain::ports::Catalog;

/// Handle creature command
pub fn execute(args: CreatureArgs, ctx: &AppContext, json: bool) -> Result<()> {
    let creature = ctx
        .catalog
        .find_creature(&args.name)
        .with_context(|| format!("Failed to look up creature {}", args.name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&creature)?);
    } else {
        println!("{}", TableFormatter::new().format_creature(&creature));
    }

    Ok(())
}
