//! ivcalc CLI entry point.

use clap::Parser;

use ivcalc::cli::{self, AppContext, Cli, Commands};
use ivcalc::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::load_config(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;
    let ctx = AppContext::load(config)?;

    match cli.command {
        Commands::Iv(args) => cli::commands::iv::execute(args, &ctx, cli.json),
        Commands::Raid(args) => cli::commands::raid::execute(args, &ctx, cli.json),
        Commands::Creature(args) => cli::commands::creature::execute(args, &ctx, cli.json),
        Commands::Chat(args) => cli::commands::chat::execute(args, &ctx).await,
    }
}
