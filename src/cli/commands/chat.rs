use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::types::ChatArgs;
use crate::cli::AppContext;
use crate::domain::models::{InboundEvent, UserMessage};
use crate::domain::ports::{Catalog, Outbound};
use crate::infrastructure::outbound::ConsoleOutbound;
use crate::services::{ConversationContext, SessionManager};

/// How often the drain loop checks whether the last conversation settled
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Handle chat command
///
/// Every stdin line becomes a message from `args.user` in `args.channel`.
/// Replies are written to stdout. On end of input the command waits for the
/// open conversation to finish or expire.
pub async fn execute(args: ChatArgs, ctx: &AppContext) -> Result<()> {
    let catalog: Arc<dyn Catalog> = ctx.catalog.clone();
    let outbound: Arc<dyn Outbound> = Arc::new(ConsoleOutbound::new());
    let manager = SessionManager::new(
        ConversationContext {
            catalog,
            engine: ctx.engine.clone(),
            outbound,
        },
        &ctx.config.session,
    );

    let (events_tx, events_rx) = mpsc::channel(ctx.config.session.queue_capacity);
    let runner = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.run(events_rx).await })
    };

    info!(user = %args.user, channel = %args.channel, "chat started, type a message to begin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let event = InboundEvent::from(UserMessage::new(&args.user, &args.channel, line));
                if events_tx.send(event).await.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                return Ok(());
            }
        }
    }

    drop(events_tx);
    runner.await.context("Session manager task failed")?;

    while manager
        .session(&args.user)
        .await
        .is_some_and(|session| !session.state.is_terminal())
    {
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }

    Ok(())
}
