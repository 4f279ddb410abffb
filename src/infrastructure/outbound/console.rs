use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::domain::ports::Outbound;

/// Writes each message to stdout addressed to its user
pub struct ConsoleOutbound {
    stdout: Mutex<Stdout>,
}

impl ConsoleOutbound {
    /// Creates a sink writing to the process stdout
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleOutbound {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a message the way it appears in the channel
pub fn format_line(user_id: &str, channel_id: &str, text: &str) -> String {
    format!("[#{channel_id}] @{user_id} {text}\n")
}

#[async_trait]
impl Outbound for ConsoleOutbound {
    async fn send(&self, user_id: &str, channel_id: &str, text: &str) -> Result<()> {
        let line = format_line(user_id, channel_id, text);
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(line.as_bytes())
            .await
            .context("Failed to write message to stdout")?;
        stdout.flush().await.context("Failed to flush stdout")?;
        Ok(())
    }
}
