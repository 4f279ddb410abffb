//! Outbound message delivery port.

use anyhow::Result;
use async_trait::async_trait;

/// Sink for prompts and results addressed to a user in a channel
///
/// Delivery failures are reported to the caller, which logs them and carries
/// on; a failed send never ends a conversation.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Sends `text` to `user_id` in `channel_id`
    async fn send(&self, user_id: &str, channel_id: &str, text: &str) -> Result<()>;
}
