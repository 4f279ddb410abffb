use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::ports::Outbound;

/// A delivered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Addressee
    pub user_id: String,
    /// Channel the message went to
    pub channel_id: String,
    /// Message text
    pub text: String,
    /// When the message was sent
    pub sent_at: DateTime<Utc>,
}

/// Keeps every message in memory
///
/// A failing recorder still records each attempt but reports an error to
/// the caller, which exercises the delivery-failure path.
#[derive(Debug, Default)]
pub struct RecordingOutbound {
    messages: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl RecordingOutbound {
    /// Creates a recorder that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that rejects every message
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Every message recorded so far
    pub async fn messages(&self) -> Vec<OutboundMessage> {
        self.messages.lock().await.clone()
    }

    /// Texts of every message recorded so far
    pub async fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .await
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    /// Messages addressed to one user
    pub async fn messages_for(&self, user_id: &str) -> Vec<OutboundMessage> {
        self.messages
            .lock()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn send(&self, user_id: &str, channel_id: &str, text: &str) -> Result<()> {
        self.messages.lock().await.push(OutboundMessage {
            user_id: user_id.to_string(),
            channel_id: channel_id.to_string(),
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        if self.fail {
            bail!("delivery to {user_id} in {channel_id} rejected");
        }
        Ok(())
    }
}
