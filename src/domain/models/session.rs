//! Domain models for IV conversations.
//!
//! A conversation walks a fixed sequence of prompts; inbound chat events are
//! narrowed to plain user messages before they reach the session manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation lifecycle state
///
/// States are ordered; a conversation only moves forward through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Created, first prompt not yet sent
    Start,
    /// Waiting for the creature name
    AwaitingCreatureName,
    /// Waiting for the observed CP
    AwaitingCp,
    /// Waiting for the level
    AwaitingLevel,
    /// Running the search
    Computing,
    /// Result delivered, no further input accepted
    Done,
}

impl SessionState {
    /// Whether the conversation has finished
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::AwaitingCreatureName => write!(f, "awaiting_creature_name"),
            Self::AwaitingCp => write!(f, "awaiting_cp"),
            Self::AwaitingLevel => write!(f, "awaiting_level"),
            Self::Computing => write!(f, "computing"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A chat message written by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    /// Author identity
    pub user_id: String,
    /// Channel the message was posted in
    pub channel_id: String,
    /// Raw message text
    pub text: String,
    /// When the message was received
    pub timestamp: DateTime<Utc>,
}

impl UserMessage {
    /// Creates a message stamped with the current time
    pub fn new(user_id: impl Into<String>, channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Inbound events accepted by the session manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// A user posted a message
    Message(UserMessage),
}

impl From<UserMessage> for InboundEvent {
    fn from(message: UserMessage) -> Self {
        Self::Message(message)
    }
}
