//! Session manager routing chat messages to per-user conversations.
//!
//! Each user has at most one registered conversation. A conversation runs in
//! its own task that waits on its private input queue or its expiry,
//! whichever comes first. The dispatcher is the only writer that inserts
//! into the registry; a conversation task removes its own entry when it
//! expires.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch, RwLock};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::models::{InboundEvent, SessionConfig, SessionState, UserMessage};
use crate::services::conversation::{Conversation, ConversationContext};

/// Registry entry for a live conversation
#[derive(Debug, Clone)]
struct SessionHandle {
    id: Uuid,
    channel_id: String,
    created_at: DateTime<Utc>,
    state: watch::Receiver<SessionState>,
    input: mpsc::Sender<String>,
}

/// Snapshot of a registered conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Conversation id
    pub id: Uuid,
    /// Channel the conversation is pinned to
    pub channel_id: String,
    /// Current state
    pub state: SessionState,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
}

type Registry = Arc<RwLock<HashMap<String, SessionHandle>>>;

/// Owns the user → conversation registry
#[derive(Clone)]
pub struct SessionManager {
    registry: Registry,
    context: ConversationContext,
    timeout: Duration,
    queue_capacity: usize,
}

impl SessionManager {
    /// Creates a manager with the given collaborators and session settings
    pub fn new(context: ConversationContext, config: &SessionConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(HashMap::new())),
            context,
            timeout: Duration::from_secs(config.timeout_secs),
            queue_capacity: config.queue_capacity.max(1),
        }
    }

    /// Consumes inbound events one at a time until the stream closes
    pub async fn run(&self, mut events: mpsc::Receiver<InboundEvent>) {
        info!("session manager started");
        while let Some(event) = events.recv().await {
            self.dispatch(event).await;
        }
        info!("inbound stream closed, session manager stopped");
    }

    /// Routes one inbound event
    ///
    /// Starts a conversation when the user has none, replaces a finished
    /// one, and forwards the text to a running one when it arrives on the
    /// conversation's channel. Messages from other channels are dropped, as
    /// are messages for a conversation whose input queue is full, so one
    /// slow conversation never holds up the others.
    #[instrument(skip(self, event))]
    pub async fn dispatch(&self, event: InboundEvent) {
        let InboundEvent::Message(message) = event;

        let existing = {
            let registry = self.registry.read().await;
            registry.get(&message.user_id).cloned()
        };

        match existing {
            None => self.start(message).await,
            Some(handle) if handle.state.borrow().is_terminal() => {
                debug!(user_id = %message.user_id, session_id = %handle.id, "replacing finished conversation");
                deregister(&self.registry, &message.user_id, handle.id).await;
                self.start(message).await;
            }
            Some(handle) if handle.channel_id == message.channel_id => {
                debug!(user_id = %message.user_id, session_id = %handle.id, "forwarding input");
                match handle.input.try_send(message.text) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        warn!(
                            user_id = %message.user_id,
                            session_id = %handle.id,
                            "conversation input queue full, dropping message"
                        );
                    }
                    Err(TrySendError::Closed(_)) => {
                        debug!(
                            user_id = %message.user_id,
                            session_id = %handle.id,
                            "conversation ended before input was delivered"
                        );
                    }
                }
            }
            Some(handle) => {
                debug!(
                    user_id = %message.user_id,
                    channel_id = %message.channel_id,
                    pinned_channel_id = %handle.channel_id,
                    "ignoring message from another channel"
                );
            }
        }
    }

    /// Whether the user has a registered conversation
    pub async fn is_active(&self, user_id: &str) -> bool {
        self.registry.read().await.contains_key(user_id)
    }

    /// Snapshot of the user's registered conversation
    pub async fn session(&self, user_id: &str) -> Option<SessionInfo> {
        self.registry.read().await.get(user_id).map(|handle| SessionInfo {
            id: handle.id,
            channel_id: handle.channel_id.clone(),
            state: *handle.state.borrow(),
            created_at: handle.created_at,
        })
    }

    /// Number of registered conversations
    pub async fn active_count(&self) -> usize {
        self.registry.read().await.len()
    }

    /// Registers a new conversation and spawns its task
    async fn start(&self, message: UserMessage) {
        let (conversation, state) = Conversation::new(
            message.user_id.clone(),
            message.channel_id.clone(),
            self.context.clone(),
        );
        let (input_tx, input_rx) = mpsc::channel(self.queue_capacity);
        let deadline = Instant::now() + self.timeout;

        let handle = SessionHandle {
            id: conversation.id(),
            channel_id: conversation.channel_id().to_string(),
            created_at: conversation.created_at(),
            state,
            input: input_tx,
        };
        let session_id = handle.id;

        {
            let mut registry = self.registry.write().await;
            registry.insert(message.user_id.clone(), handle);
        }

        info!(
            user_id = %message.user_id,
            channel_id = %message.channel_id,
            session_id = %session_id,
            "conversation started"
        );

        tokio::spawn(run_conversation(
            conversation,
            input_rx,
            deadline,
            Arc::clone(&self.registry),
        ));
    }
}

/// Drives one conversation until it expires or is replaced
async fn run_conversation(
    mut conversation: Conversation,
    mut input: mpsc::Receiver<String>,
    deadline: Instant,
    registry: Registry,
) {
    conversation.start().await;

    let expiry = sleep_until(deadline);
    tokio::pin!(expiry);

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(text) => conversation.handle_input(&text).await,
                None => {
                    debug!(session_id = %conversation.id(), "conversation replaced");
                    return;
                }
            },
            () = &mut expiry => {
                if conversation.state().is_terminal() {
                    debug!(session_id = %conversation.id(), "finished conversation expired");
                } else {
                    info!(
                        user_id = %conversation.user_id(),
                        session_id = %conversation.id(),
                        state = %conversation.state(),
                        "conversation timed out"
                    );
                    conversation.notify_timeout().await;
                }
                deregister(&registry, conversation.user_id(), conversation.id()).await;
                return;
            }
        }
    }
}

/// Removes the user's entry if it still belongs to `session_id`
async fn deregister(registry: &Registry, user_id: &str, session_id: Uuid) {
    let mut registry = registry.write().await;
    if registry.get(user_id).is_some_and(|handle| handle.id == session_id) {
        registry.remove(user_id);
        debug!(user_id = %user_id, session_id = %session_id, "conversation deregistered");
    }
}
