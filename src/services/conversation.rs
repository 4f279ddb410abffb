//! Conversation state machine for one user's IV calculation.
//!
//! A conversation asks for the creature, the CP and the level in that order,
//! re-prompting in place on invalid answers, then runs the search and
//! reports the result. The current state is published on a watch channel so
//! the session manager can see when a conversation is done.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::models::{CreatureStats, Level, Observation, SessionState};
use crate::domain::ports::{Catalog, Outbound};
use crate::domain::errors::DomainResult;
use crate::services::search_engine::{SearchEngine, SearchOutcome};

/// Prompt for the creature name
pub const PROMPT_CREATURE: &str = "Enter creature name.";
/// Prompt for the CP
pub const PROMPT_CP: &str = "Enter CP.";
/// Prompt for the level
pub const PROMPT_LEVEL: &str = "Enter level.";
/// Sent when the creature is not in the catalog
pub const UNRECOGNIZED_CREATURE: &str = "Unrecognized creature. Try again.";
/// Sent when a conversation expires before finishing
pub const TIMEOUT_NOTICE: &str = "Unable to process your IV calculation, please try again.";

/// Sent when the CP answer is not an integer
pub fn invalid_cp_message(input: &str) -> String {
    format!("CP must be an integer, got {input}. Try again.")
}

/// Sent when the level answer is not a number
pub fn invalid_level_message(input: &str) -> String {
    format!("Level must be a number, got {input}. Try again.")
}

/// Sent when the level answer is off the half-level grid
pub fn off_grid_level_message(input: &str) -> String {
    format!("Level must be a multiple of 0.5, got {input}. Try again.")
}

/// Sent when the search itself fails
pub const SEARCH_FAILED: &str = "Unable to compute IVs for those stats, please try again.";

/// Message reporting a finished search
fn result_message(
    creature: &CreatureStats,
    observation: &Observation,
    outcome: DomainResult<SearchOutcome>,
) -> String {
    match outcome {
        Ok(outcome) if outcome.is_empty() => outcome.report,
        Ok(outcome) => format!(
            "Possible IVs for **{}** with CP **{}** at level **{}**:\n{}",
            creature.name,
            observation.cp.unwrap_or_default(),
            observation.level.map(|l| l.to_string()).unwrap_or_default(),
            outcome.report
        ),
        Err(err) => {
            warn!(creature = %creature.id, error = %err, "IV search failed");
            SEARCH_FAILED.to_string()
        }
    }
}

/// Shared collaborators a conversation needs
#[derive(Clone)]
pub struct ConversationContext {
    /// Creature lookup
    pub catalog: Arc<dyn Catalog>,
    /// IV search
    pub engine: Arc<SearchEngine>,
    /// Message delivery
    pub outbound: Arc<dyn Outbound>,
}

/// One user's conversation
pub struct Conversation {
    id: Uuid,
    user_id: String,
    channel_id: String,
    created_at: DateTime<Utc>,
    state: SessionState,
    observation: Observation,
    creature: Option<CreatureStats>,
    context: ConversationContext,
    state_tx: watch::Sender<SessionState>,
}

impl Conversation {
    /// Creates a conversation in the `Start` state
    ///
    /// Returns the conversation and a receiver that follows its state.
    pub fn new(
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        context: ConversationContext,
    ) -> (Self, watch::Receiver<SessionState>) {
        let (state_tx, state_rx) = watch::channel(SessionState::Start);
        let conversation = Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            created_at: Utc::now(),
            state: SessionState::Start,
            observation: Observation::default(),
            creature: None,
            context,
            state_tx,
        };
        (conversation, state_rx)
    }

    /// Unique id of this conversation
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// User the conversation belongs to
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Channel the conversation is pinned to
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// When the conversation was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current state
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Answers collected so far
    pub const fn observation(&self) -> &Observation {
        &self.observation
    }

    /// The creature, once resolved
    pub const fn creature(&self) -> Option<&CreatureStats> {
        self.creature.as_ref()
    }

    /// Sends the first prompt
    pub async fn start(&mut self) {
        if self.state != SessionState::Start {
            return;
        }
        self.say(PROMPT_CREATURE).await;
        self.advance(SessionState::AwaitingCreatureName);
    }

    /// Feeds one answer into the state machine
    ///
    /// Invalid answers re-prompt and leave the state and the collected
    /// answers untouched. Input after `Done` is ignored.
    #[instrument(skip(self, input), fields(conversation_id = %self.id, state = %self.state))]
    pub async fn handle_input(&mut self, input: &str) {
        let answer = input.trim();
        match self.state {
            SessionState::AwaitingCreatureName => match self.context.catalog.find_creature(answer) {
                Ok(creature) => {
                    debug!(creature = %creature.id, "creature resolved");
                    self.creature = Some(creature);
                    self.advance(SessionState::AwaitingCp);
                    self.say(PROMPT_CP).await;
                }
                Err(err) => {
                    debug!(error = %err, "creature lookup failed");
                    self.say(UNRECOGNIZED_CREATURE).await;
                }
            },
            SessionState::AwaitingCp => match answer.parse::<u32>() {
                Ok(cp) => {
                    self.observation.cp = Some(cp);
                    self.advance(SessionState::AwaitingLevel);
                    self.say(PROMPT_LEVEL).await;
                }
                Err(_) => self.say(&invalid_cp_message(answer)).await,
            },
            SessionState::AwaitingLevel => match answer.parse::<f64>() {
                Ok(value) => match Level::from_f64(value) {
                    Ok(level) => {
                        self.observation.level = Some(level);
                        self.advance(SessionState::Computing);
                        self.compute().await;
                    }
                    Err(_) if value.is_finite() && value > 0.0 => {
                        self.say(&off_grid_level_message(answer)).await;
                    }
                    Err(_) => self.say(&invalid_level_message(answer)).await,
                },
                Err(_) => self.say(&invalid_level_message(answer)).await,
            },
            SessionState::Start | SessionState::Computing | SessionState::Done => {
                debug!("input ignored");
            }
        }
    }

    /// Tells the user the conversation expired
    pub async fn notify_timeout(&self) {
        self.say(TIMEOUT_NOTICE).await;
    }

    /// Runs the search and reports the result
    async fn compute(&mut self) {
        let Some(creature) = self.creature.as_ref() else {
            return;
        };

        let outcome = self.context.engine.search(&creature.stats, &self.observation);
        if let Ok(ref found) = outcome {
            info!(
                creature = %creature.id,
                matches = found.candidates.len(),
                "IV calculation completed"
            );
        }
        let message = result_message(creature, &self.observation, outcome);

        self.say(&message).await;
        self.advance(SessionState::Done);
    }

    /// Moves forward to `next`; the state never goes back
    fn advance(&mut self, next: SessionState) {
        if next <= self.state {
            return;
        }
        debug!(from = %self.state, to = %next, "conversation advanced");
        self.state = next;
        self.state_tx.send_replace(next);
    }

    /// Delivers a message, logging delivery failures
    async fn say(&self, text: &str) {
        if let Err(err) = self
            .context
            .outbound
            .send(&self.user_id, &self.channel_id, text)
            .await
        {
            warn!(
                user_id = %self.user_id,
                channel_id = %self.channel_id,
                error = %err,
                "failed to deliver message"
            );
        }
    }
}
