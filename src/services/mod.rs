pub mod conversation;
pub mod report;
pub mod search_engine;
pub mod session_manager;
pub mod stat_formulas;

pub use conversation::{Conversation, ConversationContext};
pub use search_engine::{RaidChart, SearchEngine, SearchOutcome};
pub use session_manager::{SessionInfo, SessionManager};
