//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ivcalc::domain::models::{BaseStats, CreatureStats, InboundEvent, LevelTable, SessionConfig, UserMessage};
use ivcalc::domain::ports::Outbound;
use ivcalc::infrastructure::catalog::JsonCatalog;
use ivcalc::infrastructure::outbound::RecordingOutbound;
use ivcalc::services::{ConversationContext, SearchEngine, SessionManager};

/// Base stats for which level 20 with perfect IVs gives CP 471 and HP 68
pub const TESTMON_STATS: BaseStats = BaseStats::new(100, 100, 100);

/// Path of the sample catalog shipped with the crate
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/creatures.json")
}

/// Catalog with a single synthetic creature
pub fn test_catalog() -> JsonCatalog {
    JsonCatalog::from_creatures(vec![CreatureStats::new(
        "testmon",
        "Testmon",
        1,
        TESTMON_STATS,
        1000,
    )])
}

/// Engine over the standard level table
pub fn test_engine() -> SearchEngine {
    SearchEngine::new(Arc::new(LevelTable::standard()))
}

/// Session manager wired to the test catalog and a recording sink
pub fn test_manager(timeout_secs: u64) -> (SessionManager, Arc<RecordingOutbound>) {
    let outbound = Arc::new(RecordingOutbound::new());
    let config = SessionConfig {
        timeout_secs,
        ..SessionConfig::default()
    };
    (manager_with(outbound.clone(), &config), outbound)
}

/// Session manager wired to the test catalog and the given sink
pub fn manager_with(outbound: Arc<dyn Outbound>, config: &SessionConfig) -> SessionManager {
    let context = ConversationContext {
        catalog: Arc::new(test_catalog()),
        engine: Arc::new(test_engine()),
        outbound,
    };
    SessionManager::new(context, config)
}

/// Inbound message event
pub fn message(user_id: &str, channel_id: &str, text: &str) -> InboundEvent {
    UserMessage::new(user_id, channel_id, text).into()
}

/// Lets spawned conversation tasks run without moving far in time
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
