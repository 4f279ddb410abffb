pub mod candidate;
pub mod config;
pub mod creature;
pub mod level_table;
pub mod observation;
pub mod session;

pub use candidate::{iv_percent, sort_ranked, IvCandidate, RaidChartRow, Ranked, MAX_IV, RAID_MIN_IV};
pub use config::{CatalogConfig, Config, LoggingConfig, SearchConfig, SessionConfig};
pub use creature::{BaseStats, CreatureStats};
pub use level_table::{Level, LevelTable};
pub use observation::{DominantStats, Observation};
pub use session::{InboundEvent, SessionState, UserMessage};
