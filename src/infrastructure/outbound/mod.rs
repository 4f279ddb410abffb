//! Outbound message sinks
//!
//! - `ConsoleOutbound`: writes addressed lines to stdout for the interactive CLI
//! - `RecordingOutbound`: keeps every delivery in memory for inspection

pub mod console;
pub mod recording;

pub use console::ConsoleOutbound;
pub use recording::{OutboundMessage, RecordingOutbound};
