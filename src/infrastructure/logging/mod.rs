//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting
//! - Optional rolling log files via tracing-appender

pub mod config;
pub mod logger;

pub use config::LogFormat;
pub use logger::LoggerImpl;
