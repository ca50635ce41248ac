//! logline Core
//!
//! A small leveled logger with pluggable transports.
//!
//! A `Logger` drops calls below its threshold, formats the rest as
//! `<ISO-8601 timestamp> <LEVEL> [<name>] <message> <meta-json>`, and hands
//! the line to each of its transports in order. Transport failures are
//! reported on stderr and never reach the caller.
//!
//! ```rust
//! use logline_core::{Logger, LoggerOptions, LogLevel, FileTransport, ConsoleTransport};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .with_name("svc")
//!         .with_level(LogLevel::Debug)
//!         .with_transport(Arc::new(ConsoleTransport::new())),
//! );
//! logger.add_transport(Arc::new(FileTransport::new(dir.path().join("logs/svc.log"))));
//!
//! logger.info("started");
//! logger.warn_with("slow request", &json!({"ms": 1200}));
//! ```
//!
//! ## Configuration
//!
//! `LoggerConfig` builds a logger from YAML/JSON and the `LOGLINE_LOG_LEVEL`
//! and `LOGLINE_NAME` environment variables:
//!
//! ```rust
//! use logline_core::config::LoggerConfig;
//!
//! let logger = LoggerConfig::from_yaml_str("name: api\nlevel: warn\n")
//!     .unwrap()
//!     .with_env_overrides()
//!     .build()
//!     .unwrap();
//! logger.warn("configured");
//! ```

pub mod types;
pub mod error;
pub mod diagnostics;
pub mod transports;
pub mod logger;
pub mod config;

// Re-export commonly used types
pub use types::{LogLevel, LogMeta, should_log};

pub use error::{
    TransportError, TransportResult,
    ConfigError, ConfigResult,
    ParseLevelError,
};

pub use transports::{
    Transport, SharedTransport, BoxedTransport,
    ConsoleTransport, FileTransport, MemoryTransport, NoOpTransport, LogRecord,
    register_transport, create_transport, list_transports,
};

pub use logger::{Logger, LoggerOptions, Clock, create_logger, format_line};

pub use config::{LoggerConfig, TransportConfig};
