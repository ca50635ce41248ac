//! Logger configuration
//!
//! Supports multiple configuration sources:
//! - YAML or JSON documents and files
//! - `LOGLINE_LOG_LEVEL` / `LOGLINE_NAME` environment overrides
//! - Builder methods for code-side configuration

mod model;
mod file;

pub use model::{LoggerConfig, TransportConfig, LEVEL_ENV, NAME_ENV};
