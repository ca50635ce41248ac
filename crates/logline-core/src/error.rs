//! Error types

use thiserror::Error;

/// Errors a transport can return from a delivery attempt
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Create a free-form transport error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while loading or building a logger configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Unknown transport: {0}")]
    UnknownTransport(String),
}

impl From<ParseLevelError> for ConfigError {
    fn from(err: ParseLevelError) -> Self {
        Self::InvalidLevel(err.0)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Returned when a string is not one of the five level names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
pub struct ParseLevelError(pub String);
