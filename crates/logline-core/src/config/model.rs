//! Logger configuration model

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::logger::{Logger, LoggerOptions};
use crate::transports::{
    create_transport, ConsoleTransport, FileTransport, NoOpTransport, SharedTransport,
};
use crate::types::LogLevel;

/// Environment variable that overrides the configured level
pub const LEVEL_ENV: &str = "LOGLINE_LOG_LEVEL";

/// Environment variable that overrides the configured name
pub const NAME_ENV: &str = "LOGLINE_NAME";

/// One transport entry in a config file, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// stdout/stderr by severity
    Console,
    /// Discard everything
    Noop,
    /// Append to a file; relative paths resolve against the working directory
    File { path: PathBuf },
    /// A transport registered with `register_transport`
    Named { name: String },
}

impl TransportConfig {
    /// Instantiate the transport this entry describes
    pub fn build(&self) -> ConfigResult<SharedTransport> {
        match self {
            TransportConfig::Console => Ok(Arc::new(ConsoleTransport::new())),
            TransportConfig::Noop => Ok(Arc::new(NoOpTransport::new())),
            TransportConfig::File { path } => Ok(Arc::new(FileTransport::new(path))),
            TransportConfig::Named { name } => {
                create_transport(name).ok_or_else(|| ConfigError::UnknownTransport(name.clone()))
            }
        }
    }
}

/// Serializable logger configuration
///
/// ```yaml
/// name: api
/// level: debug
/// transports:
///   - type: console
///   - type: file
///     path: logs/api.log
/// ```
///
/// Omitting `transports` yields the default single console transport; an
/// explicit empty list builds a logger with no transports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<TransportConfig>>,
}

impl LoggerConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logger name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the level from its textual name
    pub fn with_level_name(mut self, level: &str) -> ConfigResult<Self> {
        self.level = Some(level.parse()?);
        Ok(self)
    }

    /// Append a transport entry
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transports.get_or_insert_with(Vec::new).push(transport);
        self
    }

    /// Apply `LOGLINE_LOG_LEVEL` and `LOGLINE_NAME` from the process environment
    ///
    /// A level variable that does not name a level is ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup(LEVEL_ENV).and_then(|v| v.parse::<LogLevel>().ok()) {
            self.level = Some(level);
        }
        if let Some(name) = lookup(NAME_ENV).filter(|v| !v.is_empty()) {
            self.name = Some(name);
        }
        self
    }

    /// Convert into logger options, instantiating every transport
    pub fn to_options(&self) -> ConfigResult<LoggerOptions> {
        let mut options = LoggerOptions::new();
        if let Some(name) = &self.name {
            options = options.with_name(name.clone());
        }
        if let Some(level) = self.level {
            options = options.with_level(level);
        }
        if let Some(transports) = &self.transports {
            let built = transports
                .iter()
                .map(TransportConfig::build)
                .collect::<ConfigResult<Vec<_>>>()?;
            options = options.with_transports(built);
        }
        Ok(options)
    }

    /// Build a logger from this configuration
    pub fn build(&self) -> ConfigResult<Logger> {
        Ok(Logger::new(self.to_options()?))
    }
}
