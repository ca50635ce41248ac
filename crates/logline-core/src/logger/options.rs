//! Logger construction options

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::transports::SharedTransport;
use crate::types::LogLevel;

/// Timestamp source for a logger
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The wall clock
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Options for building a [`Logger`](super::Logger)
///
/// Every field is optional:
/// - `name`: shown as `[name]` in each line
/// - `level`: initial threshold, defaults to `Info`
/// - `transports`: defaults to a single `ConsoleTransport`; an explicit empty list stays empty
/// - `clock`: defaults to the system clock
#[derive(Clone, Default)]
pub struct LoggerOptions {
    pub name: Option<String>,
    pub level: Option<LogLevel>,
    pub transports: Option<Vec<SharedTransport>>,
    pub clock: Option<Clock>,
}

impl LoggerOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logger name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial threshold
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Replace the transport list
    pub fn with_transports(mut self, transports: Vec<SharedTransport>) -> Self {
        self.transports = Some(transports);
        self
    }

    /// Append one transport (the default console transport is then not added)
    pub fn with_transport(mut self, transport: SharedTransport) -> Self {
        self.transports.get_or_insert_with(Vec::new).push(transport);
        self
    }

    /// Use a custom timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }
}

impl std::fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("transports", &self.transports.as_ref().map(Vec::len))
            .field("clock", &self.clock.as_ref().map(|_| "custom"))
            .finish()
    }
}
