//! The leveled logger: threshold, name, and fan-out to transports

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use super::format;
use super::options::{system_clock, Clock, LoggerOptions};
use crate::diagnostics;
use crate::transports::{ConsoleTransport, SharedTransport};
use crate::types::{meta_value, should_log, LogLevel, LogMeta};

/// Front-end logger
///
/// Filters calls against a mutable threshold, formats those that pass, and
/// hands the formatted line to every transport in registration order. A
/// transport that returns an error or panics is reported on stderr and
/// skipped; the remaining transports still run and the call returns normally.
///
/// `Logger` is `Send + Sync`: the threshold and the transport list are
/// guarded by locks, so it can be shared behind an `Arc`.
///
/// # Example
///
/// ```
/// use logline_core::{Logger, LoggerOptions, LogLevel, MemoryTransport};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryTransport::new());
/// let logger = Logger::new(
///     LoggerOptions::new()
///         .with_name("api")
///         .with_level(LogLevel::Debug)
///         .with_transport(memory.clone()),
/// );
///
/// logger.trace("filtered out");
/// logger.info_with("request served", &json!({"status": 200}));
///
/// let lines = memory.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(r#"INFO [api] request served {"status":200}"#));
/// ```
pub struct Logger {
    name: Option<String>,
    level: RwLock<LogLevel>,
    transports: RwLock<Vec<SharedTransport>>,
    clock: Clock,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl Logger {
    /// Create a logger from options
    pub fn new(options: LoggerOptions) -> Self {
        let transports = options
            .transports
            .unwrap_or_else(|| vec![Arc::new(ConsoleTransport::new()) as SharedTransport]);
        Self {
            name: options.name,
            level: RwLock::new(options.level.unwrap_or_default()),
            transports: RwLock::new(transports),
            clock: options.clock.unwrap_or_else(system_clock),
        }
    }

    /// The name shown as `[name]` in each line
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Replace the threshold; applies to every later call
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Append a transport; later calls deliver to it after the existing ones
    pub fn add_transport(&self, transport: SharedTransport) {
        self.transports.write().push(transport);
    }

    /// Number of registered transports
    pub fn transport_count(&self) -> usize {
        self.transports.read().len()
    }

    /// Whether a call at `level` would currently be delivered
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        should_log(self.level(), level)
    }

    /// Log a message without meta
    pub fn log(&self, level: LogLevel, message: impl Display) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(level, &message, None);
    }

    /// Log a message with meta appended as JSON
    ///
    /// If `meta` cannot be serialized, the line is delivered without it.
    pub fn log_with<M: Serialize + ?Sized>(&self, level: LogLevel, message: impl Display, meta: &M) {
        if !self.is_enabled(level) {
            return;
        }
        let meta = meta_value(meta);
        self.dispatch(level, &message, meta.as_ref());
    }

    /// Log with optional meta, for callers that already hold a `LogMeta`
    pub fn log_meta(&self, level: LogLevel, message: impl Display, meta: Option<&LogMeta>) {
        match meta {
            Some(meta) => self.log_with(level, message, meta),
            None => self.log(level, message),
        }
    }

    fn dispatch(&self, level: LogLevel, message: &dyn Display, meta: Option<&Value>) {
        let ts = format::timestamp((self.clock)());
        let formatted = format::format_line(&ts, level, self.name(), message, meta);
        let meta_map = meta.and_then(Value::as_object);

        // Snapshot so transports may log or add transports without deadlocking
        let transports = self.transports.read().clone();

        for transport in &transports {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                transport.log(level, &formatted, meta_map)
            }));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => diagnostics::report("Logger transport error", &err),
                Err(payload) => {
                    diagnostics::report("Logger transport panicked", &panic_message(payload.as_ref()))
                }
            }
        }
    }

    /// Log a trace message
    pub fn trace(&self, message: impl Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Log a debug message
    pub fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message
    pub fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    pub fn warn(&self, message: impl Display) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an error message
    pub fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }

    /// Log a trace message with meta
    pub fn trace_with<M: Serialize + ?Sized>(&self, message: impl Display, meta: &M) {
        self.log_with(LogLevel::Trace, message, meta);
    }

    /// Log a debug message with meta
    pub fn debug_with<M: Serialize + ?Sized>(&self, message: impl Display, meta: &M) {
        self.log_with(LogLevel::Debug, message, meta);
    }

    /// Log an info message with meta
    pub fn info_with<M: Serialize + ?Sized>(&self, message: impl Display, meta: &M) {
        self.log_with(LogLevel::Info, message, meta);
    }

    /// Log a warning message with meta
    pub fn warn_with<M: Serialize + ?Sized>(&self, message: impl Display, meta: &M) {
        self.log_with(LogLevel::Warn, message, meta);
    }

    /// Log an error message with meta
    pub fn error_with<M: Serialize + ?Sized>(&self, message: impl Display, meta: &M) {
        self.log_with(LogLevel::Error, message, meta);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("transports", &self.transport_count())
            .finish()
    }
}

/// Create a logger from options
pub fn create_logger(options: LoggerOptions) -> Logger {
    Logger::new(options)
}
