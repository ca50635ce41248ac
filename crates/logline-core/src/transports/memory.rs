//! In-memory transport

use parking_lot::Mutex;

use super::traits::Transport;
use crate::error::TransportResult;
use crate::types::{LogLevel, LogMeta};

/// One captured delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Transport that keeps every delivered line in memory
///
/// Handy in tests, or to embed recent log output in a status view.
///
/// # Thread Safety
///
/// Records sit behind a `Mutex`; the transport is safe to share across threads.
///
/// # Example
///
/// ```
/// use logline_core::{Logger, LoggerOptions, MemoryTransport};
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryTransport::new());
/// let logger = Logger::new(LoggerOptions::new().with_transport(memory.clone()));
///
/// logger.info("ready");
/// assert_eq!(memory.len(), 1);
/// assert!(memory.lines()[0].ends_with("INFO ready"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryTransport {
    /// Create an empty memory transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Snapshot of the delivered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop all captured records
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn log(&self, level: LogLevel, message: &str, _meta: Option<&LogMeta>) -> TransportResult<()> {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
        Ok(())
    }
}
