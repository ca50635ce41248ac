//! No-op transport implementation

use super::traits::Transport;
use crate::error::TransportResult;
use crate::types::{LogLevel, LogMeta};

/// A transport that does nothing
///
/// Useful for silencing a logger without touching its threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTransport;

impl NoOpTransport {
    /// Create a new no-op transport
    pub fn new() -> Self {
        Self
    }
}

impl Transport for NoOpTransport {
    fn log(&self, _level: LogLevel, _message: &str, _meta: Option<&LogMeta>) -> TransportResult<()> {
        Ok(())
    }
}
