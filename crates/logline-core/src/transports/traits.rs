//! Transport trait definition

use std::sync::Arc;

use crate::error::TransportResult;
use crate::types::{LogLevel, LogMeta};

/// A sink that delivers already-formatted log lines somewhere
///
/// Implementations:
/// - `ConsoleTransport`: stdout for trace/debug/info, stderr for warn/error
/// - `FileTransport`: appends each line to a file
/// - `MemoryTransport`: keeps lines in memory, useful in tests
/// - `NoOpTransport`: discards everything
/// - Custom implementations (network sinks, channels, etc.)
///
/// `message` has already been formatted by the `Logger` and must be written
/// as-is. `meta` is the serialized meta object of the call, passed through
/// for transports that want it; the built-in ones ignore it.
///
/// A returned error is caught by the `Logger`, reported on the diagnostic
/// channel, and does not stop delivery to the remaining transports.
///
/// # Example
///
/// ```
/// use logline_core::{LogLevel, LogMeta, Transport, TransportResult};
///
/// struct Prefixed;
///
/// impl Transport for Prefixed {
///     fn log(&self, _level: LogLevel, message: &str, _meta: Option<&LogMeta>) -> TransportResult<()> {
///         println!(">> {}", message);
///         Ok(())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Deliver one formatted line
    fn log(&self, level: LogLevel, message: &str, meta: Option<&LogMeta>) -> TransportResult<()>;
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn Transport>;

/// Type alias for an Arc-wrapped transport, the form a `Logger` holds
pub type SharedTransport = Arc<dyn Transport>;

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&LogMeta>) -> TransportResult<()> {
        (**self).log(level, message, meta)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&LogMeta>) -> TransportResult<()> {
        (**self).log(level, message, meta)
    }
}
