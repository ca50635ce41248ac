//! Console transport implementation

use std::io::Write;

use super::traits::Transport;
use crate::error::TransportResult;
use crate::types::{LogLevel, LogMeta};

/// A transport that prints to the console
///
/// `Warn` and `Error` go to stderr, everything else to stdout. It does no
/// filtering of its own: if invoked, it prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    /// Create a new console transport
    pub fn new() -> Self {
        Self
    }

    /// Whether lines at `level` are routed to stderr
    pub fn uses_stderr(level: LogLevel) -> bool {
        matches!(level, LogLevel::Warn | LogLevel::Error)
    }
}

/// Write `message` to `err` for warn/error and to `out` otherwise
fn write_routed<O: Write, E: Write>(
    level: LogLevel,
    message: &str,
    out: &mut O,
    err: &mut E,
) -> TransportResult<()> {
    if ConsoleTransport::uses_stderr(level) {
        writeln!(err, "{}", message)?;
    } else {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}

impl Transport for ConsoleTransport {
    fn log(&self, level: LogLevel, message: &str, _meta: Option<&LogMeta>) -> TransportResult<()> {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        write_routed(level, message, &mut stdout, &mut stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(level: LogLevel, message: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_routed(level, message, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_console_routing() {
        for level in LogLevel::ALL {
            let expected = matches!(level, LogLevel::Warn | LogLevel::Error);
            assert_eq!(ConsoleTransport::uses_stderr(level), expected, "{}", level);
        }
    }

    #[test]
    fn test_low_levels_go_to_stdout() {
        for level in [LogLevel::Trace, LogLevel::Debug, LogLevel::Info] {
            let (out, err) = route(level, "T INFO line");
            assert_eq!(out, "T INFO line\n");
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_warn_and_error_go_to_stderr() {
        for level in [LogLevel::Warn, LogLevel::Error] {
            let (out, err) = route(level, "T ERROR line");
            assert!(out.is_empty());
            assert_eq!(err, "T ERROR line\n");
        }
    }

    #[test]
    fn test_write_error_is_returned() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = write_routed(LogLevel::Error, "lost", &mut Vec::<u8>::new(), &mut Closed);
        assert!(matches!(result, Err(crate::error::TransportError::Io(_))));
    }

    #[test]
    fn test_console_transport_logs() {
        let transport = ConsoleTransport::new();
        for level in LogLevel::ALL {
            assert!(transport.log(level, "console message", None).is_ok());
        }
    }
}
