//! The front-end `Logger`, its options, and the line format

mod leveled;
mod options;
pub mod format;
mod macros;

pub use leveled::{Logger, create_logger};
pub use options::{LoggerOptions, Clock, system_clock};
pub use format::{format_line, timestamp};
