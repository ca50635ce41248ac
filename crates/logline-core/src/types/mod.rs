//! Core types shared by the logger and its transports

mod level;
mod meta;

pub use level::{LogLevel, should_log};
pub use meta::LogMeta;
pub(crate) use meta::{meta_present, meta_value};
