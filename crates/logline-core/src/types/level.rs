//! Severity levels and the threshold check

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLevelError;

/// Log levels, ordered by increasing severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Every level, least severe first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name, as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Uppercase label written into formatted lines
    pub fn as_upper(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Position in [`LogLevel::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether a threshold of `self` lets a message at `incoming` through
    pub fn enables(self, incoming: LogLevel) -> bool {
        should_log(self, incoming)
    }
}

/// Returns true iff `incoming` is at or above the `current` threshold.
pub fn should_log(current: LogLevel, incoming: LogLevel) -> bool {
    incoming >= current
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_should_log_all_pairs() {
        for (ci, current) in LogLevel::ALL.iter().enumerate() {
            for (ii, incoming) in LogLevel::ALL.iter().enumerate() {
                assert_eq!(
                    should_log(*current, *incoming),
                    ii >= ci,
                    "threshold {} incoming {}",
                    current,
                    incoming
                );
            }
        }
    }

    #[test]
    fn test_enables() {
        assert!(LogLevel::Warn.enables(LogLevel::Error));
        assert!(LogLevel::Warn.enables(LogLevel::Warn));
        assert!(!LogLevel::Warn.enables(LogLevel::Info));
        assert!(LogLevel::Trace.enables(LogLevel::Trace));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!(" Debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Info.as_upper(), "INFO");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Error.index(), 4);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Trace);
    }
}
