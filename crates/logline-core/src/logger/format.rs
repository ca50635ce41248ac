//! Line formatting
//!
//! `<timestamp> <LEVEL> [<name>] <message> <meta-json>`, trimmed. The
//! bracketed name and the meta JSON are omitted when absent. Formatting never
//! fails.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::types::{meta_present, LogLevel};

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-02T03:04:05.678Z`
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the line every transport receives.
///
/// An empty `name` is treated like no name and leaves no gap. `meta` is
/// appended as compact JSON unless it is `None` or carries nothing: `null`,
/// a number or bool, or an empty object, array or string.
pub fn format_line(
    timestamp: &str,
    level: LogLevel,
    name: Option<&str>,
    message: impl Display,
    meta: Option<&Value>,
) -> String {
    let mut parts = vec![timestamp.to_string(), level.as_upper().to_string()];
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        parts.push(format!("[{}]", name));
    }
    parts.push(message.to_string());

    let raw = parts.join(" ");
    let base = raw.trim();

    match meta.filter(|value| meta_present(value)) {
        Some(value) => format!("{} {}", base, value),
        None => base.to_string(),
    }
}
