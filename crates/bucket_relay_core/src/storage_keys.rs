use chrono::{DateTime, SecondsFormat, Utc};

pub const RELAY_OBJECT_PREFIX: &str = "test-";
pub const RELAY_OBJECT_EXTENSION: &str = ".txt";
pub const RELAY_OBJECT_GREETING: &str = "Hello, World!";

/// ISO 8601 UTC timestamp with millisecond precision, e.g.
/// `2026-03-01T09:30:00.125Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn relay_object_key(timestamp: &str) -> String {
    format!("{RELAY_OBJECT_PREFIX}{timestamp}{RELAY_OBJECT_EXTENSION}")
}

pub fn relay_object_body(timestamp: &str) -> String {
    format!("{RELAY_OBJECT_GREETING}{timestamp}")
}
