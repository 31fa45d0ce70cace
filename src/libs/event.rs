//! Activity event types shared by the live monitor and the offline analyzer.
//!
//! `RawEvent` is the notification contract delivered by the input source;
//! `EventRecord` is the persisted row read back from the event log. Persisted
//! timestamps are local wall-clock strings with microsecond precision, and
//! parsing tolerates rows written without a fractional part.

use chrono::NaiveDateTime;
use rdev::{Button, Key};
use std::fmt;

/// Format used when writing event timestamps to the log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Fallback format for rows persisted without sub-second precision.
pub const TIMESTAMP_FORMAT_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// A raw input notification, before threshold filtering.
///
/// Click and scroll notifications carry the pointer position known at the
/// time of delivery; the input adapter tracks it from movement events.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64, button: Button, pressed: bool },
    Scroll { x: f64, y: f64, dx: i64, dy: i64 },
    KeyPress { key: Key },
}

/// The class of a recorded activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Move,
    Click,
    Scroll,
    KeyPress,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Move => "Move",
            EventKind::Click => "Click",
            EventKind::Scroll => "Scroll",
            EventKind::KeyPress => "KeyPress",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single persisted row of the event log.
///
/// The timestamp is kept as the raw stored string; consumers that need the
/// parsed value go through [`parse_timestamp`] so that malformed rows can be
/// handled explicitly instead of failing the whole read.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: i64,
    pub timestamp: String,
    pub event_type: String,
    pub details: String,
}

/// Parses a stored timestamp, trying sub-second precision first and falling
/// back to whole seconds.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).or_else(|_| NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT_SECONDS))
}
