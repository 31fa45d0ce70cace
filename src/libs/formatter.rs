//! Formatting helpers for idle durations and table display.

use crate::libs::idle::IdleInterval;
use serde::{Deserialize, Serialize};

/// Formats a duration in minutes with two-decimal precision.
///
/// This is the canonical rendering used in every artifact: the idle summary
/// file, the annotated event export, and console messages.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.2}", minutes)
}

/// A pre-formatted idle interval for display and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedIdle {
    /// Sequential row number, starting from 1.
    pub id: i32,
    pub date: String,
    pub from: String,
    pub to: String,
    pub duration_minutes: String,
}

/// Formatting of a collection of idle intervals for display.
pub trait IdleGroup {
    fn format(&self) -> Vec<FormattedIdle>;
}

impl IdleGroup for Vec<IdleInterval> {
    fn format(&self) -> Vec<FormattedIdle> {
        self.iter()
            .enumerate()
            .map(|(index, interval)| FormattedIdle {
                id: (index + 1) as i32,
                date: interval.date.format("%Y-%m-%d").to_string(),
                from: interval.from.format("%H:%M:%S").to_string(),
                to: interval.to.format("%H:%M:%S").to_string(),
                duration_minutes: format_minutes(interval.minutes),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_are_rendered_with_two_decimals() {
        assert_eq!(format_minutes(65.0 / 60.0), "1.08");
        assert_eq!(format_minutes(1.5), "1.50");
        assert_eq!(format_minutes(120.0 / 60.0), "2.00");
    }
}
