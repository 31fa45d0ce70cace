//! Threshold filtering of raw input notifications.
//!
//! The vast majority of raw notifications are noise: pointer jitter, button
//! releases, sub-pixel scrolls. The filter decides which of them are
//! significant enough to persist, using per-class rules:
//!
//! - **Move**: double gate. The pointer must have moved more than
//!   `move_threshold` pixels on at least one axis since the last *accepted*
//!   position, and at least `log_interval` seconds must have elapsed since
//!   the last accepted movement.
//! - **Click**: press transitions only, at most one per `click_debounce`
//!   seconds regardless of button.
//! - **Scroll**: absolute horizontal or vertical delta above
//!   `scroll_threshold`; no temporal debounce.
//! - **KeyPress**: always accepted.
//!
//! Rejection is the expected outcome, not an error. The filter has no side
//! effects beyond the state it is handed, so it can be driven from tests
//! with synthetic event sequences.

use crate::libs::config::MonitorConfig;
use crate::libs::event::{EventKind, RawEvent};
use chrono::NaiveDateTime;

/// Session-scoped filter state, updated only on accepted events.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Position of the last accepted movement.
    pub last_position: Option<(f64, f64)>,
    /// Timestamp of the last accepted movement.
    pub last_move_time: Option<NaiveDateTime>,
    /// Timestamp of the last accepted click.
    pub last_click_time: Option<NaiveDateTime>,
}

/// An accepted event, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    pub kind: EventKind,
    pub details: String,
}

/// Applies the configured per-class thresholds to raw notifications.
#[derive(Debug, Clone)]
pub struct ThresholdFilter {
    move_threshold: f64,
    log_interval: f64,
    click_debounce: f64,
    scroll_threshold: i64,
}

impl ThresholdFilter {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            move_threshold: config.move_threshold as f64,
            log_interval: config.log_interval as f64,
            click_debounce: config.click_debounce as f64,
            scroll_threshold: config.scroll_threshold as i64,
        }
    }

    /// Decides whether a raw notification should be recorded.
    ///
    /// Returns the accepted event and updates `state`, or `None` when the
    /// notification is filtered out. `state` is left untouched on rejection.
    pub fn apply(&self, state: &mut FilterState, event: &RawEvent, now: NaiveDateTime) -> Option<Accepted> {
        match event {
            RawEvent::Move { x, y } => {
                let elapsed_ok = state.last_move_time.map_or(true, |t| secs_between(t, now) > self.log_interval);
                let moved_far = state
                    .last_position
                    .map_or(true, |(px, py)| (x - px).abs() > self.move_threshold || (y - py).abs() > self.move_threshold);

                if elapsed_ok && moved_far {
                    state.last_position = Some((*x, *y));
                    state.last_move_time = Some(now);
                    Some(Accepted {
                        kind: EventKind::Move,
                        details: format!("Position: ({:.0}, {:.0})", x, y),
                    })
                } else {
                    None
                }
            }
            RawEvent::Click { x, y, button, pressed } => {
                if !pressed {
                    return None;
                }
                let elapsed_ok = state.last_click_time.map_or(true, |t| secs_between(t, now) > self.click_debounce);
                if elapsed_ok {
                    state.last_click_time = Some(now);
                    Some(Accepted {
                        kind: EventKind::Click,
                        details: format!("Position: ({:.0}, {:.0}), Button: {:?}", x, y, button),
                    })
                } else {
                    None
                }
            }
            RawEvent::Scroll { x, y, dx, dy } => {
                if dx.abs() > self.scroll_threshold || dy.abs() > self.scroll_threshold {
                    Some(Accepted {
                        kind: EventKind::Scroll,
                        details: format!("Position: ({:.0}, {:.0}), Delta: ({}, {})", x, y, dx, dy),
                    })
                } else {
                    None
                }
            }
            RawEvent::KeyPress { key } => Some(Accepted {
                kind: EventKind::KeyPress,
                details: format!("Key: {:?}", key),
            }),
        }
    }
}

/// Elapsed time between two timestamps in seconds, with millisecond precision.
fn secs_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0
}
