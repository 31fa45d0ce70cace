//! Idle interval derivation.
//!
//! A single gap function decides whether the time between two recorded
//! events counts as idle. The live detector and the offline per-day
//! summarizer both go through it, which keeps their outputs in agreement
//! over the same event log.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A derived record describing a gap between two recorded events (or between
/// the last event and session end) that exceeded the idle threshold.
///
/// The interval is keyed to the calendar date of its *earlier* endpoint, so
/// a gap spanning midnight is attributed to the day the inactivity began.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleInterval {
    pub date: NaiveDate,
    pub from: NaiveTime,
    pub to: NaiveTime,
    pub minutes: f64,
}

/// Returns the idle interval between two timestamps, if the gap strictly
/// exceeds `threshold_secs`.
///
/// A gap of exactly the threshold is not idle.
pub fn idle_gap(prev: NaiveDateTime, curr: NaiveDateTime, threshold_secs: u64) -> Option<IdleInterval> {
    let delta = (curr - prev).num_milliseconds() as f64 / 1000.0;
    if delta > threshold_secs as f64 {
        Some(IdleInterval {
            date: prev.date(),
            from: prev.time(),
            to: curr.time(),
            minutes: delta / 60.0,
        })
    } else {
        None
    }
}

/// Watches the stream of recorded-event timestamps for idle gaps.
///
/// The detector only ever sees post-filter events; it keeps the timestamp of
/// the previous one and compares each new arrival against it. The previous
/// timestamp always advances, whether or not an interval was emitted.
#[derive(Debug, Clone)]
pub struct IdleDetector {
    threshold_secs: u64,
    last: Option<NaiveDateTime>,
}

impl IdleDetector {
    pub fn new(threshold_secs: u64) -> Self {
        Self { threshold_secs, last: None }
    }

    /// Observes the timestamp of a newly recorded event.
    ///
    /// Never emits on the very first observation.
    pub fn observe(&mut self, timestamp: NaiveDateTime) -> Option<IdleInterval> {
        let interval = self.last.and_then(|prev| idle_gap(prev, timestamp, self.threshold_secs));
        self.last = Some(timestamp);
        interval
    }

    /// The idle interval between the last observed event and `now`, if any.
    ///
    /// Used for the final flush when a session stops; does not advance the
    /// detector.
    pub fn tail(&self, now: NaiveDateTime) -> Option<IdleInterval> {
        self.last.and_then(|prev| idle_gap(prev, now, self.threshold_secs))
    }

    /// Timestamp of the last observed event.
    pub fn last_seen(&self) -> Option<NaiveDateTime> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn ts_milli(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_milli_opt(h, m, s, milli).unwrap()
    }

    #[test]
    fn gap_of_exactly_threshold_is_not_idle() {
        assert!(idle_gap(ts(10, 0, 0), ts(10, 1, 0), 60).is_none());
    }

    #[test]
    fn gap_one_millisecond_over_threshold_is_idle() {
        let interval = idle_gap(ts(10, 0, 0), ts_milli(10, 1, 0, 1), 60).unwrap();
        assert_eq!(interval.from, ts(10, 0, 0).time());
        assert!(interval.minutes > 1.0);
    }

    #[test]
    fn sixty_five_second_gap_is_one_point_zero_eight_minutes() {
        let interval = idle_gap(ts(10, 0, 0), ts(10, 1, 5), 60).unwrap();
        assert_eq!(format!("{:.2}", interval.minutes), "1.08");
        assert_eq!(interval.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(interval.from, ts(10, 0, 0).time());
        assert_eq!(interval.to, ts(10, 1, 5).time());
    }

    #[test]
    fn fifty_nine_second_gap_is_not_idle() {
        assert!(idle_gap(ts(10, 0, 0), ts(10, 0, 59), 60).is_none());
    }

    #[test]
    fn detector_never_emits_on_first_observation() {
        let mut detector = IdleDetector::new(60);
        assert!(detector.observe(ts(10, 0, 0)).is_none());
        assert_eq!(detector.last_seen(), Some(ts(10, 0, 0)));
    }

    #[test]
    fn detector_advances_even_without_emission() {
        let mut detector = IdleDetector::new(60);
        detector.observe(ts(10, 0, 0));
        assert!(detector.observe(ts(10, 0, 30)).is_none());
        // Gap measured from the most recent event, not the first one.
        assert!(detector.observe(ts(10, 1, 20)).is_none());
        assert!(detector.observe(ts(10, 3, 0)).is_some());
    }

    #[test]
    fn tail_does_not_advance_the_detector() {
        let mut detector = IdleDetector::new(60);
        detector.observe(ts(10, 0, 0));
        assert!(detector.tail(ts(10, 2, 0)).is_some());
        assert_eq!(detector.last_seen(), Some(ts(10, 0, 0)));
    }

    #[test]
    fn tail_is_none_before_any_observation() {
        let detector = IdleDetector::new(60);
        assert!(detector.tail(ts(10, 2, 0)).is_none());
    }
}
