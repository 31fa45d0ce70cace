//! Offline idle analysis over the persisted event log.
//!
//! Two independent, restartable passes re-derive idle information from the
//! full ordered log, without touching the live session machinery:
//!
//! - **Annotation pass**: every event row is emitted again with an extra
//!   column holding the idle duration (in minutes, two decimals) of the gap
//!   that preceded it, or an empty string when the gap was under the
//!   threshold. The first row is always unannotated.
//! - **Summary pass**: gaps above the threshold are grouped by the calendar
//!   date of their earlier endpoint and written one row per interval,
//!   replacing the summary file wholesale.
//!
//! Both passes share the gap predicate with the live detector, so a
//! completed session analyzed offline reproduces what the detector emitted.
//! Rows with malformed timestamps are skipped from gap computation but still
//! emitted, and never abort the run.

use crate::db::events::Events;
use crate::libs::data_storage::DataStorage;
use crate::libs::event::{parse_timestamp, EventRecord};
use crate::libs::formatter::format_minutes;
use crate::libs::idle::{idle_gap, IdleInterval};
use crate::libs::messages::Message;
use crate::libs::summary::IdleSummary;
use crate::{msg_debug, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::path::Path;

pub const ANNOTATED_FILE_NAME: &str = "events_with_idle.csv";

const ANNOTATED_HEADER: [&str; 5] = ["ID", "Timestamp", "Event Type", "Details", "Idle Time (Minutes)"];

/// One event row plus its idle annotation (empty when the preceding gap was
/// not idle).
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedEvent {
    pub record: EventRecord,
    pub idle_minutes: String,
}

pub struct Analyzer {
    threshold_secs: u64,
}

impl Analyzer {
    pub fn new(threshold_secs: u64) -> Self {
        Self { threshold_secs }
    }

    /// Annotation pass: per-event idle durations.
    pub fn annotate(&self, records: &[EventRecord]) -> Vec<AnnotatedEvent> {
        let mut last: Option<NaiveDateTime> = None;
        let mut annotated = Vec::with_capacity(records.len());

        for record in records {
            let mut idle_minutes = String::new();
            match parse_timestamp(&record.timestamp) {
                Ok(current) => {
                    if let Some(prev) = last {
                        if let Some(interval) = idle_gap(prev, current, self.threshold_secs) {
                            idle_minutes = format_minutes(interval.minutes);
                        }
                    }
                    last = Some(current);
                }
                Err(e) => {
                    msg_warning!(Message::TimestampParseFailed(record.id, e.to_string()));
                }
            }
            annotated.push(AnnotatedEvent {
                record: record.clone(),
                idle_minutes,
            });
        }

        annotated
    }

    /// Summary pass: idle intervals grouped by the calendar date of the
    /// earlier timestamp of each gap.
    ///
    /// Intervals keep insertion order within a day and day keys keep
    /// first-seen order.
    pub fn summarize(&self, records: &[EventRecord]) -> Vec<IdleInterval> {
        let mut day_order: Vec<NaiveDate> = vec![];
        let mut by_day: HashMap<NaiveDate, Vec<IdleInterval>> = HashMap::new();
        let mut last: Option<NaiveDateTime> = None;

        for record in records {
            let current = match parse_timestamp(&record.timestamp) {
                Ok(current) => current,
                Err(e) => {
                    msg_debug!(format!("skipping event {} in summary pass: {}", record.id, e));
                    continue;
                }
            };
            if let Some(prev) = last {
                if let Some(interval) = idle_gap(prev, current, self.threshold_secs) {
                    if !by_day.contains_key(&interval.date) {
                        day_order.push(interval.date);
                    }
                    by_day.entry(interval.date).or_default().push(interval);
                }
            }
            last = Some(current);
        }

        let mut intervals = vec![];
        for date in day_order {
            if let Some(day_intervals) = by_day.remove(&date) {
                intervals.extend(day_intervals);
            }
        }
        intervals
    }

    /// Writes the annotation pass output as CSV.
    pub fn write_annotated(&self, annotated: &[AnnotatedEvent], path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(ANNOTATED_HEADER)?;
        for event in annotated {
            wtr.write_record([
                event.record.id.to_string().as_str(),
                event.record.timestamp.as_str(),
                event.record.event_type.as_str(),
                event.record.details.as_str(),
                event.idle_minutes.as_str(),
            ])?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Runs both passes over the full event log and rewrites both artifacts.
    ///
    /// Re-running on an unchanged log produces byte-identical output.
    pub fn run(&self) -> Result<()> {
        let records = Events::new()?.read_all()?;

        let annotated_path = DataStorage::new().get_path(ANNOTATED_FILE_NAME)?;
        self.write_annotated(&self.annotate(&records), &annotated_path)?;
        msg_success!(Message::AnnotatedEventsSaved(annotated_path.display().to_string()));

        let summary = IdleSummary::new()?;
        summary.write_all(&self.summarize(&records))?;
        msg_print!(Message::IdleSummarySaved(summary.path().display().to_string()));

        Ok(())
    }
}
