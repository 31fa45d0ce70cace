//! Idle-summary sink.
//!
//! Idle intervals land in a CSV file next to the event log, one row per
//! interval. The live detector appends as gaps close; the offline analyzer
//! rewrites the whole file from the persisted log, so re-running it is
//! idempotent and a completed session always ends up with the derived view.

use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::format_minutes;
use crate::libs::idle::IdleInterval;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const SUMMARY_FILE_NAME: &str = "idle_summary_per_day.csv";

const SUMMARY_HEADER: [&str; 4] = ["Date", "From", "To", "Duration (Minutes)"];

pub struct IdleSummary {
    path: PathBuf,
}

impl IdleSummary {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SUMMARY_FILE_NAME)?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Appends one idle interval, writing the header first when the file is
    /// new or empty.
    pub fn append(&self, interval: &IdleInterval) -> Result<()> {
        let write_header = !self.path.exists() || self.path.metadata()?.len() == 0;

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut wtr = csv::Writer::from_writer(file);
        if write_header {
            wtr.write_record(SUMMARY_HEADER)?;
        }
        wtr.write_record(Self::record(interval))?;
        wtr.flush()?;

        Ok(())
    }

    /// Replaces the file contents with the given intervals.
    pub fn write_all(&self, intervals: &[IdleInterval]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(SUMMARY_HEADER)?;
        for interval in intervals {
            wtr.write_record(Self::record(interval))?;
        }
        wtr.flush()?;

        Ok(())
    }

    fn record(interval: &IdleInterval) -> [String; 4] {
        [
            interval.date.format("%Y-%m-%d").to_string(),
            interval.from.format("%H:%M:%S").to_string(),
            interval.to.format("%H:%M:%S").to_string(),
            format_minutes(interval.minutes),
        ]
    }
}
