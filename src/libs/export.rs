//! Data export for external analysis and backup.
//!
//! Exports the recorded event log and the derived idle intervals in CSV,
//! JSON, or Excel form. Idle data is always re-derived from the persisted
//! log at export time, so an export never depends on the live summary file
//! being up to date.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amon::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Events, None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::events::Events;
use crate::libs::analyzer::Analyzer;
use crate::libs::config::Config;
use crate::libs::event::EventRecord;
use crate::libs::formatter::{format_minutes, FormattedIdle};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with formatted headers.
    Excel,
}

/// Data categories available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Recorded activity events.
    Events,
    /// Derived idle intervals.
    Idle,
    /// Events and idle intervals together.
    All,
}

/// Serializable event row for export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportEvent {
    pub id: i64,
    pub timestamp: String,
    pub event_type: String,
    pub details: String,
}

impl From<&EventRecord> for ExportEvent {
    fn from(record: &EventRecord) -> Self {
        ExportEvent {
            id: record.id,
            timestamp: record.timestamp.clone(),
            event_type: record.event_type.clone(),
            details: record.details.clone(),
        }
    }
}

/// Export handler: gathers data, applies the format, writes the file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter with the given format and optional output path.
    ///
    /// Without a custom path a timestamped default name is generated, e.g.
    /// `amon_export_20250601_103000.csv`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("amon_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Dispatches to the handler for the requested data category.
    ///
    /// When `date` is given, events are limited to that calendar date and
    /// idle intervals to gaps that began on it.
    pub fn export(&self, data_type: ExportData, date: Option<NaiveDate>) -> Result<()> {
        match data_type {
            ExportData::Events => self.export_events(date),
            ExportData::Idle => self.export_idle(date),
            ExportData::All => self.export_all(date),
        }
    }

    fn export_events(&self, date: Option<NaiveDate>) -> Result<()> {
        let events = Self::gather_events(date)?;

        match self.format {
            ExportFormat::Csv => self.export_events_csv(&events)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&events)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_events_excel(&events)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_idle(&self, date: Option<NaiveDate>) -> Result<()> {
        let intervals = Self::gather_idle(date)?;

        match self.format {
            ExportFormat::Csv => self.export_idle_csv(&intervals)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&intervals)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_idle_excel(&intervals)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_all(&self, date: Option<NaiveDate>) -> Result<()> {
        msg_info!(Message::ExportingAllData);

        if let ExportFormat::Json = self.format {
            let events = Self::gather_events(date)?;
            let idle = Self::gather_idle(date)?;

            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "events": events,
                "idle_intervals": idle,
            });

            let json = serde_json::to_string_pretty(&all_data)?;
            File::create(&self.output_path)?.write_all(json.as_bytes())?;
        } else {
            let base = self
                .output_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "amon_export".to_string());
            let ext = match self.format {
                ExportFormat::Csv => "csv",
                ExportFormat::Json => "json",
                ExportFormat::Excel => "xlsx",
            };

            let events_path = self.output_path.with_file_name(format!("{}_events.{}", base, ext));
            let idle_path = self.output_path.with_file_name(format!("{}_idle.{}", base, ext));

            Exporter::new(self.format, Some(events_path)).export_events(date)?;
            Exporter::new(self.format, Some(idle_path)).export_idle(date)?;

            return Ok(());
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn gather_events(date: Option<NaiveDate>) -> Result<Vec<ExportEvent>> {
        let mut store = Events::new()?;
        let records = match date {
            Some(date) => store.fetch_daily(date)?,
            None => store.read_all()?,
        };
        Ok(records.iter().map(ExportEvent::from).collect())
    }

    fn gather_idle(date: Option<NaiveDate>) -> Result<Vec<FormattedIdle>> {
        let threshold = Config::read()?.monitor.unwrap_or_default().idle_threshold;
        let records = Events::new()?.read_all()?;
        let intervals = Analyzer::new(threshold).summarize(&records);

        Ok(intervals
            .iter()
            .filter(|interval| date.map_or(true, |d| interval.date == d))
            .enumerate()
            .map(|(index, interval)| FormattedIdle {
                id: (index + 1) as i32,
                date: interval.date.format("%Y-%m-%d").to_string(),
                from: interval.from.format("%H:%M:%S").to_string(),
                to: interval.to.format("%H:%M:%S").to_string(),
                duration_minutes: format_minutes(interval.minutes),
            })
            .collect())
    }

    fn export_events_csv(&self, events: &[ExportEvent]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Timestamp", "Event Type", "Details"])?;

        for event in events {
            wtr.write_record([event.id.to_string().as_str(), event.timestamp.as_str(), event.event_type.as_str(), event.details.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_idle_csv(&self, intervals: &[FormattedIdle]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "From", "To", "Duration (Minutes)"])?;

        for interval in intervals {
            wtr.write_record([&interval.date, &interval.from, &interval.to, &interval.duration_minutes])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_events_excel(&self, events: &[ExportEvent]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Timestamp", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Event Type", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Details", &header_format)?;

        for (i, event) in events.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, event.id as f64)?;
            worksheet.write_string(row, 1, &event.timestamp)?;
            worksheet.write_string(row, 2, &event.event_type)?;
            worksheet.write_string(row, 3, &event.details)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_idle_excel(&self, intervals: &[FormattedIdle]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 1, "From", &header_format)?;
        worksheet.write_string_with_format(0, 2, "To", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Duration (Minutes)", &header_format)?;

        for (i, interval) in intervals.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &interval.date)?;
            worksheet.write_string(row, 1, &interval.from)?;
            worksheet.write_string(row, 2, &interval.to)?;
            worksheet.write_string(row, 3, &interval.duration_minutes)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
