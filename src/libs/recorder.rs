//! Durable recording of accepted activity events.
//!
//! The recorder owns the append path of the event log: it formats the
//! timestamp, appends the row to SQLite (which assigns the identifier), and
//! only then reports the event as recorded. Each recorded row is also
//! mirrored to `events.csv` so the log can be inspected without tooling; the
//! mirror is an artifact, not the durable store, so a mirror write failure
//! is logged and the event still counts as recorded.

use crate::db::events::{Events, PersistenceError};
use crate::libs::data_storage::DataStorage;
use crate::libs::event::{EventKind, TIMESTAMP_FORMAT};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const EVENTS_CSV_FILE_NAME: &str = "events.csv";

const EVENTS_CSV_HEADER: [&str; 4] = ["ID", "Timestamp", "Event Type", "Details"];

pub struct EventRecorder {
    events: Events,
    mirror_path: PathBuf,
    last_id: Option<i64>,
}

impl EventRecorder {
    /// Opens the event store and prepares the CSV mirror.
    ///
    /// Failure to open the store is fatal for the session; the caller aborts
    /// startup.
    pub fn new() -> Result<Self> {
        let events = Events::new()?;
        let mirror_path = DataStorage::new().get_path(EVENTS_CSV_FILE_NAME)?;
        Self::ensure_mirror_header(&mirror_path)?;

        Ok(Self {
            events,
            mirror_path,
            last_id: None,
        })
    }

    /// Creates the mirror file with its header row, without clobbering an
    /// existing one.
    fn ensure_mirror_header(path: &Path) -> Result<()> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => {
                let mut wtr = csv::Writer::from_writer(file);
                wtr.write_record(EVENTS_CSV_HEADER)?;
                wtr.flush()?;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Durably appends one event and returns its identifier.
    ///
    /// The identifier is assigned by the log store, starting at 1 and
    /// strictly increasing. When the append fails the event is not recorded
    /// and the error is returned to the caller.
    pub fn record(&mut self, kind: EventKind, details: &str, timestamp: NaiveDateTime) -> Result<i64, PersistenceError> {
        let timestamp_str = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let id = self.events.append(&timestamp_str, kind.as_str(), details)?;
        self.last_id = Some(id);

        if let Err(e) = self.mirror(id, &timestamp_str, kind, details) {
            msg_warning!(Message::EventMirrorFailed(e.to_string()));
        }

        Ok(id)
    }

    /// Identifier of the most recently recorded event, if any.
    pub fn last_id(&self) -> Option<i64> {
        self.last_id
    }

    fn mirror(&self, id: i64, timestamp: &str, kind: EventKind, details: &str) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(&self.mirror_path)?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record([id.to_string().as_str(), timestamp, kind.as_str(), details])?;
        wtr.flush()?;
        Ok(())
    }
}
