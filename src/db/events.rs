//! Append-only storage for recorded activity events.
//!
//! Every accepted input event becomes one immutable row. Identifiers are
//! assigned by SQLite's `AUTOINCREMENT`, which guarantees they are unique and
//! strictly increasing for the lifetime of the log, even across process
//! restarts. Rows are never updated or deleted.

use super::db::Db;
use crate::libs::event::EventRecord;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use thiserror::Error;

const SCHEMA_EVENTS: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    event_type TEXT NOT NULL,
    details TEXT NOT NULL
)";
const INSERT_EVENT: &str = "INSERT INTO events (timestamp, event_type, details) VALUES (?1, ?2, ?3)";
const SELECT_ALL_EVENTS: &str = "SELECT id, timestamp, event_type, details FROM events ORDER BY id";
const SELECT_DAILY_EVENTS: &str = "SELECT id, timestamp, event_type, details FROM events WHERE date(timestamp) = date(?1) ORDER BY id";

/// Failure to durably read or write the event log.
///
/// An append that fails leaves the log unchanged; the event is not considered
/// recorded and the caller decides whether to retry or drop it.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("event log append failed: {0}")]
    Append(#[source] rusqlite::Error),
    #[error("event log read failed: {0}")]
    Read(#[source] rusqlite::Error),
}

#[derive(Debug)]
pub struct Events {
    pub conn: Connection,
}

impl Events {
    pub fn new() -> Result<Events> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EVENTS, [])?;

        Ok(Events { conn: db.conn })
    }

    /// Appends one event row and returns its assigned identifier.
    pub fn append(&mut self, timestamp: &str, event_type: &str, details: &str) -> Result<i64, PersistenceError> {
        self.conn
            .execute(INSERT_EVENT, params![timestamp, event_type, details])
            .map_err(PersistenceError::Append)?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Reads the full log in ascending identifier order.
    pub fn read_all(&mut self) -> Result<Vec<EventRecord>, PersistenceError> {
        self.query_events(SELECT_ALL_EVENTS, [])
    }

    /// Reads the events recorded on a specific calendar date.
    pub fn fetch_daily(&mut self, date: NaiveDate) -> Result<Vec<EventRecord>, PersistenceError> {
        let date_str = date.format("%Y-%m-%d").to_string();
        self.query_events(SELECT_DAILY_EVENTS, params![date_str])
    }

    fn query_events<P: rusqlite::Params>(&mut self, sql: &str, params: P) -> Result<Vec<EventRecord>, PersistenceError> {
        let mut stmt = self.conn.prepare(sql).map_err(PersistenceError::Read)?;
        let event_iter = stmt
            .query_map(params, |row| {
                Ok(EventRecord {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    event_type: row.get(2)?,
                    details: row.get(3)?,
                })
            })
            .map_err(PersistenceError::Read)?;

        let mut events = vec![];
        for event in event_iter {
            events.push(event.map_err(PersistenceError::Read)?);
        }

        Ok(events)
    }
}
