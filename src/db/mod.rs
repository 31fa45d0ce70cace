//! Database layer for the amon application.
//!
//! A thin persistence layer built on SQLite. The event log is the single
//! durable store: an append-only table whose autoincrement primary key is the
//! monotonic event identifier the rest of the application relies on.

/// Core database connection module.
pub mod db;

/// Append-only activity event log.
pub mod events;
