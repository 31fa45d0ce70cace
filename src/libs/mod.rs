//! Core library modules for the amon application.
//!
//! The live path (`filter` → `recorder` → `idle`) is supervised by
//! `monitor`; `analyzer` re-derives idle data offline from the persisted
//! log. Everything else is supporting infrastructure: configuration, data
//! paths, formatting, console output, and export.

pub mod analyzer;
pub mod config;
pub mod data_storage;
pub mod event;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod idle;
pub mod messages;
pub mod monitor;
pub mod recorder;
pub mod summary;
pub mod view;
