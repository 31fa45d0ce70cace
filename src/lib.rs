//! # Amon - Activity Monitoring
//!
//! A command-line utility for recording workstation input activity,
//! detecting idle periods, and producing per-day idle summaries.
//!
//! ## Features
//!
//! - **Activity Recording**: Pointer and keyboard events captured in real time,
//!   debounced through spatial and temporal thresholds
//! - **Idle Detection**: Gaps between recorded events above a configurable
//!   threshold are stored as idle intervals, both live and after the fact
//! - **Offline Analysis**: Two-pass re-derivation of per-event idle annotations
//!   and per-day idle summaries from the persisted event log
//! - **Data Export**: Export events and idle summaries to CSV, JSON, and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amon::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
