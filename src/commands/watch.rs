//! Runs one foreground recording session.
//!
//! The session captures pointer and keyboard activity until any key is
//! pressed, then flushes the idle tail and re-derives the offline artifacts
//! from the full event log, so a finished session always leaves the
//! annotated export and per-day summary in their final state.

use crate::libs::analyzer::Analyzer;
use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub async fn cmd() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let config = Config::read()?.monitor.unwrap_or_default();

    msg_print!(Message::TrackingStarted);
    // An unopenable event store is the one fatal condition; everything after
    // startup is recoverable.
    let mut monitor = Monitor::new(config.clone()).map_err(|e| msg_error_anyhow!(Message::EventStoreOpenFailed(e.to_string())))?;
    monitor.run().await?;

    Analyzer::new(config.idle_threshold).run()?;

    Ok(())
}
