//! Configuration management for the amon application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and loaded with sensible defaults when no file exists. The
//! interactive setup wizard walks through the monitor thresholds so a fresh
//! installation works without hand-editing files.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitor configuration settings.
///
/// The thresholds control how aggressively raw input notifications are
/// debounced before being recorded, and when a gap between recorded events
/// counts as an idle period. Defaults match the calibration the recorder
/// shipped with: frequent enough to capture deliberate activity, sparse
/// enough to keep the event log small under pointer jitter.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Minimum pointer displacement in pixels (per axis, from the last
    /// accepted position) for a movement to be recorded.
    pub move_threshold: u32,

    /// Minimum number of seconds between two recorded movements.
    ///
    /// Works together with `move_threshold` as a double gate: a movement is
    /// recorded only when it is both far enough and late enough.
    pub log_interval: u64,

    /// Minimum number of seconds between two recorded clicks, regardless of
    /// which button was pressed.
    pub click_debounce: u64,

    /// Minimum absolute scroll delta (horizontal or vertical) for a scroll
    /// notification to be recorded.
    pub scroll_threshold: u32,

    /// Inactivity threshold in seconds. A gap between two consecutive
    /// recorded events strictly greater than this produces an idle interval.
    pub idle_threshold: u64,

    /// Poll interval in milliseconds for the stop-flag wait loop.
    pub poll_interval: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            move_threshold: 100,
            log_interval: 2,
            click_debounce: 1,
            scroll_threshold: 1,
            idle_threshold: 60,
            poll_interval: 500,
        }
    }
}

/// Main configuration container for the application.
///
/// Each section is optional so that a missing configuration file, or one
/// written by an older version, still loads cleanly.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity monitoring configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; a present
    /// but unreadable or unparsable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values (or defaults) are offered as editable prompts, so the
    /// wizard doubles as a way to review the current setup.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.monitor.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleMonitor);
        config.monitor = Some(MonitorConfig {
            move_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMoveThreshold.to_string())
                .default(default.move_threshold)
                .interact_text()?,
            log_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLogInterval.to_string())
                .default(default.log_interval)
                .interact_text()?,
            click_debounce: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptClickDebounce.to_string())
                .default(default.click_debounce)
                .interact_text()?,
            scroll_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptScrollThreshold.to_string())
                .default(default.scroll_threshold)
                .interact_text()?,
            idle_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIdleThreshold.to_string())
                .default(default.idle_threshold)
                .interact_text()?,
            poll_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPollInterval.to_string())
                .default(default.poll_interval)
                .interact_text()?,
        });

        Ok(config)
    }
}
