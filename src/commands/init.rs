//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard and persists the resulting
//! configuration. With `--delete`, the existing configuration file is
//! removed instead, resetting the application to its defaults.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
