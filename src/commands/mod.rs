pub mod analyze;
pub mod events;
pub mod export;
pub mod idle;
pub mod init;
pub mod watch;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record input activity until a key is pressed")]
    Watch,
    #[command(about = "Display recorded events")]
    Events(events::EventsArgs),
    #[command(about = "Display idle intervals derived from the event log")]
    Idle(idle::IdleArgs),
    #[command(about = "Re-run idle analysis over the full event log")]
    Analyze,
    #[command(about = "Export events and idle intervals")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch => watch::cmd().await,
            Commands::Events(args) => events::cmd(args),
            Commands::Idle(args) => idle::cmd(args),
            Commands::Analyze => analyze::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Parses a `YYYY-MM-DD` command-line date argument.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}
