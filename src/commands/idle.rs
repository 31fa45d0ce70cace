use crate::commands::parse_date;
use crate::db::events::Events;
use crate::libs::analyzer::Analyzer;
use crate::libs::config::Config;
use crate::libs::formatter::IdleGroup;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct IdleArgs {
    /// Show idle intervals that began on a specific date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(idle_args: IdleArgs) -> Result<()> {
    let threshold = Config::read()?.monitor.unwrap_or_default().idle_threshold;
    let records = Events::new()?.read_all()?;

    let mut intervals = Analyzer::new(threshold).summarize(&records);
    if let Some(date) = &idle_args.date {
        let date = parse_date(date)?;
        intervals.retain(|interval| interval.date == date);
    }

    if intervals.is_empty() {
        msg_info!(Message::NoIdleIntervalsFound);
        return Ok(());
    }
    msg_print!(Message::IdleTitle);
    View::idle(&intervals.format())?;

    Ok(())
}
