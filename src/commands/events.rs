use crate::commands::parse_date;
use crate::db::events::Events;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EventsArgs {
    /// Show events for a specific date (YYYY-MM-DD); all events when omitted
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(events_args: EventsArgs) -> Result<()> {
    let mut store = Events::new()?;
    let events = match &events_args.date {
        Some(date) => {
            let date = parse_date(date)?;
            msg_print!(Message::EventsTitle(date.to_string()));
            store.fetch_daily(date)?
        }
        None => store.read_all()?,
    };

    if events.is_empty() {
        msg_info!(Message::NoEventsRecorded);
        return Ok(());
    }
    View::events(&events)?;

    Ok(())
}
