use crate::libs::event::EventRecord;
use crate::libs::formatter::FormattedIdle;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn events(events: &[EventRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIMESTAMP", "EVENT TYPE", "DETAILS"]);
        for event in events {
            table.add_row(row![event.id, event.timestamp, event.event_type, event.details]);
        }
        table.printstd();

        Ok(())
    }

    pub fn idle(intervals: &[FormattedIdle]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "FROM", "TO", "DURATION (MIN)"]);
        for interval in intervals {
            table.add_row(row![interval.id, interval.date, interval.from, interval.to, interval.duration_minutes]);
        }
        table.printstd();

        Ok(())
    }
}
