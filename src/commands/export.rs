use crate::commands::parse_date;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(short, long, value_enum, default_value_t = ExportData::All)]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Output file path; a timestamped name is generated when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Limit the export to a specific date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let date = export_args.date.as_deref().map(parse_date).transpose()?;

    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(export_args.data, date)
}
