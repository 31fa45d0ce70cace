use crate::libs::analyzer::Analyzer;
use crate::libs::config::Config;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let threshold = Config::read()?.monitor.unwrap_or_default().idle_threshold;
    Analyzer::new(threshold).run()
}
