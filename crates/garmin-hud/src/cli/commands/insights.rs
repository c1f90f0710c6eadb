//! `insights`: catalog metrics over WTD / MTD / QTD / YTD / TOTAL

use super::{daily_table, open_store};
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::metrics::build_insight_table;

pub fn run(settings: &Settings, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let table = daily_table(&store)?;
    let catalog = settings.catalog()?;
    let insights = build_insight_table(&table, &catalog, settings.today());

    match format {
        OutputFormat::Json => print_json(&insights),
        OutputFormat::Table => {
            println!("Insights as of {}", insights.today);
            println!();
            print!("{}", insights);
            Ok(())
        }
    }
}
