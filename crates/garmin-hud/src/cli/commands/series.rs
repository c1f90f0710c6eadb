//! `series`: chart points of one daily column

use chrono::{Duration, NaiveDate};

use super::{daily_table, open_store, resolve_column};
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::{HudError, Result};
use crate::metrics::{SeriesPoint, Table};

/// Points of `column` dated on or before `today`, limited to the last `days` days
pub fn series(table: &Table, column: &str, today: NaiveDate, days: Option<u32>) -> Result<Vec<SeriesPoint>> {
    let column = resolve_column(column);
    if !table.has_column(&column) {
        return Err(HudError::invalid_param(format!("Unknown column '{}'", column)));
    }

    let start = days.map(|d| today - Duration::days(i64::from(d.max(1)) - 1));
    Ok(table
        .series(&column)
        .into_iter()
        .filter(|p| p.date <= today && start.map_or(true, |s| p.date >= s))
        .collect())
}

pub fn run(settings: &Settings, column: &str, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let table = daily_table(&store)?;
    let points = series(&table, column, settings.today(), days)?;

    match format {
        OutputFormat::Json => print_json(&points),
        OutputFormat::Table => {
            println!("{:<12} {:>12}", "Date", resolve_column(column));
            println!("{}", "-".repeat(25));
            for point in &points {
                println!("{:<12} {:>12.2}", point.date, point.value);
            }
            Ok(())
        }
    }
}
