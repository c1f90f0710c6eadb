//! `correlate`: Pearson matrix of daily columns, with a trend line for pairs

use serde::Serialize;

use super::{daily_table, open_store, resolve_column};
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::metrics::{correlation_matrix, fit_trend_line, CorrelationMatrix, Table, TrendLine};

#[derive(Debug, Serialize)]
pub struct CorrelationReport {
    pub matrix: CorrelationMatrix,
    /// Fit of the second column against the first, when exactly two are given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendLine>,
}

pub fn correlate(table: &Table, columns: &[String]) -> Result<CorrelationReport> {
    let columns: Vec<String> = columns.iter().map(|c| resolve_column(c)).collect();
    let names: Vec<&str> = columns.iter().map(String::as_str).collect();

    let matrix = correlation_matrix(table, &names)?;
    let trend = match names.as_slice() {
        [x, y] => fit_trend_line(table, x, y).ok(),
        _ => None,
    };
    Ok(CorrelationReport { matrix, trend })
}

pub fn run(settings: &Settings, columns: &[String], format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let table = daily_table(&store)?;
    let report = correlate(&table, columns)?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            print!("{}", report.matrix);
            println!("\n{} complete rows", report.matrix.rows_used);
            if let Some(trend) = report.trend {
                println!(
                    "Trend: y = {:.4} * x + {:.4} (R² {:.3}, n = {})",
                    trend.slope, trend.intercept, trend.r_squared, trend.points
                );
            }
            Ok(())
        }
    }
}
