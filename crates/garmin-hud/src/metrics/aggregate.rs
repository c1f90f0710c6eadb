//! Scalar aggregation of one column over a trailing period window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::{Period, PeriodWindow};
use super::table::Table;

/// How the values in a window are reduced to one number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Mean,
    Sum,
}

/// Which column to aggregate and which rows qualify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Source column name
    pub column: String,

    #[serde(default)]
    pub mode: AggregationMode,

    /// Drop zero and negative values (metrics only meaningful on active days)
    #[serde(default)]
    pub only_positive: bool,

    /// Only keep rows where this other column is strictly positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_filter: Option<String>,
}

impl Aggregation {
    pub fn new(column: impl Into<String>, mode: AggregationMode) -> Self {
        Self {
            column: column.into(),
            mode,
            only_positive: false,
            co_filter: None,
        }
    }

    pub fn only_positive(mut self) -> Self {
        self.only_positive = true;
        self
    }

    pub fn co_filter(mut self, column: impl Into<String>) -> Self {
        self.co_filter = Some(column.into());
        self
    }
}

/// Aggregate `spec.column` over the `period` window ending `today`.
///
/// Returns `None` when the column is absent or entirely null, when the window
/// cannot be resolved (TOTAL on a table without dates) and when no row
/// survives filtering. The co-occurrence filter is applied before the
/// positivity filter.
pub fn aggregate(table: &Table, today: NaiveDate, period: Period, spec: &Aggregation) -> Option<f64> {
    let values = table.column(&spec.column)?;
    if values.iter().all(Option::is_none) {
        return None;
    }

    let window = PeriodWindow::resolve(today, period, table.earliest_date())?;

    let co_values = match &spec.co_filter {
        Some(name) => Some(table.column(name)?),
        None => None,
    };

    let selected: Vec<f64> = table
        .dates()
        .iter()
        .enumerate()
        .filter(|(_, date)| date.is_some_and(|d| window.contains(d)))
        .filter(|(row, _)| match co_values {
            Some(co) => co[*row].is_some_and(|v| v > 0.0),
            None => true,
        })
        .filter_map(|(row, _)| values[row])
        .filter(|v| !spec.only_positive || *v > 0.0)
        .collect();

    if selected.is_empty() {
        return None;
    }

    let sum: f64 = selected.iter().sum();
    match spec.mode {
        AggregationMode::Sum => Some(sum),
        AggregationMode::Mean => Some(sum / selected.len() as f64),
    }
}
