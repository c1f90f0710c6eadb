//! Insight table: every catalog metric aggregated over every period window.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{aggregate, Aggregation, AggregationMode};
use super::period::Period;
use super::table::Table;
use super::units::{
    format_number, format_thousands, hours_to_clock_string, minutes_to_pace_string, NO_VALUE,
};
use crate::models::DailyMetric;

/// How an aggregated value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Two decimals
    #[default]
    Number,
    /// Decimal hours as "HH:MM"
    Clock,
    /// Minutes per km as "M:SS"
    Pace,
    /// Rounded, thousands separated
    Integer,
}

impl ValueFormat {
    pub fn render(&self, value: Option<f64>) -> String {
        match (self, value) {
            (_, None) => NO_VALUE.to_string(),
            (ValueFormat::Number, Some(v)) => format_number(v),
            (ValueFormat::Clock, v) => hours_to_clock_string(v),
            (ValueFormat::Pace, v) => minutes_to_pace_string(v),
            (ValueFormat::Integer, Some(v)) => format_thousands(v),
        }
    }
}

/// Aggregation plus output format of one insight row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    #[serde(flatten)]
    pub aggregation: Aggregation,

    #[serde(default)]
    pub format: ValueFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,

    #[serde(flatten)]
    pub spec: MetricSpec,
}

/// Ordered list of labelled metrics shown in the insight table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricCatalog {
    entries: Vec<CatalogEntry>,
}

impl MetricCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a metric; a label that already exists is replaced in place
    pub fn with(mut self, label: impl Into<String>, aggregation: Aggregation, format: ValueFormat) -> Self {
        let label = label.into();
        let spec = MetricSpec {
            aggregation,
            format,
        };
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.spec = spec,
            None => self.entries.push(CatalogEntry { label, spec }),
        }
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MetricCatalog {
    /// The dashboard's metric list
    fn default() -> Self {
        use AggregationMode::{Mean, Sum};
        let running = DailyMetric::RunningKm.header();

        Self::new()
            .with(
                "Average sleep (h)",
                Aggregation::new(DailyMetric::SleepHours.header(), Mean),
                ValueFormat::Number,
            )
            .with(
                "Sleep quality (score)",
                Aggregation::new(DailyMetric::SleepScore.header(), Mean),
                ValueFormat::Number,
            )
            .with(
                "Running distance (km) - mean",
                Aggregation::new(running, Mean).only_positive(),
                ValueFormat::Number,
            )
            .with(
                "Running distance (km) - sum",
                Aggregation::new(running, Sum).only_positive(),
                ValueFormat::Number,
            )
            .with(
                "Average pace (min/km)",
                Aggregation::new(DailyMetric::Pace.header(), Mean)
                    .only_positive()
                    .co_filter(running),
                ValueFormat::Pace,
            )
            .with(
                "Average steps",
                Aggregation::new(DailyMetric::Steps.header(), Mean),
                ValueFormat::Integer,
            )
            .with(
                "Calories (day)",
                Aggregation::new(DailyMetric::TotalCalories.header(), Mean),
                ValueFormat::Number,
            )
            .with(
                "Body Battery (avg)",
                Aggregation::new(DailyMetric::BodyBatteryAvg.header(), Mean),
                ValueFormat::Number,
            )
            .with(
                "Breathwork (min)",
                Aggregation::new(DailyMetric::MeditationMin.header(), Mean).only_positive(),
                ValueFormat::Number,
            )
    }
}

/// Formatted values of one metric, in [`Period::ALL`] order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRow {
    pub label: String,
    pub values: [String; 5],
}

impl InsightRow {
    pub fn value(&self, period: Period) -> &str {
        let idx = Period::ALL.iter().position(|p| *p == period).unwrap_or(0);
        &self.values[idx]
    }
}

/// Label x period table of formatted values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightTable {
    pub today: NaiveDate,
    pub rows: Vec<InsightRow>,
}

impl InsightTable {
    pub fn row(&self, label: &str) -> Option<&InsightRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

impl fmt::Display for InsightTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Metric".len());

        write!(f, "{:<width$}", "Metric", width = width)?;
        for period in Period::ALL {
            write!(f, " {:>10}", period.label())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(width + 11 * Period::ALL.len()))?;

        for row in &self.rows {
            write!(f, "{:<width$}", row.label, width = width)?;
            for value in &row.values {
                write!(f, " {:>10}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Aggregate and format every catalog metric for each period ending `today`.
///
/// A metric whose column is absent renders "-" in every period.
pub fn build_insight_table(table: &Table, catalog: &MetricCatalog, today: NaiveDate) -> InsightTable {
    let rows = catalog
        .entries()
        .iter()
        .map(|entry| InsightRow {
            label: entry.label.clone(),
            values: Period::ALL.map(|period| {
                let value = aggregate(table, today, period, &entry.spec.aggregation);
                entry.spec.format.render(value)
            }),
        })
        .collect();

    InsightTable { today, rows }
}
