//! Date-indexed table of nullable numeric columns.
//!
//! Cells are coerced once, when the table is built: dates become
//! `Option<NaiveDate>` and metric cells become `Option<f64>`. Anything that
//! does not parse is stored as `None`, so readers never deal with raw cells.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use super::units::duration_to_minutes;

/// Coerce a raw cell to a number.
///
/// JSON numbers pass through; strings are parsed as plain numbers (comma
/// decimal tolerated) or as "mm:ss"/"h:mm:ss" durations in minutes.
/// Everything else, including non-finite numbers, is `None`.
pub fn parse_cell(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => duration_to_minutes(s),
        _ => None,
    }
}

/// Parse the date part of "YYYY-MM-DD", "YYYY-MM-DD HH:MM:SS" or an ISO 8601 timestamp.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let head = text.split(|c| c == 'T' || c == ' ').next().unwrap_or(text);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(head, "%Y/%m/%d"))
        .ok()
}

/// Parse a local timestamp; a bare date is taken as midnight.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| parse_date(text).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Coerce a raw cell to a date; non-string cells are `None`.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_date)
}

/// One point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

/// In-memory table: one date per row plus named numeric columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    dates: Vec<Option<NaiveDate>>,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table with the given row dates and no columns
    pub fn new(dates: Vec<Option<NaiveDate>>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
        }
    }

    /// Add (or replace) a column; values are padded with `None` or truncated to the row count.
    pub fn with_column(mut self, name: impl Into<String>, mut values: Vec<Option<f64>>) -> Self {
        let name = name.into();
        values.resize(self.dates.len(), None);
        for v in values.iter_mut() {
            if v.is_some_and(|x| !x.is_finite()) {
                *v = None;
            }
        }
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(col) => col.values = values,
            None => self.columns.push(Column { name, values }),
        }
        self
    }

    /// Build a table from loosely-typed rows (e.g. a spreadsheet export).
    ///
    /// Every key other than `date_column` becomes a column, in first-seen
    /// order. Missing keys and unparseable cells become `None`.
    pub fn from_rows(date_column: &str, rows: &[Map<String, Value>]) -> Self {
        let dates = rows
            .iter()
            .map(|row| row.get(date_column).and_then(parse_date_value))
            .collect();
        let mut table = Self::new(dates);

        let mut names: Vec<&str> = Vec::new();
        for row in rows {
            for key in row.keys() {
                if key != date_column && !names.contains(&key.as_str()) {
                    names.push(key.as_str());
                }
            }
        }

        for name in names {
            let values = rows
                .iter()
                .map(|row| row.get(name).and_then(parse_cell))
                .collect();
            table = table.with_column(name, values);
        }

        table
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[Option<NaiveDate>] {
        &self.dates
    }

    /// Values of a column, or `None` if the column is not in the schema
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Earliest valid date in the table
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.dates.iter().flatten().min().copied()
    }

    /// Latest valid date in the table
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.iter().flatten().max().copied()
    }

    /// Index of the last row dated `date`
    pub fn row_for(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().rposition(|d| *d == Some(date))
    }

    /// Value at `row` in `column`, `None` when either is missing
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        self.column(column)
            .and_then(|values| values.get(row).copied())
            .flatten()
    }

    /// (date, value, hover) points of a column for a chart layer.
    ///
    /// Rows without a date or value are skipped; points are sorted by date.
    pub fn series(&self, column: &str) -> Vec<SeriesPoint> {
        let Some(values) = self.column(column) else {
            return Vec::new();
        };
        let mut points: Vec<SeriesPoint> = self
            .dates
            .iter()
            .zip(values)
            .filter_map(|(date, value)| {
                let (date, value) = (date.as_ref()?, value.as_ref()?);
                Some(SeriesPoint {
                    date: *date,
                    value: *value,
                    hover: format!("{} {}: {:.2}", date, column, value),
                })
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }
}
