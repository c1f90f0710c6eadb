//! Pearson correlation matrix and least-squares trend line over complete cases.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::table::Table;

/// Why a correlation or trend line could not be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsufficientData {
    #[error("need at least 2 columns, got {0}")]
    TooFewColumns(usize),

    #[error("no row has a value in every selected column")]
    NoCompleteRows,

    #[error("trend line needs at least 2 rows with distinct x values")]
    DegenerateTrend,
}

/// Symmetric correlation matrix; `None` where a column has zero variance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
    /// Number of complete-case rows the matrix was computed from
    pub rows_used: usize,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied().flatten()
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.columns.iter().map(|c| c.len()).max().unwrap_or(0).max(6);
        write!(f, "{:<width$}", "", width = width)?;
        for name in &self.columns {
            write!(f, " {:>width$}", name, width = width)?;
        }
        writeln!(f)?;
        for (name, row) in self.columns.iter().zip(&self.values) {
            write!(f, "{:<width$}", name, width = width)?;
            for value in row {
                match value {
                    Some(v) => write!(f, " {:>width$.2}", v, width = width)?,
                    None => write!(f, " {:>width$}", "-", width = width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Ordinary least-squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub points: usize,
}

impl TrendLine {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Values of `columns` restricted to rows where every one of them is present.
///
/// A column missing from the schema has no values, so it empties the result.
fn complete_cases(table: &Table, columns: &[&str]) -> Vec<Vec<f64>> {
    let mut out = vec![Vec::new(); columns.len()];
    let Some(selected) = columns
        .iter()
        .map(|name| table.column(name))
        .collect::<Option<Vec<_>>>()
    else {
        return out;
    };

    for row in 0..table.len() {
        let values: Option<Vec<f64>> = selected.iter().map(|col| col[row]).collect();
        if let Some(values) = values {
            for (dst, v) in out.iter_mut().zip(values) {
                dst.push(v);
            }
        }
    }
    out
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let (mx, my) = (mean(x), mean(y));
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx <= 0.0 || vy <= 0.0 {
        return None;
    }
    Some((cov / (vx * vy).sqrt()).clamp(-1.0, 1.0))
}

/// Pearson correlation between every pair of `columns`.
///
/// Only rows with a value in every selected column are used. The diagonal is
/// exactly 1.0 and the matrix is symmetric.
pub fn correlation_matrix(
    table: &Table,
    columns: &[&str],
) -> Result<CorrelationMatrix, InsufficientData> {
    if columns.len() < 2 {
        return Err(InsufficientData::TooFewColumns(columns.len()));
    }

    let data = complete_cases(table, columns);
    let rows_used = data.first().map_or(0, Vec::len);
    if rows_used == 0 {
        return Err(InsufficientData::NoCompleteRows);
    }

    let n = columns.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let r = pearson(&data[i], &data[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        values,
        rows_used,
    })
}

/// Least-squares trend line of `y` against `x` over their complete cases
pub fn fit_trend_line(table: &Table, x: &str, y: &str) -> Result<TrendLine, InsufficientData> {
    let data = complete_cases(table, &[x, y]);
    let (xs, ys) = (&data[0], &data[1]);
    if xs.is_empty() {
        return Err(InsufficientData::NoCompleteRows);
    }
    if xs.len() < 2 {
        return Err(InsufficientData::DegenerateTrend);
    }

    let (mx, my) = (mean(xs), mean(ys));
    let sxx: f64 = xs.iter().map(|a| (a - mx) * (a - mx)).sum();
    if sxx <= 0.0 {
        return Err(InsufficientData::DegenerateTrend);
    }
    let sxy: f64 = xs.iter().zip(ys).map(|(a, b)| (a - mx) * (b - my)).sum();

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mx, my);

    let sst: f64 = ys.iter().map(|b| (b - my) * (b - my)).sum();
    let sse: f64 = xs
        .iter()
        .zip(ys)
        .map(|(a, b)| {
            let diff = b - slope.mul_add(*a, intercept);
            diff * diff
        })
        .sum();
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };

    Ok(TrendLine {
        slope,
        intercept,
        r_squared,
        points: xs.len(),
    })
}
