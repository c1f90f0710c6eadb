//! Plain-text HUD: latest-day snapshot plus the insight table, and where to put it

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{HudError, Result};
use crate::metrics::insights::{build_insight_table, MetricCatalog, ValueFormat};
use crate::metrics::Table;
use crate::models::DailyMetric;

/// Display format of a daily column in the snapshot
fn snapshot_format(column: &str) -> ValueFormat {
    match DailyMetric::from_header(column) {
        Some(
            DailyMetric::SleepHours
            | DailyMetric::DeepSleepHours
            | DailyMetric::RemSleepHours
            | DailyMetric::LightSleepHours,
        ) => ValueFormat::Clock,
        Some(DailyMetric::Pace) => ValueFormat::Pace,
        Some(
            DailyMetric::Steps | DailyMetric::TotalCalories | DailyMetric::ActivityCalories,
        ) => ValueFormat::Integer,
        _ => ValueFormat::Number,
    }
}

/// Render the HUD text for `today`.
///
/// The snapshot shows the most recent row dated on or before `today`; rows
/// after `today` are ignored.
pub fn render_hud(table: &Table, catalog: &MetricCatalog, today: NaiveDate) -> String {
    let mut lines = vec![format!("Daily HUD - {}", today), "=".repeat(40)];

    let latest = table
        .dates()
        .iter()
        .flatten()
        .filter(|d| **d <= today)
        .max()
        .copied();

    match latest.and_then(|d| table.row_for(d).map(|row| (d, row))) {
        Some((date, row)) => {
            lines.push(format!("Latest day: {}", date));
            for column in table.column_names() {
                let value = table.value(row, column);
                if value.is_some() {
                    let text = snapshot_format(column).render(value);
                    lines.push(format!("  {:<24} {:>10}", column, text));
                }
            }
        }
        None => lines.push("Latest day: -".to_string()),
    }

    lines.push(String::new());
    lines.push("Insights".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&build_insight_table(table, catalog, today).to_string());
    out
}

/// Destination for a rendered HUD
pub trait NotesSink {
    /// Replace the content stored under `target` with `body`
    fn publish(&mut self, target: &str, body: &str) -> Result<()>;
}

/// Writes each target to `<dir>/<target>.txt`
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File a target is written to
    pub fn path_for(&self, target: &str) -> Result<PathBuf> {
        let name: String = target
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        if name.is_empty() {
            return Err(HudError::invalid_param("HUD target must not be empty"));
        }
        Ok(self.dir.join(format!("{}.txt", name)))
    }
}

impl NotesSink for FileSink {
    fn publish(&mut self, target: &str, body: &str) -> Result<()> {
        let path = self.path_for(target)?;
        crate::config::ensure_dir(&self.dir)?;

        let temp_path = path.with_extension("txt.tmp");
        fs::write(&temp_path, body)?;
        fs::rename(&temp_path, &path)?;

        info!(path = %path.display(), bytes = body.len(), "published HUD");
        Ok(())
    }
}
