//! Import sheet exports and raw activity JSON into the local store

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::open_store;
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::{HudError, Result};
use crate::metrics::daily_activity::running_totals_by_day;
use crate::models::{ActivityRecord, ActivitySummary, DailyRecord};
use crate::storage::ParquetStore;

/// Outcome of one import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows read from the file
    pub rows: usize,
    /// Rows stored (after de-duplication by key)
    pub stored: usize,
    /// Rows dropped because they had no usable key
    pub skipped: usize,
    /// Daily records whose running totals were refreshed
    pub days_updated: usize,
}

fn read_rows(path: &Path) -> Result<Vec<Map<String, Value>>> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Array(items) = value else {
        return Err(HudError::invalid_input(format!(
            "{} must contain a JSON array of rows",
            path.display()
        )));
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

/// Import daily rows; later rows for the same date win
pub fn import_daily(store: &ParquetStore, path: &Path) -> Result<ImportSummary> {
    let rows = read_rows(path)?;
    let records: Vec<DailyRecord> = rows.iter().filter_map(DailyRecord::from_row).collect();
    let skipped = rows.len() - records.len();
    if skipped > 0 {
        warn!(skipped, "daily rows without a valid date were dropped");
    }

    let stored = store.upsert_daily_records(&records)?;
    info!(rows = rows.len(), stored, "imported daily records");

    Ok(ImportSummary {
        rows: rows.len(),
        stored,
        skipped,
        days_updated: 0,
    })
}

/// Import activities from sheet rows, or from raw Garmin Connect JSON when `raw`.
///
/// Daily records on the affected dates get their running distance and pace
/// recomputed from every stored run of that day. Affected dates include the
/// previous date of an activity that moved.
pub fn import_activities(store: &ParquetStore, path: &Path, raw: bool) -> Result<ImportSummary> {
    let items = read_rows(path)?;
    let rows = items.len();
    let activities: Vec<ActivityRecord> = if raw {
        items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| {
                match serde_json::from_value::<ActivitySummary>(Value::Object(item)) {
                    Ok(summary) => Some(summary.to_record()),
                    Err(e) => {
                        warn!(row = i, error = %e, "skipping malformed raw activity");
                        None
                    }
                }
            })
            .collect()
    } else {
        items.iter().filter_map(ActivityRecord::from_row).collect()
    };

    let undated = activities
        .iter()
        .filter(|a| a.start_time_local.is_none())
        .count();
    let skipped = rows - activities.len() + undated;
    if skipped > 0 {
        warn!(skipped, "activity rows without an id or start time were dropped");
    }

    // Dates the incoming ids were stored under before this import
    let incoming: HashSet<i64> = activities
        .iter()
        .filter(|a| a.start_time_local.is_some())
        .map(|a| a.activity_id)
        .collect();
    let mut dates: BTreeSet<NaiveDate> = store
        .read_activities()?
        .iter()
        .filter(|a| incoming.contains(&a.activity_id))
        .filter_map(|a| a.start_time_local.map(|t| t.date()))
        .collect();

    let stored = store.upsert_activities(&activities)?;
    info!(rows, stored, "imported activities");

    dates.extend(
        activities
            .iter()
            .filter_map(|a| a.start_time_local.map(|t| t.date())),
    );
    let days_updated = refresh_running_totals(store, &dates)?;

    Ok(ImportSummary {
        rows,
        stored,
        skipped,
        days_updated,
    })
}

/// Recompute running km and pace of the given dates from stored activities
fn refresh_running_totals(store: &ParquetStore, dates: &BTreeSet<NaiveDate>) -> Result<usize> {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return Ok(0);
    };

    let activities = store.read_activities_between(*first, *last)?;
    let runs = running_totals_by_day(&activities);

    let mut existing = store.read_daily_records()?;
    existing.retain(|r| dates.contains(&r.date));

    let updated: Vec<DailyRecord> = dates
        .iter()
        .filter_map(|date| {
            let run = runs.iter().find(|r| r.date == *date);
            let current = existing.iter().find(|r| r.date == *date);
            match (run, current) {
                (None, None) => None,
                (run, current) => {
                    let mut record = current.cloned().unwrap_or_else(|| DailyRecord::new(*date));
                    record.running_km = Some(run.map_or(0.0, |r| r.distance_km));
                    record.pace_min_per_km = run.and_then(|r| r.pace_min_per_km);
                    Some(record)
                }
            }
        })
        .collect();

    if updated.is_empty() {
        return Ok(0);
    }
    store.upsert_daily_records(&updated)
}

fn print_summary(what: &str, summary: &ImportSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Table => {
            println!(
                "Imported {} {} ({} rows read, {} skipped)",
                summary.stored, what, summary.rows, summary.skipped
            );
            if summary.days_updated > 0 {
                println!("Updated running totals on {} days", summary.days_updated);
            }
            Ok(())
        }
    }
}

/// `import daily <file>`
pub fn daily(settings: &Settings, file: &Path, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let summary = import_daily(&store, file)?;
    print_summary("daily records", &summary, format)
}

/// `import activities <file> [--raw]`
pub fn activities(settings: &Settings, file: &Path, raw: bool, format: OutputFormat) -> Result<()> {
    let store = open_store(settings)?;
    let summary = import_activities(&store, file, raw)?;
    print_summary("activities", &summary, format)
}
