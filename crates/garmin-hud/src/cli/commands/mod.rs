//! Subcommand implementations

pub mod activities;
pub mod correlate;
pub mod hud;
pub mod import;
pub mod insights;
pub mod series;

use crate::config::Settings;
use crate::error::{HudError, Result};
use crate::metrics::Table;
use crate::models::{DailyMetric, DailyRecord};
use crate::storage::{self, ParquetStore};

/// Open the store configured in `settings`
pub(crate) fn open_store(settings: &Settings) -> Result<ParquetStore> {
    storage::open(settings.data_dir.clone())
}

/// Daily records as a table; an empty store is an error
pub(crate) fn daily_table(store: &ParquetStore) -> Result<Table> {
    let records = store.read_daily_records()?;
    if records.is_empty() {
        return Err(HudError::NotFound("No daily records stored".to_string()));
    }
    Ok(DailyRecord::to_table(&records))
}

/// Map a user-supplied column name (header, key or sheet alias) to the table header
pub(crate) fn resolve_column(name: &str) -> String {
    DailyMetric::from_header(name)
        .map(|m| m.header().to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

/// Truncate a string to `max_len` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
