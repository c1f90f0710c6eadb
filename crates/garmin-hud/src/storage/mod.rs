//! Local row store for daily records and activities
//!
//! Time-partitioned Parquet files; each write replaces a partition atomically
//! (temp file + rename), so readers always see a consistent file.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/garmin-hud/
//! ├── daily/
//! │   ├── 2024-12.parquet         # Monthly partitions, one row per date
//! │   └── ...
//! └── activities/
//!     ├── 2024-W48.parquet        # ISO-weekly partitions, one row per activity id
//!     └── ...
//! ```
//!
//! External tools can query the files directly, e.g. with DuckDB:
//!
//! ```sql
//! SELECT * FROM 'activities/*.parquet' WHERE start_time_local > '2024-12-01';
//! ```

mod parquet;
mod partitions;

pub use parquet::ParquetStore;
pub use partitions::EntityType;

use std::path::PathBuf;

use tracing::debug;

use crate::error::{HudError, Result};

/// Open (creating if needed) a store rooted at `base_path`
pub fn open(base_path: PathBuf) -> Result<ParquetStore> {
    std::fs::create_dir_all(&base_path).map_err(|e| {
        HudError::storage(format!("Failed to create storage directory: {}", e))
    })?;
    debug!(path = %base_path.display(), "opened store");
    Ok(ParquetStore::new(base_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_open() {
        let temp = TempDir::new().unwrap();
        let store = open(temp.path().join("nested/store")).unwrap();
        assert!(store.base_path().exists());
    }
}
