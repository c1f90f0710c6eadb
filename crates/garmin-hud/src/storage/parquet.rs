//! Parquet read/write utilities for time-partitioned storage
//!
//! Uses Arrow record batches for columnar storage. Every write rewrites a
//! whole partition file through a temp file and a rename.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use tracing::{debug, warn};

use crate::error::{HudError, Result};
use crate::models::{ActivityRecord, DailyMetric, DailyRecord};

use super::partitions::EntityType;

/// Parquet storage for daily records and activities
#[derive(Debug, Clone)]
pub struct ParquetStore {
    base_path: PathBuf,
}

/// Look up a column by name and downcast it to its Arrow array type
fn column<'a, T: 'static>(batch: &'a RecordBatch, name: &str) -> Result<&'a T> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<T>())
        .ok_or_else(|| HudError::storage(format!("Missing or mistyped column '{}'", name)))
}

fn date_to_days(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}

fn days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::default().checked_add_signed(chrono::Duration::days(days as i64))
}

impl ParquetStore {
    /// Create a new ParquetStore at the given base path
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the full path for a partition file
    pub fn partition_path(&self, entity: EntityType, partition_key: &str) -> PathBuf {
        self.base_path
            .join(entity.dir_name())
            .join(format!("{}.parquet", partition_key))
    }

    /// Ensure the directory for an entity exists
    fn ensure_dir(&self, entity: EntityType) -> Result<()> {
        let dir = self.base_path.join(entity.dir_name());
        fs::create_dir_all(&dir).map_err(|e| {
            HudError::storage(format!("Failed to create directory {:?}: {}", dir, e))
        })
    }

    /// All partition files of an entity, sorted by file name
    fn partition_files(&self, entity: EntityType) -> Result<Vec<PathBuf>> {
        let dir = self.base_path.join(entity.dir_name());
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut files: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|e| HudError::storage(format!("Failed to list {:?}: {}", dir, e)))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "parquet"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Write a record batch to a partition file atomically
    fn write_batch(&self, path: &Path, batch: &RecordBatch) -> Result<()> {
        let temp_path = path.with_extension("parquet.tmp");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| HudError::storage(format!("Failed to create directory: {}", e)))?;
        }

        let file = File::create(&temp_path)
            .map_err(|e| HudError::storage(format!("Failed to create temp file: {}", e)))?;

        let props = WriterProperties::builder()
            .set_compression(Compression::ZSTD(Default::default()))
            .build();

        let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
            .map_err(|e| HudError::storage(format!("Failed to create Parquet writer: {}", e)))?;

        writer
            .write(batch)
            .map_err(|e| HudError::storage(format!("Failed to write batch: {}", e)))?;

        writer
            .close()
            .map_err(|e| HudError::storage(format!("Failed to close writer: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| HudError::storage(format!("Failed to rename temp file: {}", e)))?;

        debug!(path = %path.display(), rows = batch.num_rows(), "wrote partition");
        Ok(())
    }

    /// Read all record batches from a partition file
    fn read_batches(&self, path: &Path) -> Result<Vec<RecordBatch>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(path)
            .map_err(|e| HudError::storage(format!("Failed to open file: {}", e)))?;

        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .map_err(|e| HudError::storage(format!("Failed to create reader: {}", e)))?
            .build()
            .map_err(|e| HudError::storage(format!("Failed to build reader: {}", e)))?;

        reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| HudError::storage(format!("Failed to read batches: {}", e)))
    }

    // =========================================================================
    // Daily records
    // =========================================================================

    /// Upsert daily records keyed by date; the last record for a date wins.
    ///
    /// Returns the number of distinct dates written.
    pub fn upsert_daily_records(&self, records: &[DailyRecord]) -> Result<usize> {
        self.ensure_dir(EntityType::DailyRecords)?;

        // Later records in the input overwrite earlier ones
        let mut partitions: HashMap<String, BTreeMap<NaiveDate, DailyRecord>> = HashMap::new();
        for record in records {
            let key = EntityType::DailyRecords.partition_key(record.date);
            partitions
                .entry(key)
                .or_default()
                .insert(record.date, record.clone());
        }

        let mut written = 0;
        for (key, new_records) in partitions {
            let path = self.partition_path(EntityType::DailyRecords, &key);

            let mut merged: BTreeMap<NaiveDate, DailyRecord> = self
                .read_daily_records_from_path(&path)?
                .into_iter()
                .map(|r| (r.date, r))
                .collect();
            written += new_records.len();
            merged.extend(new_records);

            let rows: Vec<&DailyRecord> = merged.values().collect();
            let batch = Self::daily_records_to_batch(&rows)?;
            self.write_batch(&path, &batch)?;
        }

        Ok(written)
    }

    /// All daily records, sorted by date
    pub fn read_daily_records(&self) -> Result<Vec<DailyRecord>> {
        let mut records = Vec::new();
        for path in self.partition_files(EntityType::DailyRecords)? {
            records.extend(self.read_daily_records_from_path(&path)?);
        }
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    fn read_daily_records_from_path(&self, path: &Path) -> Result<Vec<DailyRecord>> {
        let mut records = Vec::new();
        for batch in self.read_batches(path)? {
            records.extend(Self::batch_to_daily_records(&batch)?);
        }
        Ok(records)
    }

    fn daily_records_to_batch(records: &[&DailyRecord]) -> Result<RecordBatch> {
        let mut fields = vec![Field::new("date", DataType::Date32, false)];
        let dates: Date32Array = records.iter().map(|r| Some(date_to_days(r.date))).collect();
        let mut columns: Vec<ArrayRef> = vec![Arc::new(dates)];

        for metric in DailyMetric::ALL {
            fields.push(Field::new(metric.key(), DataType::Float64, true));
            let values: Float64Array = records.iter().map(|r| metric.get(r)).collect();
            columns.push(Arc::new(values));
        }

        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
            .map_err(|e| HudError::storage(format!("Failed to create record batch: {}", e)))
    }

    fn batch_to_daily_records(batch: &RecordBatch) -> Result<Vec<DailyRecord>> {
        let dates = column::<Date32Array>(batch, "date")?;
        let metrics = DailyMetric::ALL
            .into_iter()
            .map(|m| Ok((m, column::<Float64Array>(batch, m.key())?)))
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for i in 0..batch.num_rows() {
            let Some(date) = dates.is_valid(i).then(|| days_to_date(dates.value(i))).flatten()
            else {
                warn!(row = i, "skipping stored daily record without a date");
                continue;
            };
            let mut record = DailyRecord::new(date);
            for (metric, values) in &metrics {
                metric.set(&mut record, values.is_valid(i).then(|| values.value(i)));
            }
            records.push(record);
        }
        Ok(records)
    }

    // =========================================================================
    // Activities
    // =========================================================================

    /// Upsert activities keyed by activity id; the last record for an id wins.
    ///
    /// Activities without a start time cannot be partitioned and are skipped.
    /// Returns the number of distinct activities written.
    pub fn upsert_activities(&self, activities: &[ActivityRecord]) -> Result<usize> {
        self.ensure_dir(EntityType::Activities)?;

        // Last record per id wins, together with the week it belongs to
        let mut latest: HashMap<i64, (String, &ActivityRecord)> = HashMap::new();
        let mut skipped = 0;
        for activity in activities {
            match activity.start_time_local {
                Some(start) => {
                    let key = EntityType::Activities.partition_key(start.date());
                    latest.insert(activity.activity_id, (key, activity));
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, "activities without a start time were not stored");
        }

        let mut partitions: HashMap<&str, Vec<&ActivityRecord>> = HashMap::new();
        for (key, activity) in latest.values() {
            partitions.entry(key.as_str()).or_default().push(*activity);
        }

        // Every stored row of an incoming id outside its new week is removed,
        // including rows in weeks that also receive new activities
        for path in self.partition_files(EntityType::Activities)? {
            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            if partitions.contains_key(key.as_str()) {
                continue;
            }
            let mut existing = self.read_activities_from_path(&path)?;
            let before = existing.len();
            existing.retain(|a| !latest.contains_key(&a.activity_id));
            if existing.len() != before {
                debug!(partition = %key, removed = before - existing.len(), "moved activities out");
                let refs: Vec<&ActivityRecord> = existing.iter().collect();
                self.write_batch(&path, &Self::activities_to_batch(&refs)?)?;
            }
        }

        for (key, new_activities) in partitions {
            let path = self.partition_path(EntityType::Activities, key);

            let mut merged: BTreeMap<i64, ActivityRecord> = self
                .read_activities_from_path(&path)?
                .into_iter()
                .filter(|a| latest.get(&a.activity_id).map_or(true, |(k, _)| k == key))
                .map(|a| (a.activity_id, a))
                .collect();
            for activity in new_activities {
                merged.insert(activity.activity_id, activity.clone());
            }

            let refs: Vec<&ActivityRecord> = merged.values().collect();
            let batch = Self::activities_to_batch(&refs)?;
            self.write_batch(&path, &batch)?;
        }

        Ok(latest.len())
    }

    /// All activities, sorted by start time
    pub fn read_activities(&self) -> Result<Vec<ActivityRecord>> {
        let mut activities = Vec::new();
        for path in self.partition_files(EntityType::Activities)? {
            activities.extend(self.read_activities_from_path(&path)?);
        }
        sort_activities(&mut activities);
        Ok(activities)
    }

    /// Activities whose start date falls within `from..=to`, sorted by start time
    pub fn read_activities_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ActivityRecord>> {
        let mut activities = Vec::new();
        for key in EntityType::Activities.partition_keys(from, to) {
            let path = self.partition_path(EntityType::Activities, &key);
            activities.extend(
                self.read_activities_from_path(&path)?
                    .into_iter()
                    .filter(|a| {
                        a.start_time_local
                            .is_some_and(|t| t.date() >= from && t.date() <= to)
                    }),
            );
        }
        sort_activities(&mut activities);
        Ok(activities)
    }

    fn read_activities_from_path(&self, path: &Path) -> Result<Vec<ActivityRecord>> {
        let mut activities = Vec::new();
        for batch in self.read_batches(path)? {
            activities.extend(Self::batch_to_activities(&batch)?);
        }
        Ok(activities)
    }

    fn activities_to_batch(activities: &[&ActivityRecord]) -> Result<RecordBatch> {
        let activity_id: Int64Array = activities.iter().map(|a| Some(a.activity_id)).collect();
        let start_time_local: TimestampMicrosecondArray = activities
            .iter()
            .map(|a| a.start_time_local.map(|t| t.and_utc().timestamp_micros()))
            .collect();
        let activity_type: StringArray = activities.iter().map(|a| a.activity_type.as_deref()).collect();
        let activity_name: StringArray = activities.iter().map(|a| a.activity_name.as_deref()).collect();
        let duration_min: Float64Array = activities.iter().map(|a| a.duration_min).collect();
        let distance_km: Float64Array = activities.iter().map(|a| a.distance_km).collect();
        let calories: Float64Array = activities.iter().map(|a| a.calories).collect();
        let avg_hr: Float64Array = activities.iter().map(|a| a.avg_hr).collect();
        let max_hr: Float64Array = activities.iter().map(|a| a.max_hr).collect();
        let vo2max: Float64Array = activities.iter().map(|a| a.vo2max).collect();
        let cadence: Float64Array = activities.iter().map(|a| a.cadence).collect();
        let pace: StringArray = activities.iter().map(|a| a.pace.as_deref()).collect();

        let schema = Arc::new(Schema::new(vec![
            Field::new("activity_id", DataType::Int64, false),
            Field::new("start_time_local", DataType::Timestamp(TimeUnit::Microsecond, None), true),
            Field::new("activity_type", DataType::Utf8, true),
            Field::new("activity_name", DataType::Utf8, true),
            Field::new("duration_min", DataType::Float64, true),
            Field::new("distance_km", DataType::Float64, true),
            Field::new("calories", DataType::Float64, true),
            Field::new("avg_hr", DataType::Float64, true),
            Field::new("max_hr", DataType::Float64, true),
            Field::new("vo2max", DataType::Float64, true),
            Field::new("cadence", DataType::Float64, true),
            Field::new("pace", DataType::Utf8, true),
        ]));

        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(activity_id),
                Arc::new(start_time_local),
                Arc::new(activity_type),
                Arc::new(activity_name),
                Arc::new(duration_min),
                Arc::new(distance_km),
                Arc::new(calories),
                Arc::new(avg_hr),
                Arc::new(max_hr),
                Arc::new(vo2max),
                Arc::new(cadence),
                Arc::new(pace),
            ],
        )
        .map_err(|e| HudError::storage(format!("Failed to create record batch: {}", e)))
    }

    fn batch_to_activities(batch: &RecordBatch) -> Result<Vec<ActivityRecord>> {
        let activity_id = column::<Int64Array>(batch, "activity_id")?;
        let start_time_local = column::<TimestampMicrosecondArray>(batch, "start_time_local")?;
        let activity_type = column::<StringArray>(batch, "activity_type")?;
        let activity_name = column::<StringArray>(batch, "activity_name")?;
        let duration_min = column::<Float64Array>(batch, "duration_min")?;
        let distance_km = column::<Float64Array>(batch, "distance_km")?;
        let calories = column::<Float64Array>(batch, "calories")?;
        let avg_hr = column::<Float64Array>(batch, "avg_hr")?;
        let max_hr = column::<Float64Array>(batch, "max_hr")?;
        let vo2max = column::<Float64Array>(batch, "vo2max")?;
        let cadence = column::<Float64Array>(batch, "cadence")?;
        let pace = column::<StringArray>(batch, "pace")?;

        let float = |array: &Float64Array, i: usize| array.is_valid(i).then(|| array.value(i));
        let text = |array: &StringArray, i: usize| array.is_valid(i).then(|| array.value(i).to_string());

        let activities = (0..batch.num_rows())
            .map(|i| ActivityRecord {
                activity_id: activity_id.value(i),
                start_time_local: start_time_local
                    .is_valid(i)
                    .then(|| micros_to_datetime(start_time_local.value(i)))
                    .flatten(),
                activity_type: text(activity_type, i),
                activity_name: text(activity_name, i),
                duration_min: float(duration_min, i),
                distance_km: float(distance_km, i),
                calories: float(calories, i),
                avg_hr: float(avg_hr, i),
                max_hr: float(max_hr, i),
                vo2max: float(vo2max, i),
                cadence: float(cadence, i),
                pace: text(pace, i),
            })
            .collect();

        Ok(activities)
    }
}

fn micros_to_datetime(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|t| t.naive_utc())
}

fn sort_activities(activities: &mut [ActivityRecord]) {
    activities.sort_by(|a, b| {
        a.start_time_local
            .cmp(&b.start_time_local)
            .then(a.activity_id.cmp(&b.activity_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(id: i64, when: &str, km: f64, name: &str) -> ActivityRecord {
        ActivityRecord {
            activity_id: id,
            start_time_local: NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M:%S").ok(),
            activity_type: Some("running".to_string()),
            activity_name: Some(name.to_string()),
            distance_km: Some(km),
            duration_min: Some(km * 6.0),
            pace: Some("6:00".to_string()),
            ..ActivityRecord::default()
        }
    }

    #[test]
    fn test_daily_records_roundtrip_sorted() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        let mut feb = DailyRecord::new(day(2024, 2, 1));
        feb.steps = Some(9000.0);
        let mut jan = DailyRecord::new(day(2024, 1, 31));
        jan.sleep_hours = Some(7.5);
        jan.pace_min_per_km = Some(5.5);

        assert_eq!(store.upsert_daily_records(&[feb.clone(), jan.clone()]).unwrap(), 2);

        let read = store.read_daily_records().unwrap();
        assert_eq!(read, vec![jan, feb]);
        assert!(temp.path().join("daily/2024-01.parquet").exists());
        assert!(temp.path().join("daily/2024-02.parquet").exists());
    }

    #[test]
    fn test_daily_upsert_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        let mut first = DailyRecord::new(day(2024, 1, 3));
        first.steps = Some(1000.0);
        first.sleep_hours = Some(6.0);
        store.upsert_daily_records(&[first]).unwrap();

        let mut second = DailyRecord::new(day(2024, 1, 3));
        second.steps = Some(2000.0);
        let mut third = DailyRecord::new(day(2024, 1, 3));
        third.steps = Some(3000.0);
        assert_eq!(store.upsert_daily_records(&[second, third]).unwrap(), 1);

        let read = store.read_daily_records().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].steps, Some(3000.0));
        assert_eq!(read[0].sleep_hours, None);
    }

    #[test]
    fn test_empty_store_reads_nothing() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path().join("missing"));
        assert!(store.read_daily_records().unwrap().is_empty());
        assert!(store.read_activities().unwrap().is_empty());
    }

    #[test]
    fn test_activities_upsert_by_id() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        store
            .upsert_activities(&[
                run(1, "2024-01-03 07:00:00", 5.0, "Easy"),
                run(2, "2024-01-02 07:00:00", 8.0, "Tempo"),
            ])
            .unwrap();
        store
            .upsert_activities(&[run(1, "2024-01-03 07:00:00", 6.0, "Easy+")])
            .unwrap();

        let read = store.read_activities().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].activity_id, 2);
        assert_eq!(read[1].distance_km, Some(6.0));
        assert_eq!(read[1].display_name(), "Easy+");
        assert_eq!(read[1].pace.as_deref(), Some("6:00"));
        assert_eq!(
            read[1].start_time_local.unwrap().format("%H:%M").to_string(),
            "07:00"
        );
    }

    #[test]
    fn test_activity_moving_week_leaves_old_partition() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        store
            .upsert_activities(&[run(1, "2024-01-03 07:00:00", 5.0, "Run")])
            .unwrap();
        store
            .upsert_activities(&[run(1, "2024-01-10 07:00:00", 5.0, "Run")])
            .unwrap();

        let read = store.read_activities().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].start_time_local.unwrap().date(), day(2024, 1, 10));
    }

    #[test]
    fn test_activity_moving_into_written_week_is_not_duplicated() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        store
            .upsert_activities(&[run(1, "2024-01-03 07:00:00", 5.0, "Run")])
            .unwrap();
        // Same batch moves id 1 out of W01 and adds id 2 to W01
        let written = store
            .upsert_activities(&[
                run(1, "2024-01-10 07:00:00", 5.0, "Run"),
                run(2, "2024-01-04 07:00:00", 3.0, "Short"),
            ])
            .unwrap();
        assert_eq!(written, 2);

        let ids: Vec<i64> = store
            .read_activities()
            .unwrap()
            .iter()
            .map(|a| a.activity_id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_duplicate_id_in_batch_keeps_last() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        store
            .upsert_activities(&[
                run(1, "2024-01-03 07:00:00", 5.0, "First"),
                run(1, "2024-01-10 07:00:00", 7.0, "Second"),
            ])
            .unwrap();

        let read = store.read_activities().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].display_name(), "Second");
        assert_eq!(read[0].start_time_local.unwrap().date(), day(2024, 1, 10));
    }

    #[test]
    fn test_activities_without_start_are_skipped() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());
        let undated = ActivityRecord {
            activity_id: 9,
            ..ActivityRecord::default()
        };
        assert_eq!(store.upsert_activities(&[undated]).unwrap(), 0);
        assert!(store.read_activities().unwrap().is_empty());
    }

    #[test]
    fn test_read_activities_between() {
        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());
        store
            .upsert_activities(&[
                run(1, "2023-12-31 07:00:00", 5.0, "a"),
                run(2, "2024-01-01 07:00:00", 5.0, "b"),
                run(3, "2024-01-08 07:00:00", 5.0, "c"),
                run(4, "2024-01-20 07:00:00", 5.0, "d"),
            ])
            .unwrap();

        let ids: Vec<i64> = store
            .read_activities_between(day(2024, 1, 1), day(2024, 1, 8))
            .unwrap()
            .iter()
            .map(|a| a.activity_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_duckdb_glob_query() {
        use duckdb::Connection;

        let temp = TempDir::new().unwrap();
        let store = ParquetStore::new(temp.path());

        // Two different ISO weeks
        store
            .upsert_activities(&[
                run(1, "2023-12-19 16:00:00", 10.0, "Week 51 Run"),
                run(2, "2023-12-26 16:00:00", 12.0, "Week 52 Run"),
            ])
            .unwrap();

        let conn = Connection::open_in_memory().unwrap();
        let glob_pattern = temp
            .path()
            .join(EntityType::Activities.glob_pattern())
            .display()
            .to_string();

        let mut stmt = conn
            .prepare(&format!(
                "SELECT activity_id, activity_name FROM '{}' ORDER BY activity_id",
                glob_pattern
            ))
            .unwrap();

        let results: Vec<(i64, String)> = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], (1, "Week 51 Run".to_string()));
        assert_eq!(results[1], (2, "Week 52 Run".to_string()));
    }
}
