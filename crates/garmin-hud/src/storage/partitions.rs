//! Partition key calculation for time-partitioned Parquet storage

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Entity types with their partition strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    /// Monthly partitions (YYYY-MM)
    DailyRecords,
    /// Weekly partitions (YYYY-Www)
    Activities,
}

impl EntityType {
    /// Get the directory name for this entity
    pub fn dir_name(&self) -> &'static str {
        match self {
            EntityType::DailyRecords => "daily",
            EntityType::Activities => "activities",
        }
    }

    /// Calculate partition key for a given date
    pub fn partition_key(&self, date: NaiveDate) -> String {
        match self {
            EntityType::DailyRecords => date.format("%Y-%m").to_string(),
            EntityType::Activities => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
        }
    }

    /// Get the glob pattern for querying all partitions
    pub fn glob_pattern(&self) -> String {
        format!("{}/*.parquet", self.dir_name())
    }

    /// Partition keys covering `from..=to`, in chronological order
    pub fn partition_keys(&self, from: NaiveDate, to: NaiveDate) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();

        // Step from the first day of the partition containing `from`
        let mut current = match self {
            EntityType::DailyRecords => from.with_day(1).unwrap_or(from),
            EntityType::Activities => {
                from - Duration::days(from.weekday().num_days_from_monday() as i64)
            }
        };

        while current <= to {
            let key = self.partition_key(current);
            if keys.last() != Some(&key) {
                keys.push(key);
            }
            let next = match self {
                EntityType::DailyRecords => current.checked_add_months(Months::new(1)),
                EntityType::Activities => current.checked_add_signed(Duration::days(7)),
            };
            match next {
                Some(next) => current = next,
                None => break,
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_partition_key() {
        // Sunday of week 50
        assert_eq!(EntityType::Activities.partition_key(date(2024, 12, 15)), "2024-W50");
        // ISO week-year differs from the calendar year
        assert_eq!(EntityType::Activities.partition_key(date(2024, 12, 30)), "2025-W01");
    }

    #[test]
    fn test_monthly_partition_key() {
        assert_eq!(EntityType::DailyRecords.partition_key(date(2024, 12, 15)), "2024-12");
    }

    #[test]
    fn test_glob_patterns() {
        assert_eq!(EntityType::Activities.glob_pattern(), "activities/*.parquet");
        assert_eq!(EntityType::DailyRecords.glob_pattern(), "daily/*.parquet");
    }

    #[test]
    fn test_monthly_keys_in_range() {
        let keys = EntityType::DailyRecords.partition_keys(date(2023, 11, 30), date(2024, 2, 1));
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_weekly_keys_cover_partial_weeks() {
        // Sunday to the following Monday spans two ISO weeks
        let keys = EntityType::Activities.partition_keys(date(2024, 12, 15), date(2024, 12, 16));
        assert_eq!(keys, vec!["2024-W50", "2024-W51"]);
    }

    #[test]
    fn test_empty_range() {
        assert!(EntityType::Activities
            .partition_keys(date(2024, 2, 1), date(2024, 1, 1))
            .is_empty());
    }
}
