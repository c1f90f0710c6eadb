//! Per-day, per-type roll-up of individual activity sessions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::units::{minutes_to_pace_string, pace_from_totals};
use crate::models::ActivityRecord;

/// Activity type key used for runs
pub const RUNNING: &str = "running";

/// One row per (date, activity type)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyActivityAggregate {
    pub date: NaiveDate,
    pub activity_type: String,
    pub sessions: usize,
    pub distance_km: f64,
    pub duration_min: f64,
    pub calories: Option<f64>,
    pub avg_hr: Option<f64>,
    pub vo2max: Option<f64>,
    /// Summed duration over summed distance; `None` without distance
    pub pace_min_per_km: Option<f64>,
}

impl DailyActivityAggregate {
    /// Pace formatted as "M:SS"
    pub fn pace_string(&self) -> String {
        minutes_to_pace_string(self.pace_min_per_km)
    }
}

#[derive(Default)]
struct Accumulator {
    sessions: usize,
    distance_km: f64,
    duration_min: f64,
    calories: Option<f64>,
    hr: Mean,
    vo2max: Mean,
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl Accumulator {
    fn push(&mut self, activity: &ActivityRecord) {
        self.sessions += 1;
        self.distance_km += activity.distance_km.unwrap_or(0.0);
        self.duration_min += activity.duration_min.unwrap_or(0.0);
        if let Some(cal) = activity.calories {
            self.calories = Some(self.calories.unwrap_or(0.0) + cal);
        }
        self.hr.push(activity.avg_hr);
        self.vo2max.push(activity.vo2max);
    }

    fn finish(self, date: NaiveDate, activity_type: String) -> DailyActivityAggregate {
        DailyActivityAggregate {
            date,
            activity_type,
            sessions: self.sessions,
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            calories: self.calories,
            avg_hr: self.hr.value(),
            vo2max: self.vo2max.value(),
            pace_min_per_km: pace_from_totals(self.duration_min, self.distance_km),
        }
    }
}

/// Group activities by (calendar date, type) and aggregate each group.
///
/// Rows without a start time or type are dropped. Distance and duration are
/// summed with missing values counted as zero; calories are summed skipping
/// missing values (an all-missing group stays `None`); heart rate and VO2max
/// are averaged skipping missing values. Output is sorted by date, then type.
pub fn aggregate_by_day_and_type(activities: &[ActivityRecord]) -> Vec<DailyActivityAggregate> {
    let mut groups: BTreeMap<(NaiveDate, String), Accumulator> = BTreeMap::new();

    for activity in activities {
        let Some(start) = activity.start_time_local else {
            continue;
        };
        let Some(kind) = activity.activity_type.as_deref().map(str::trim) else {
            continue;
        };
        if kind.is_empty() {
            continue;
        }
        groups
            .entry((start.date(), kind.to_string()))
            .or_default()
            .push(activity);
    }

    groups
        .into_iter()
        .map(|((date, kind), acc)| acc.finish(date, kind))
        .collect()
}

/// Keep only aggregates of one activity type
pub fn filter_type(
    aggregates: Vec<DailyActivityAggregate>,
    activity_type: &str,
) -> Vec<DailyActivityAggregate> {
    aggregates
        .into_iter()
        .filter(|a| a.activity_type == activity_type)
        .collect()
}

/// Running distance and ratio-of-sums pace per day
pub fn running_totals_by_day(activities: &[ActivityRecord]) -> Vec<DailyActivityAggregate> {
    filter_type(aggregate_by_day_and_type(activities), RUNNING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn activity(id: i64, when: &str, kind: &str, km: Option<f64>, min: Option<f64>) -> ActivityRecord {
        ActivityRecord {
            activity_id: id,
            start_time_local: NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M:%S").ok(),
            activity_type: Some(kind.to_string()),
            distance_km: km,
            duration_min: min,
            ..ActivityRecord::default()
        }
    }

    #[test]
    fn test_ratio_of_sums_pace_differs_from_mean_of_paces() {
        let acts = vec![
            activity(1, "2024-01-03 07:00:00", "running", Some(2.0), Some(10.0)),
            activity(2, "2024-01-03 18:30:00", "running", Some(8.0), Some(50.0)),
        ];
        let out = aggregate_by_day_and_type(&acts);
        assert_eq!(out.len(), 1);

        let pace = out[0].pace_min_per_km.unwrap();
        assert!((pace - 6.0).abs() < 1e-12);
        let mean_of_paces: f64 = (10.0 / 2.0 + 50.0 / 8.0) / 2.0;
        assert!((mean_of_paces - 5.625).abs() < 1e-12);
        assert!((pace - mean_of_paces).abs() > 0.1);
        assert_eq!(out[0].pace_string(), "6:00");
    }

    #[test]
    fn test_equal_distances_pace() {
        let acts = vec![
            activity(1, "2024-01-03 07:00:00", "running", Some(5.0), Some(25.0)),
            activity(2, "2024-01-03 18:00:00", "running", Some(5.0), Some(30.0)),
        ];
        let out = aggregate_by_day_and_type(&acts);
        assert_eq!(out[0].pace_min_per_km, Some(5.5));
        assert_eq!(out[0].distance_km, 10.0);
        assert_eq!(out[0].duration_min, 55.0);
        assert_eq!(out[0].sessions, 2);
    }

    #[test]
    fn test_groups_by_date_and_type_sorted() {
        let acts = vec![
            activity(1, "2024-01-04 07:00:00", "running", Some(5.0), Some(30.0)),
            activity(2, "2024-01-03 07:00:00", "cycling", Some(20.0), Some(60.0)),
            activity(3, "2024-01-03 19:00:00", "running", Some(3.0), Some(18.0)),
        ];
        let out = aggregate_by_day_and_type(&acts);
        let keys: Vec<(String, &str)> = out
            .iter()
            .map(|a| (a.date.to_string(), a.activity_type.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-01-03".to_string(), "cycling"),
                ("2024-01-03".to_string(), "running"),
                ("2024-01-04".to_string(), "running"),
            ]
        );
    }

    #[test]
    fn test_missing_values() {
        let mut a = activity(1, "2024-01-03 07:00:00", "yoga", None, Some(40.0));
        a.avg_hr = Some(100.0);
        let b = activity(2, "2024-01-03 08:00:00", "yoga", None, None);

        let out = aggregate_by_day_and_type(&[a, b]);
        assert_eq!(out[0].distance_km, 0.0);
        assert_eq!(out[0].duration_min, 40.0);
        assert_eq!(out[0].calories, None);
        assert_eq!(out[0].avg_hr, Some(100.0));
        assert_eq!(out[0].vo2max, None);
        assert_eq!(out[0].pace_min_per_km, None);
        assert_eq!(out[0].pace_string(), "-");
    }

    #[test]
    fn test_calories_skip_missing() {
        let mut a = activity(1, "2024-01-03 07:00:00", "running", Some(5.0), Some(30.0));
        a.calories = Some(300.0);
        let b = activity(2, "2024-01-03 08:00:00", "running", Some(5.0), Some(30.0));
        let out = aggregate_by_day_and_type(&[a, b]);
        assert_eq!(out[0].calories, Some(300.0));
    }

    #[test]
    fn test_drops_rows_without_date_or_type() {
        let mut no_type = activity(1, "2024-01-03 07:00:00", "running", Some(5.0), Some(30.0));
        no_type.activity_type = None;
        let blank_type = activity(2, "2024-01-03 07:00:00", "  ", Some(5.0), Some(30.0));
        let no_date = activity(3, "garbage", "running", Some(5.0), Some(30.0));
        assert!(aggregate_by_day_and_type(&[no_type, blank_type, no_date]).is_empty());
    }

    #[test]
    fn test_running_totals_by_day() {
        let acts = vec![
            activity(1, "2024-01-03 07:00:00", "running", Some(5.0), Some(30.0)),
            activity(2, "2024-01-03 08:00:00", "cycling", Some(30.0), Some(60.0)),
        ];
        let runs = running_totals_by_day(&acts);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].distance_km, 5.0);
        assert_eq!(runs[0].pace_min_per_km, Some(6.0));
    }
}
