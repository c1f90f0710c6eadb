//! `activities`: per-day, per-type activity totals

use chrono::NaiveDate;

use super::{open_store, truncate};
use crate::cli::{print_json, OutputFormat};
use crate::config::Settings;
use crate::error::{HudError, Result};
use crate::metrics::daily_activity::{aggregate_by_day_and_type, filter_type, DailyActivityAggregate};
use crate::models::ActivityRecord;

/// Keep activities within the optional date bounds (inclusive)
fn within(activities: Vec<ActivityRecord>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<ActivityRecord> {
    activities
        .into_iter()
        .filter(|a| match a.start_time_local.map(|t| t.date()) {
            Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
            None => from.is_none() && to.is_none(),
        })
        .collect()
}

/// Daily aggregates for the given filters
pub fn daily_aggregates(
    activities: Vec<ActivityRecord>,
    activity_type: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<DailyActivityAggregate> {
    let aggregates = aggregate_by_day_and_type(&within(activities, from, to));
    match activity_type {
        Some(kind) => filter_type(aggregates, kind),
        None => aggregates,
    }
}

fn print_table(aggregates: &[DailyActivityAggregate]) {
    println!(
        "{:<12} {:<15} {:>4} {:>10} {:>10} {:>8} {:>6} {:>8}",
        "Date", "Type", "N", "Distance", "Duration", "Pace", "HR", "Calories"
    );
    println!("{}", "-".repeat(80));

    for agg in aggregates {
        let hr = agg
            .avg_hr
            .map(|h| format!("{:.0}", h))
            .unwrap_or_else(|| "-".to_string());
        let calories = agg
            .calories
            .map(|c| format!("{:.0}", c))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<12} {:<15} {:>4} {:>7.2} km {:>6.1} min {:>8} {:>6} {:>8}",
            agg.date,
            truncate(&agg.activity_type, 15),
            agg.sessions,
            agg.distance_km,
            agg.duration_min,
            agg.pace_string(),
            hr,
            calories
        );
    }

    println!("\nShowing {} day/type groups", aggregates.len());
}

pub fn run(
    settings: &Settings,
    activity_type: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    if let (Some(f), Some(t)) = (from, to) {
        if f > t {
            return Err(HudError::invalid_param(format!(
                "--from {} is after --to {}",
                f, t
            )));
        }
    }

    let store = open_store(settings)?;
    let activities = match (from, to) {
        (Some(f), Some(t)) => store.read_activities_between(f, t)?,
        _ => store.read_activities()?,
    };
    let aggregates = daily_aggregates(activities, activity_type.as_deref(), from, to);

    match format {
        OutputFormat::Json => print_json(&aggregates),
        OutputFormat::Table if aggregates.is_empty() => {
            println!("No activities found.");
            Ok(())
        }
        OutputFormat::Table => {
            print_table(&aggregates);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn activity(id: i64, when: &str, kind: &str, km: f64) -> ActivityRecord {
        ActivityRecord {
            activity_id: id,
            start_time_local: NaiveDateTime::parse_from_str(when, "%Y-%m-%d %H:%M:%S").ok(),
            activity_type: Some(kind.to_string()),
            distance_km: Some(km),
            duration_min: Some(km * 5.0),
            ..ActivityRecord::default()
        }
    }

    #[test]
    fn test_daily_aggregates_filters() {
        let acts = vec![
            activity(1, "2024-01-01 07:00:00", "running", 5.0),
            activity(2, "2024-01-02 07:00:00", "running", 6.0),
            activity(3, "2024-01-02 09:00:00", "cycling", 20.0),
            activity(4, "2024-01-05 07:00:00", "running", 7.0),
        ];
        let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d);

        let all = daily_aggregates(acts.clone(), None, None, None);
        assert_eq!(all.len(), 4);

        let runs = daily_aggregates(acts.clone(), Some("running"), jan(2), jan(5));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].distance_km, 6.0);
        assert_eq!(runs[1].pace_min_per_km, Some(5.0));

        let open_end = daily_aggregates(acts, None, jan(2), None);
        assert_eq!(open_end.len(), 3);
    }
}
