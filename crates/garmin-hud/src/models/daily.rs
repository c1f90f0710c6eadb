//! Daily wellness record: one row per calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::table::{parse_cell, parse_date_value, Table};

/// Header of the date column
pub const DATE_HEADER: &str = "Date";
const DATE_ALIASES: [&str; 2] = ["Data", "date"];

/// Daily metrics for one date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub sleep_hours: Option<f64>,
    pub deep_sleep_hours: Option<f64>,
    pub rem_sleep_hours: Option<f64>,
    pub light_sleep_hours: Option<f64>,
    pub awake_min: Option<f64>,
    pub sleep_score: Option<f64>,
    pub body_battery_start: Option<f64>,
    pub body_battery_end: Option<f64>,
    pub body_battery_min: Option<f64>,
    pub body_battery_max: Option<f64>,
    pub body_battery_avg: Option<f64>,
    pub avg_stress: Option<f64>,
    pub steps: Option<f64>,
    pub total_calories: Option<f64>,
    pub activity_calories: Option<f64>,
    pub running_km: Option<f64>,
    pub pace_min_per_km: Option<f64>,
    pub meditation_min: Option<f64>,
}

/// Named metric columns of a [`DailyRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyMetric {
    SleepHours,
    DeepSleepHours,
    RemSleepHours,
    LightSleepHours,
    AwakeMin,
    SleepScore,
    BodyBatteryStart,
    BodyBatteryEnd,
    BodyBatteryMin,
    BodyBatteryMax,
    BodyBatteryAvg,
    AvgStress,
    Steps,
    TotalCalories,
    ActivityCalories,
    RunningKm,
    Pace,
    MeditationMin,
}

impl DailyMetric {
    pub const ALL: [DailyMetric; 18] = [
        DailyMetric::SleepHours,
        DailyMetric::DeepSleepHours,
        DailyMetric::RemSleepHours,
        DailyMetric::LightSleepHours,
        DailyMetric::AwakeMin,
        DailyMetric::SleepScore,
        DailyMetric::BodyBatteryStart,
        DailyMetric::BodyBatteryEnd,
        DailyMetric::BodyBatteryMin,
        DailyMetric::BodyBatteryMax,
        DailyMetric::BodyBatteryAvg,
        DailyMetric::AvgStress,
        DailyMetric::Steps,
        DailyMetric::TotalCalories,
        DailyMetric::ActivityCalories,
        DailyMetric::RunningKm,
        DailyMetric::Pace,
        DailyMetric::MeditationMin,
    ];

    /// Column header used in tables and catalogs
    pub fn header(&self) -> &'static str {
        match self {
            DailyMetric::SleepHours => "Sleep (h)",
            DailyMetric::DeepSleepHours => "Deep Sleep (h)",
            DailyMetric::RemSleepHours => "REM Sleep (h)",
            DailyMetric::LightSleepHours => "Light Sleep (h)",
            DailyMetric::AwakeMin => "Awake (min)",
            DailyMetric::SleepScore => "Sleep Score",
            DailyMetric::BodyBatteryStart => "Body Battery (start)",
            DailyMetric::BodyBatteryEnd => "Body Battery (end)",
            DailyMetric::BodyBatteryMin => "Body Battery (min)",
            DailyMetric::BodyBatteryMax => "Body Battery (max)",
            DailyMetric::BodyBatteryAvg => "Body Battery (avg)",
            DailyMetric::AvgStress => "Stress (avg)",
            DailyMetric::Steps => "Steps",
            DailyMetric::TotalCalories => "Calories (day)",
            DailyMetric::ActivityCalories => "Calories (activities)",
            DailyMetric::RunningKm => "Running (km)",
            DailyMetric::Pace => "Pace (min/km)",
            DailyMetric::MeditationMin => "Meditation (min)",
        }
    }

    /// Snake-case key used for storage columns and JSON output
    pub fn key(&self) -> &'static str {
        match self {
            DailyMetric::SleepHours => "sleep_hours",
            DailyMetric::DeepSleepHours => "deep_sleep_hours",
            DailyMetric::RemSleepHours => "rem_sleep_hours",
            DailyMetric::LightSleepHours => "light_sleep_hours",
            DailyMetric::AwakeMin => "awake_min",
            DailyMetric::SleepScore => "sleep_score",
            DailyMetric::BodyBatteryStart => "body_battery_start",
            DailyMetric::BodyBatteryEnd => "body_battery_end",
            DailyMetric::BodyBatteryMin => "body_battery_min",
            DailyMetric::BodyBatteryMax => "body_battery_max",
            DailyMetric::BodyBatteryAvg => "body_battery_avg",
            DailyMetric::AvgStress => "avg_stress",
            DailyMetric::Steps => "steps",
            DailyMetric::TotalCalories => "total_calories",
            DailyMetric::ActivityCalories => "activity_calories",
            DailyMetric::RunningKm => "running_km",
            DailyMetric::Pace => "pace_min_per_km",
            DailyMetric::MeditationMin => "meditation_min",
        }
    }

    /// Headers written by the Portuguese DailyHUD sheet
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            DailyMetric::SleepHours => &["Sono (h)"],
            DailyMetric::DeepSleepHours => &["Sono Deep (h)"],
            DailyMetric::RemSleepHours => &["Sono REM (h)"],
            DailyMetric::LightSleepHours => &["Sono Light (h)"],
            DailyMetric::AwakeMin => &["Sono Awake (min)"],
            DailyMetric::SleepScore => &["Sono (score)"],
            DailyMetric::BodyBatteryStart | DailyMetric::BodyBatteryEnd => &[],
            DailyMetric::BodyBatteryMin => &["Body Battery (mín)"],
            DailyMetric::BodyBatteryMax => &["Body Battery (máx)"],
            DailyMetric::BodyBatteryAvg => &["Body Battery (média)"],
            DailyMetric::AvgStress => &["Stress (média)"],
            DailyMetric::Steps => &["Passos"],
            DailyMetric::TotalCalories => &["Calorias (total dia)"],
            DailyMetric::ActivityCalories => &["Calorias (atividades)"],
            DailyMetric::RunningKm => &["Corrida (km)"],
            DailyMetric::Pace => &[],
            DailyMetric::MeditationMin => &["Duração (min)", "Breathwork (min)"],
        }
    }

    /// Look a metric up by canonical header, key or sheet alias
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|m| {
            m.header() == header || m.key() == header || m.aliases().contains(&header)
        })
    }

    pub fn get(&self, record: &DailyRecord) -> Option<f64> {
        match self {
            DailyMetric::SleepHours => record.sleep_hours,
            DailyMetric::DeepSleepHours => record.deep_sleep_hours,
            DailyMetric::RemSleepHours => record.rem_sleep_hours,
            DailyMetric::LightSleepHours => record.light_sleep_hours,
            DailyMetric::AwakeMin => record.awake_min,
            DailyMetric::SleepScore => record.sleep_score,
            DailyMetric::BodyBatteryStart => record.body_battery_start,
            DailyMetric::BodyBatteryEnd => record.body_battery_end,
            DailyMetric::BodyBatteryMin => record.body_battery_min,
            DailyMetric::BodyBatteryMax => record.body_battery_max,
            DailyMetric::BodyBatteryAvg => record.body_battery_avg,
            DailyMetric::AvgStress => record.avg_stress,
            DailyMetric::Steps => record.steps,
            DailyMetric::TotalCalories => record.total_calories,
            DailyMetric::ActivityCalories => record.activity_calories,
            DailyMetric::RunningKm => record.running_km,
            DailyMetric::Pace => record.pace_min_per_km,
            DailyMetric::MeditationMin => record.meditation_min,
        }
    }

    pub fn set(&self, record: &mut DailyRecord, value: Option<f64>) {
        let slot = match self {
            DailyMetric::SleepHours => &mut record.sleep_hours,
            DailyMetric::DeepSleepHours => &mut record.deep_sleep_hours,
            DailyMetric::RemSleepHours => &mut record.rem_sleep_hours,
            DailyMetric::LightSleepHours => &mut record.light_sleep_hours,
            DailyMetric::AwakeMin => &mut record.awake_min,
            DailyMetric::SleepScore => &mut record.sleep_score,
            DailyMetric::BodyBatteryStart => &mut record.body_battery_start,
            DailyMetric::BodyBatteryEnd => &mut record.body_battery_end,
            DailyMetric::BodyBatteryMin => &mut record.body_battery_min,
            DailyMetric::BodyBatteryMax => &mut record.body_battery_max,
            DailyMetric::BodyBatteryAvg => &mut record.body_battery_avg,
            DailyMetric::AvgStress => &mut record.avg_stress,
            DailyMetric::Steps => &mut record.steps,
            DailyMetric::TotalCalories => &mut record.total_calories,
            DailyMetric::ActivityCalories => &mut record.activity_calories,
            DailyMetric::RunningKm => &mut record.running_km,
            DailyMetric::Pace => &mut record.pace_min_per_km,
            DailyMetric::MeditationMin => &mut record.meditation_min,
        };
        *slot = value.filter(|v| v.is_finite());
    }
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Build a record from a loosely-typed sheet row.
    ///
    /// Returns `None` when the row has no parseable date. Unknown headers are
    /// ignored and unparseable cells are left empty.
    pub fn from_row(row: &Map<String, Value>) -> Option<Self> {
        let date = std::iter::once(DATE_HEADER)
            .chain(DATE_ALIASES)
            .find_map(|h| row.get(h).and_then(parse_date_value))?;

        let mut record = Self::new(date);
        for (header, value) in row {
            if let Some(metric) = DailyMetric::from_header(header) {
                metric.set(&mut record, parse_cell(value));
            }
        }
        Some(record)
    }

    /// Convert records into a table with one column per [`DailyMetric`]
    pub fn to_table(records: &[DailyRecord]) -> Table {
        let dates = records.iter().map(|r| Some(r.date)).collect();
        DailyMetric::ALL
            .into_iter()
            .fold(Table::new(dates), |table, metric| {
                let values = records.iter().map(|r| metric.get(r)).collect();
                table.with_column(metric.header(), values)
            })
    }
}
