//! Activity data models
//!
//! [`ActivitySummary`] mirrors an entry of the Garmin Connect activity list;
//! [`ActivityRecord`] is the normalised row the rest of the crate works with.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::metrics::daily_activity::RUNNING;
use crate::metrics::table::{parse_cell, parse_datetime};
use crate::metrics::units::{minutes_to_pace_string, pace_from_totals, NO_VALUE};

/// Activity summary as exported from Garmin Connect
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Unique activity identifier
    pub activity_id: i64,

    #[serde(default)]
    pub activity_name: Option<String>,

    /// Start time in local timezone (ISO 8601 or "YYYY-MM-DD HH:MM:SS")
    #[serde(default)]
    pub start_time_local: Option<String>,

    #[serde(default)]
    pub activity_type: Option<ActivityType>,

    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,

    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub calories: Option<f64>,

    /// Average heart rate in bpm
    #[serde(default, rename = "averageHR")]
    pub average_hr: Option<f64>,

    /// Maximum heart rate in bpm
    #[serde(default, rename = "maxHR")]
    pub max_hr: Option<f64>,

    #[serde(default, rename = "vO2MaxValue")]
    pub vo2_max_value: Option<f64>,

    /// Average running cadence in steps per minute
    #[serde(default)]
    pub average_running_cadence_in_steps_per_minute: Option<f64>,
}

/// Activity type information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    /// Type key (e.g., "running", "cycling", "walking")
    pub type_key: String,

    #[serde(default)]
    pub type_id: Option<u64>,
}

impl ActivitySummary {
    /// Get the activity type key
    pub fn type_key(&self) -> String {
        self.activity_type
            .as_ref()
            .map(|t| t.type_key.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Get distance in kilometers
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.map(|d| d / 1000.0)
    }

    /// Get duration in minutes
    pub fn duration_min(&self) -> Option<f64> {
        self.duration.map(|s| s / 60.0)
    }

    /// Normalise into an [`ActivityRecord`].
    ///
    /// Only runs with positive distance and duration carry a pace string.
    pub fn to_record(&self) -> ActivityRecord {
        let activity_type = self.type_key();
        let distance_km = self.distance_km();
        let duration_min = self.duration_min();

        let pace = if activity_type == RUNNING {
            match (duration_min, distance_km) {
                (Some(min), Some(km)) if min > 0.0 => {
                    pace_from_totals(min, km).map(|p| minutes_to_pace_string(Some(p)))
                }
                _ => None,
            }
        } else {
            None
        };

        ActivityRecord {
            activity_id: self.activity_id,
            start_time_local: self.start_time_local.as_deref().and_then(parse_datetime),
            activity_type: Some(activity_type),
            activity_name: self.activity_name.clone().filter(|n| !n.trim().is_empty()),
            duration_min,
            distance_km,
            calories: self.calories,
            avg_hr: self.average_hr,
            max_hr: self.max_hr,
            vo2max: self.vo2_max_value,
            cadence: self.average_running_cadence_in_steps_per_minute,
            pace,
        }
    }
}

/// One logged session, in km and minutes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub activity_id: i64,
    pub start_time_local: Option<NaiveDateTime>,
    pub activity_type: Option<String>,
    pub activity_name: Option<String>,
    pub duration_min: Option<f64>,
    pub distance_km: Option<f64>,
    pub calories: Option<f64>,
    pub avg_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub vo2max: Option<f64>,
    pub cadence: Option<f64>,
    /// Per-session pace as "M:SS"
    pub pace: Option<String>,
}

fn field<'a>(row: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|n| row.get(*n)).filter(|v| !v.is_null())
}

fn text(row: &Map<String, Value>, names: &[&str]) -> Option<String> {
    match field(row, names)? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(row: &Map<String, Value>, names: &[&str]) -> Option<f64> {
    field(row, names).and_then(parse_cell)
}

impl ActivityRecord {
    /// Build a record from an activity sheet row.
    ///
    /// Accepts the canonical English headers and the Portuguese sheet headers.
    /// Returns `None` when the row has no usable activity id.
    pub fn from_row(row: &Map<String, Value>) -> Option<Self> {
        let activity_id = match field(row, &["ID", "Activity ID"])? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }?;

        let start_time_local = field(row, &["Date", "Data"])
            .and_then(Value::as_str)
            .and_then(parse_datetime);

        Some(Self {
            activity_id,
            start_time_local,
            activity_type: text(row, &["Type", "Tipo"]),
            activity_name: text(row, &["Name", "Nome"]),
            duration_min: number(row, &["Duration (min)", "Duração (min)"]),
            distance_km: number(row, &["Distance (km)", "Distância (km)"]),
            calories: number(row, &["Calories", "Calorias"]),
            avg_hr: number(row, &["Avg HR", "FC Média"]),
            max_hr: number(row, &["Max HR", "FC Máx"]),
            vo2max: number(row, &["VO2max", "VO2 Máx"]),
            cadence: number(row, &["Cadence (spm)", "PPM"]),
            pace: text(row, &["Pace (min/km)"]),
        })
    }

    /// Pace string for display
    pub fn pace_display(&self) -> &str {
        self.pace.as_deref().unwrap_or(NO_VALUE)
    }

    /// Activity name for display
    pub fn display_name(&self) -> &str {
        self.activity_name.as_deref().unwrap_or("Unnamed Activity")
    }
}
