//! Record models for daily wellness rows and activity sessions

mod activity;
mod daily;

pub use activity::{ActivityRecord, ActivitySummary, ActivityType};
pub use daily::{DailyMetric, DailyRecord, DATE_HEADER};
