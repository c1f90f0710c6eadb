//! Period aggregation and metric derivation
//!
//! Everything here is pure: inputs are in-memory tables and records, and
//! "today" is always passed in explicitly.

pub mod aggregate;
pub mod correlation;
pub mod daily_activity;
pub mod insights;
pub mod period;
pub mod table;
pub mod units;

pub use aggregate::{aggregate, Aggregation, AggregationMode};
pub use correlation::{correlation_matrix, fit_trend_line, CorrelationMatrix, InsufficientData, TrendLine};
pub use daily_activity::{aggregate_by_day_and_type, running_totals_by_day, DailyActivityAggregate};
pub use insights::{build_insight_table, InsightTable, MetricCatalog, MetricSpec, ValueFormat};
pub use period::{resolve_window_start, Period, PeriodWindow};
pub use table::{SeriesPoint, Table};
