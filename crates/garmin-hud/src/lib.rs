//! Period aggregation and metric derivation over Garmin daily and activity data
//!
//! Daily wellness rows and individual activities are imported into a local
//! Parquet store, then summarised as WTD / MTD / QTD / YTD / TOTAL insights,
//! per-day activity totals, correlations and a plain-text HUD.

pub mod cli;
pub mod config;
pub mod error;
pub mod hud;
pub mod metrics;
pub mod models;
pub mod storage;

pub use error::{HudError, Result};
