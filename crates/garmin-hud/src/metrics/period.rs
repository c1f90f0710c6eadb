//! Trailing period windows (week/month/quarter/year to date, all time).
//!
//! "Today" is always passed in explicitly; nothing here reads the clock.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Period tag for a trailing window ending today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    /// Week to date, starting Monday
    Wtd,
    /// Month to date
    Mtd,
    /// Calendar quarter to date
    Qtd,
    /// Year to date
    Ytd,
    /// Everything since the earliest date in the data
    Total,
}

impl Period {
    /// All periods in display order
    pub const ALL: [Period; 5] = [
        Period::Wtd,
        Period::Mtd,
        Period::Qtd,
        Period::Ytd,
        Period::Total,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Wtd => "WTD",
            Period::Mtd => "MTD",
            Period::Qtd => "QTD",
            Period::Ytd => "YTD",
            Period::Total => "TOTAL",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WTD" => Ok(Period::Wtd),
            "MTD" => Ok(Period::Mtd),
            "QTD" => Ok(Period::Qtd),
            "YTD" => Ok(Period::Ytd),
            "TOTAL" => Ok(Period::Total),
            other => Err(format!("unknown period '{}'", other)),
        }
    }
}

/// Inclusive start date of `period` relative to `today`.
///
/// `earliest` is the earliest date present in the data and is only consulted
/// for [`Period::Total`]; an empty dataset makes TOTAL unresolvable.
pub fn resolve_window_start(
    today: NaiveDate,
    period: Period,
    earliest: Option<NaiveDate>,
) -> Option<NaiveDate> {
    match period {
        Period::Wtd => {
            let back = today.weekday().num_days_from_monday() as i64;
            Some(today - Duration::days(back))
        }
        Period::Mtd => today.with_day(1),
        Period::Qtd => {
            let month = 3 * ((today.month() - 1) / 3) + 1;
            NaiveDate::from_ymd_opt(today.year(), month, 1)
        }
        Period::Ytd => NaiveDate::from_ymd_opt(today.year(), 1, 1),
        Period::Total => earliest,
    }
}

/// A resolved window: `start..=end`, where `end` is today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodWindow {
    pub period: Period,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Resolve the window for `period` ending on `today`
    pub fn resolve(today: NaiveDate, period: Period, earliest: Option<NaiveDate>) -> Option<Self> {
        resolve_window_start(today, period, earliest).map(|start| Self {
            period,
            start,
            end: today,
        })
    }

    /// Whether `date` falls inside the window (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_wtd_is_monday_for_every_weekday() {
        // 2024-01-01 is a Monday
        let monday = date(2024, 1, 1);
        for offset in 0..7 {
            let today = monday + Duration::days(offset);
            let start = resolve_window_start(today, Period::Wtd, None).unwrap();
            assert_eq!(start, monday);
            assert!(start <= today);
            assert_eq!(start.weekday(), chrono::Weekday::Mon);
        }
    }

    #[test]
    fn test_wtd_on_monday_is_today() {
        let today = date(2024, 1, 8);
        assert_eq!(resolve_window_start(today, Period::Wtd, None), Some(today));
    }

    #[test]
    fn test_wtd_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday; its week starts 2024-12-30
        let start = resolve_window_start(date(2025, 1, 1), Period::Wtd, None);
        assert_eq!(start, Some(date(2024, 12, 30)));
    }

    #[test]
    fn test_mtd() {
        let start = resolve_window_start(date(2024, 2, 29), Period::Mtd, None);
        assert_eq!(start, Some(date(2024, 2, 1)));
    }

    #[test]
    fn test_qtd_starts_on_quarter_months() {
        for month in 1..=12 {
            let start = resolve_window_start(date(2024, month, 15), Period::Qtd, None).unwrap();
            assert_eq!(start.day(), 1);
            assert!([1, 4, 7, 10].contains(&start.month()));
            assert_eq!(start.month(), 3 * ((month - 1) / 3) + 1);
        }
    }

    #[test]
    fn test_ytd() {
        let start = resolve_window_start(date(2024, 8, 20), Period::Ytd, None);
        assert_eq!(start, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_total_uses_earliest() {
        let earliest = Some(date(2022, 3, 4));
        assert_eq!(
            resolve_window_start(date(2024, 8, 20), Period::Total, earliest),
            earliest
        );
        assert_eq!(resolve_window_start(date(2024, 8, 20), Period::Total, None), None);
    }

    #[test]
    fn test_window_contains() {
        let window = PeriodWindow::resolve(date(2024, 1, 7), Period::Wtd, None).unwrap();
        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2024, 1, 7)));
        assert!(!window.contains(date(2023, 12, 31)));
        assert!(!window.contains(date(2024, 1, 8)));
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("wtd".parse::<Period>(), Ok(Period::Wtd));
        assert_eq!("TOTAL".parse::<Period>(), Ok(Period::Total));
        assert!("decade".parse::<Period>().is_err());
        assert_eq!(Period::Qtd.to_string(), "QTD");
    }
}
