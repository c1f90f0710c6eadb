//! Conversions between encoded duration/pace strings and decimal minutes/hours.
//!
//! Every function here is total: missing or malformed input yields `None` or
//! the [`NO_VALUE`] sentinel, never a panic.

/// Display sentinel for a value that is missing or cannot be computed.
pub const NO_VALUE: &str = "-";

/// Parse "mm:ss" or "h:mm:ss" into decimal minutes.
///
/// A comma is accepted as decimal separator in any component ("5:30,5").
/// Text without a colon is treated as an already-numeric value and passed
/// through unchanged, so "5,5" and "5.5" both yield `Some(5.5)`.
pub fn duration_to_minutes(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts = text
        .split(':')
        .map(parse_component)
        .collect::<Option<Vec<f64>>>()?;

    if parts.len() > 1 && parts.iter().any(|p| *p < 0.0) {
        return None;
    }

    let minutes = match parts.as_slice() {
        [value] => *value,
        [m, s] => m + s / 60.0,
        [h, m, s] => h * 60.0 + m + s / 60.0,
        _ => return None,
    };

    minutes.is_finite().then_some(minutes)
}

fn parse_component(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return None;
    }
    let value = part.replace(',', ".").parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Format decimal minutes as "M:SS" (e.g. 5.5 -> "5:30").
///
/// Seconds are rounded on the total, so 5.999 becomes "6:00" rather than "5:60".
pub fn minutes_to_pace_string(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) if m.is_finite() && m > 0.0 => {
            let total_seconds = (m * 60.0).round() as i64;
            format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
        }
        _ => NO_VALUE.to_string(),
    }
}

/// Format decimal hours as "HH:MM" (e.g. 7.25 -> "07:15").
pub fn hours_to_clock_string(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h.is_finite() && h >= 0.0 => {
            let total_minutes = (h * 60.0).round() as i64;
            format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
        }
        _ => NO_VALUE.to_string(),
    }
}

/// Round to an integer and group thousands with commas (12345.4 -> "12,345").
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return NO_VALUE.to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Plain number with two decimals.
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        NO_VALUE.to_string()
    }
}

/// Pace in minutes per km from total duration (min) over total distance (km).
///
/// Undefined when the distance is not positive.
pub fn pace_from_totals(duration_min: f64, distance_km: f64) -> Option<f64> {
    if distance_km > 0.0 && duration_min.is_finite() && distance_km.is_finite() {
        Some(duration_min / distance_km)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_mm_ss() {
        assert_eq!(duration_to_minutes("5:30"), Some(5.5));
        assert_eq!(duration_to_minutes("05:30"), Some(5.5));
        assert_eq!(duration_to_minutes(" 4:15 "), Some(4.25));
    }

    #[test]
    fn test_duration_h_mm_ss() {
        assert_eq!(duration_to_minutes("1:01:30"), Some(61.5));
        assert_eq!(duration_to_minutes("0:45:00"), Some(45.0));
    }

    #[test]
    fn test_duration_comma_decimal() {
        assert_eq!(duration_to_minutes("5:30,0"), Some(5.5));
        assert_eq!(duration_to_minutes("7,5"), Some(7.5));
    }

    #[test]
    fn test_duration_numeric_passthrough() {
        assert_eq!(duration_to_minutes("42"), Some(42.0));
        assert_eq!(duration_to_minutes("-1"), Some(-1.0));
    }

    #[test]
    fn test_duration_malformed() {
        assert_eq!(duration_to_minutes(""), None);
        assert_eq!(duration_to_minutes("   "), None);
        assert_eq!(duration_to_minutes("abc"), None);
        assert_eq!(duration_to_minutes("5:"), None);
        assert_eq!(duration_to_minutes("1:2:3:4"), None);
        assert_eq!(duration_to_minutes("-5:30"), None);
        assert_eq!(duration_to_minutes("NaN"), None);
    }

    #[test]
    fn test_pace_string() {
        assert_eq!(minutes_to_pace_string(Some(5.5)), "5:30");
        assert_eq!(minutes_to_pace_string(Some(6.25)), "6:15");
        assert_eq!(minutes_to_pace_string(Some(5.9999)), "6:00");
        assert_eq!(minutes_to_pace_string(Some(12.0)), "12:00");
    }

    #[test]
    fn test_pace_string_sentinel() {
        assert_eq!(minutes_to_pace_string(None), "-");
        assert_eq!(minutes_to_pace_string(Some(0.0)), "-");
        assert_eq!(minutes_to_pace_string(Some(f64::NAN)), "-");
    }

    #[test]
    fn test_pace_round_trip() {
        for text in ["4:05", "5:30", "6:59", "10:00", "3:41"] {
            let minutes = duration_to_minutes(text);
            assert_eq!(minutes_to_pace_string(minutes), text);
        }
    }

    #[test]
    fn test_clock_string() {
        assert_eq!(hours_to_clock_string(Some(7.25)), "07:15");
        assert_eq!(hours_to_clock_string(Some(0.0)), "00:00");
        assert_eq!(hours_to_clock_string(Some(10.5)), "10:30");
        assert_eq!(hours_to_clock_string(None), "-");
        assert_eq!(hours_to_clock_string(Some(f64::NAN)), "-");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(12345.4), "12,345");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-4200.0), "-4,200");
        assert_eq!(format_thousands(0.0), "0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.456), "7.46");
        assert_eq!(format_number(f64::INFINITY), "-");
    }

    #[test]
    fn test_pace_from_totals() {
        assert_eq!(pace_from_totals(60.0, 10.0), Some(6.0));
        assert_eq!(pace_from_totals(60.0, 0.0), None);
        assert_eq!(pace_from_totals(60.0, -1.0), None);
    }
}
