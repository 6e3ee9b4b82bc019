// ============================================================================
// FORMAT HELPERS - Display of numbers, points and dates
// ============================================================================

use chrono::{DateTime, Local};

/// Compact display for counters: 1_250 -> "1.3K", 2_000_000 -> "2.0M".
/// Ties round away from zero; `{:.1}` alone would round 1.25 to 1.2.
pub fn format_number(value: Option<i64>) -> String {
    let Some(value) = value else {
        return "—".to_string();
    };
    let sign = value.signum() as f64;
    let abs = value.abs() as f64;
    if abs >= 1_000_000.0 {
        let scaled = (abs / 1_000_000.0 * 10.0).round() / 10.0;
        format!("{:.1}M", scaled * sign)
    } else if abs >= 1_000.0 {
        let scaled = (abs / 1_000.0 * 10.0).round() / 10.0;
        format!("{:.1}K", scaled * sign)
    } else {
        value.to_string()
    }
}

pub fn format_points(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{} pts", v),
        None => "—".to_string(),
    }
}

pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${:.2}", v),
        _ => "—".to_string(),
    }
}

/// Signed delta against the previous period, "—" when either side is unknown.
pub fn format_delta(value: Option<i64>) -> String {
    match value {
        Some(v) if v < 0 => format!("-{}", format_number(Some(-v))),
        Some(v) => format!("+{}", format_number(Some(v))),
        None => "—".to_string(),
    }
}

/// RFC3339 timestamp -> short local form; unparsable input passes through.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "—".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting_scales() {
        assert_eq!(format_number(None), "—");
        assert_eq!(format_number(Some(0)), "0");
        assert_eq!(format_number(Some(999)), "999");
        assert_eq!(format_number(Some(1_250)), "1.3K");
        assert_eq!(format_number(Some(1_240)), "1.2K");
        assert_eq!(format_number(Some(1_250_000)), "1.3M");
        assert_eq!(format_number(Some(2_000_000)), "2.0M");
    }

    #[test]
    fn negative_numbers_keep_their_sign_when_scaled() {
        assert_eq!(format_number(Some(-1_250)), "-1.3K");
        assert_eq!(format_number(Some(-999)), "-999");
    }

    #[test]
    fn delta_is_signed() {
        assert_eq!(format_delta(Some(12)), "+12");
        assert_eq!(format_delta(Some(-3)), "-3");
        assert_eq!(format_delta(Some(0)), "+0");
        assert_eq!(format_delta(None), "—");
    }

    #[test]
    fn currency_handles_missing_values() {
        assert_eq!(format_currency(Some(12.5)), "$12.50");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(f64::NAN)), "—");
        assert_eq!(format_currency(None), "—");
    }

    #[test]
    fn points_formatting() {
        assert_eq!(format_points(Some(40)), "40 pts");
        assert_eq!(format_points(None), "—");
    }

    #[test]
    fn dates_pass_through_when_unparsable() {
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert!(format_date(Some("2025-11-10T12:00:00+00:00")).starts_with("2025-11-10"));
    }
}
