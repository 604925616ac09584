//! Clock-time labels: "HH:MM" to minutes-since-midnight and back.

use chrono::{NaiveTime, Timelike};

/// Fallback for unparseable clock labels: 09:00 in minutes since midnight.
///
/// A deliberate permissive default: option fields may carry garbled values
/// when the caller passes generator-derived configuration through, and a
/// wrong-but-sane window beats a failed normalization.
pub const FALLBACK_MINUTES: u32 = 9 * 60;

/// Parse a clock label in H:MM or HH:MM form.
///
/// Out-of-range fields are clamped (hour to 23, minute to 59) rather than
/// rejected. Returns `None` only when the shape itself is wrong.
pub fn parse_clock(label: &str) -> Option<(u32, u32)> {
    let (hour_str, minute_str) = label.trim().split_once(':')?;
    if hour_str.is_empty()
        || hour_str.len() > 2
        || minute_str.len() != 2
        || !hour_str.chars().all(|c| c.is_ascii_digit())
        || !minute_str.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    // Out-of-range fields clamp; from_hms_opt then cannot fail
    let hour = hour_str.parse::<u32>().ok()?.min(23);
    let minute = minute_str.parse::<u32>().ok()?.min(59);
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((time.hour(), time.minute()))
}

/// Parse a clock label into minutes since midnight, falling back to 09:00
/// for anything unparseable.
pub fn parse_time_minutes(label: &str) -> u32 {
    match parse_clock(label) {
        Some((hour, minute)) => hour * 60 + minute,
        None => FALLBACK_MINUTES,
    }
}

/// Format minutes since midnight as a zero-padded "HH:MM" label.
/// Values beyond midnight wrap into the next day.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        // Valid cases
        assert_eq!(parse_clock("00:00"), Some((0, 0)));
        assert_eq!(parse_clock("12:30"), Some((12, 30)));
        assert_eq!(parse_clock("23:59"), Some((23, 59)));
        assert_eq!(parse_clock("9:30"), Some((9, 30)));

        // Out-of-range fields clamp instead of failing
        assert_eq!(parse_clock("24:00"), Some((23, 0)));
        assert_eq!(parse_clock("12:75"), Some((12, 59)));

        // Invalid shapes
        assert_eq!(parse_clock("12:30:45"), None);
        assert_eq!(parse_clock("12"), None);
        assert_eq!(parse_clock("12:ab"), None);
        assert_eq!(parse_clock("ab:30"), None);
        assert_eq!(parse_clock("12:5"), None);
        assert_eq!(parse_clock(""), None);
    }

    #[test]
    fn test_parse_time_minutes_fallback() {
        assert_eq!(parse_time_minutes("09:00"), 540);
        assert_eq!(parse_time_minutes("17:00"), 1020);
        assert_eq!(parse_time_minutes("whenever"), FALLBACK_MINUTES);
        assert_eq!(parse_time_minutes(""), FALLBACK_MINUTES);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(540), "09:00");
        assert_eq!(format_minutes(1020), "17:00");
        assert_eq!(format_minutes(61), "01:01");
        // Past midnight wraps
        assert_eq!(format_minutes(1500), "01:00");
    }
}
