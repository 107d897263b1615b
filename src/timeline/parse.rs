use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};

use super::layout::DayWindow;

/// Length of the block substituted for an unparseable time range.
pub const DEFAULT_BLOCK_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse `"H:MM AM - H:MM PM"` into minutes since midnight.
///
/// Hours may have one or two digits, minutes exactly two. The meridiem is
/// case-insensitive and may follow the minutes without a space.
pub fn try_parse_range(text: &str) -> Result<(u32, u32)> {
    let Some((start_part, end_part)) = text.split_once('-') else {
        bail!("Expected 'H:MM AM - H:MM PM', got '{}'", text.trim())
    };

    let start = parse_clock(start_part).with_context(|| format!("Invalid start in '{}'", text.trim()))?;
    let end = parse_clock(end_part).with_context(|| format!("Invalid end in '{}'", text.trim()))?;

    if end <= start {
        bail!("Range '{}' ends before it starts", text.trim());
    }
    Ok((start, end))
}

/// Parse a time range, falling back to a one-hour block at the start of the
/// default day window when the text does not match.
pub fn parse_range(text: &str) -> (u32, u32) {
    parse_range_or(text, DayWindow::default())
}

/// Like [`parse_range`], with the fallback block placed at the start of
/// `window`.
pub fn parse_range_or(text: &str, window: DayWindow) -> (u32, u32) {
    match try_parse_range(text) {
        Ok(range) => range,
        Err(e) => {
            tracing::warn!("{:#}; using default block", e);
            let start = window.start_minutes();
            (start, start + DEFAULT_BLOCK_MINUTES)
        }
    }
}

fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    let upper = s.to_ascii_uppercase();

    let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Meridiem::Am)
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Meridiem::Pm)
    } else {
        bail!("Missing AM/PM in '{}'", s)
    };

    let Some((hour_str, minute_str)) = digits.split_once(':') else {
        bail!("Expected H:MM in '{}'", s)
    };
    if hour_str.is_empty() || hour_str.len() > 2 || minute_str.len() != 2 {
        bail!("Expected H:MM in '{}'", s);
    }
    if !hour_str.bytes().chain(minute_str.bytes()).all(|b| b.is_ascii_digit()) {
        bail!("Expected H:MM in '{}'", s);
    }

    let hour: u32 = hour_str.parse()?;
    let minute: u32 = minute_str.parse()?;
    if hour > 12 || minute > 59 {
        bail!("Clock time out of range: '{}'", s);
    }

    // 12 AM is left at 12:xx; only PM hours below 12 shift.
    let hour = match meridiem {
        Meridiem::Pm if hour < 12 => hour + 12,
        _ => hour,
    };
    Ok(hour * 60 + minute)
}

/// Render minutes since midnight as `"H:MM AM"`.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % (24 * 60);
    match NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
        Some(time) => {
            let (_, hour12) = time.hour12();
            format!("{}:{}", hour12, time.format("%M %p"))
        }
        None => format!("{}:{:02}", minutes / 60, minutes % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_to_noon() {
        assert_eq!(parse_range("10:00 AM - 12:00 PM"), (600, 720));
    }

    #[test]
    fn test_afternoon_with_leading_zero() {
        assert_eq!(parse_range("02:00 PM - 04:00 PM"), (840, 960));
    }

    #[test]
    fn test_single_digit_hour_and_minutes() {
        assert_eq!(parse_range("9:30 AM - 11:15 AM"), (570, 675));
    }

    #[test]
    fn test_lowercase_and_tight_spacing() {
        assert_eq!(try_parse_range("9:30am-1:05pm").unwrap(), (570, 785));
    }

    #[test]
    fn test_garbage_falls_back_to_default_block() {
        assert_eq!(parse_range("garbage"), (480, 540));
        assert_eq!(parse_range(""), (480, 540));
    }

    #[test]
    fn test_fallback_follows_window() {
        let window = DayWindow::new(9, 17);
        assert_eq!(parse_range_or("TBA", window), (540, 600));
    }

    #[test]
    fn test_rejects_malformed_clocks() {
        assert!(try_parse_range("10:00 - 11:00 AM").is_err());
        assert!(try_parse_range("10:0 AM - 11:00 AM").is_err());
        assert!(try_parse_range("13:00 PM - 2:00 PM").is_err());
        assert!(try_parse_range("10:75 AM - 11:00 AM").is_err());
        assert!(try_parse_range("ten:00 AM - 11:00 AM").is_err());
        assert!(try_parse_range("10:00 AM").is_err());
    }

    #[test]
    fn test_rejects_reversed_range() {
        let err = try_parse_range("3:00 PM - 1:00 PM").unwrap_err();
        assert!(err.to_string().contains("ends before it starts"));
        assert_eq!(parse_range("3:00 PM - 1:00 PM"), (480, 540));
    }

    #[test]
    fn test_twelve_oclock_rule() {
        // PM only shifts hours below 12; AM never shifts.
        assert_eq!(try_parse_range("12:00 PM - 1:00 PM").unwrap(), (720, 780));
        assert_eq!(try_parse_range("11:00 AM - 12:30 AM").unwrap(), (660, 750));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(600), "10:00 AM");
        assert_eq!(format_minutes(785), "1:05 PM");
        assert_eq!(format_minutes(720), "12:00 PM");
        assert_eq!(format_minutes(0), "12:00 AM");
    }
}
