//! Conversion between human-facing time formats and minutes since midnight.

use crate::constants::{DEFAULT_DAY_END, DEFAULT_DAY_START, MINUTES_PER_DAY};
use crate::models::Train;

/// Outcome of parsing a free-form time input.
///
/// `Empty` and `Invalid` both collapse to `None` in [`parse_time`]; they are
/// kept distinct so callers can tell a blank field from a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeParse {
    Minutes(i32),
    Empty,
    Invalid,
}

impl TimeParse {
    #[must_use]
    pub const fn minutes(self) -> Option<i32> {
        match self {
            Self::Minutes(minutes) => Some(minutes),
            Self::Empty | Self::Invalid => None,
        }
    }
}

/// Parse a time string to minutes since midnight.
///
/// Accepts `"HH:MM"` (24-hour), a bare number (hour of day when below 24,
/// raw minutes when below 1440) and `"H:MM am/pm"`. Returns `None` for
/// empty or malformed input; never panics.
#[must_use]
pub fn parse_time(input: &str) -> Option<i32> {
    parse_time_checked(input).minutes()
}

/// Like [`parse_time`], but reports whether a failed parse was blank input
/// or malformed text.
#[must_use]
pub fn parse_time_checked(input: &str) -> TimeParse {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return TimeParse::Empty;
    }

    if let Some((hours, minutes)) = split_hhmm(trimmed) {
        if hours < 24 && minutes < 60 {
            return TimeParse::Minutes(hours * 60 + minutes);
        }
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = trimmed.parse::<i32>() {
            if value < 24 {
                return TimeParse::Minutes(value * 60);
            }
            if value < MINUTES_PER_DAY {
                return TimeParse::Minutes(value);
            }
        }
        return TimeParse::Invalid;
    }

    match parse_am_pm(trimmed) {
        Some(minutes) => TimeParse::Minutes(minutes),
        None => TimeParse::Invalid,
    }
}

/// Split a `"H:MM"` / `"HH:MM"` shaped string without range-checking.
fn split_hhmm(input: &str) -> Option<(i32, i32)> {
    let (hours, minutes) = input.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Parse `"H:MM am"` / `"H:MMpm"` (case-insensitive, spaces ignored).
fn parse_am_pm(input: &str) -> Option<i32> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let (clock, is_pm) = if let Some(rest) = compact.strip_suffix("am") {
        (rest, false)
    } else if let Some(rest) = compact.strip_suffix("pm") {
        (rest, true)
    } else {
        return None;
    };

    let (hours, minutes) = split_hhmm(clock)?;
    if !(1..=12).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    let hours = match (is_pm, hours) {
        (false, 12) => 0,
        (true, 12) => 12,
        (true, hours) => hours + 12,
        (false, hours) => hours,
    };

    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as `"HH:MM"`.
///
/// Negative values wrap into the previous day; hours are displayed mod 24.
#[must_use]
pub fn format_minutes(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Format a duration in minutes as `"{h}h {m}m"`, dropping the zero part.
///
/// Negative durations are prefixed with `-` and formatted on the absolute
/// value.
#[must_use]
pub fn format_duration(minutes: i32) -> String {
    if minutes < 0 {
        return format!("-{}", format_duration(minutes.saturating_abs()));
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{mins}m")
    } else if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}

/// Minutes from `from` to `to`, or `None` if either side fails to parse.
#[must_use]
pub fn time_difference(from: &str, to: &str) -> Option<i32> {
    Some(parse_time(to)? - parse_time(from)?)
}

/// Earliest and latest scheduled minute across all trains, padded by half an
/// hour on each side and clamped to the day.
///
/// An empty train list yields 06:00-22:00 unpadded; trains without any
/// usable time yield the same range with the padding applied.
#[must_use]
pub fn time_range(trains: &[Train]) -> (i32, i32) {
    if trains.is_empty() {
        return (DEFAULT_DAY_START, DEFAULT_DAY_END);
    }

    let mut min_time = i32::MAX;
    let mut max_time = 0;
    let mut found = false;

    for train in trains {
        for stop in &train.schedule {
            for time in [stop.arrival, stop.departure].into_iter().flatten() {
                min_time = min_time.min(time);
                max_time = max_time.max(time);
                found = true;
            }
        }
    }

    if !found || max_time == 0 {
        min_time = DEFAULT_DAY_START;
        max_time = DEFAULT_DAY_END;
    }

    ((min_time - 30).max(0), (max_time + 30).min(MINUTES_PER_DAY))
}

/// Inclusive range of minute values from `start` to `end` with `step`
/// spacing, e.g. for axis tick labels. Degenerate input yields an empty
/// list.
#[must_use]
pub fn time_steps(start: i32, end: i32, step: i32) -> Vec<i32> {
    let Ok(step) = usize::try_from(step) else {
        return Vec::new();
    };
    if step == 0 || end < start {
        return Vec::new();
    }
    (start..=end).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    #[test]
    fn test_parse_time_hhmm() {
        assert_eq!(parse_time("08:30"), Some(510));
        assert_eq!(parse_time("8:30"), Some(510));
        assert_eq!(parse_time("00:00"), Some(0));
        assert_eq!(parse_time("23:59"), Some(1439));
        assert_eq!(parse_time(" 10:15 "), Some(615));
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("123:00"), None);
    }

    #[test]
    fn test_parse_time_bare_numbers() {
        // Below 24 the number is an hour of day, otherwise raw minutes.
        assert_eq!(parse_time("0"), Some(0));
        assert_eq!(parse_time("9"), Some(540));
        assert_eq!(parse_time("23"), Some(1380));
        assert_eq!(parse_time("100"), Some(100));
        assert_eq!(parse_time("1439"), Some(1439));
        assert_eq!(parse_time("1440"), None);
    }

    #[test]
    fn test_parse_time_am_pm() {
        assert_eq!(parse_time("9:00am"), Some(540));
        assert_eq!(parse_time("9:00 am"), Some(540));
        assert_eq!(parse_time("9:00 PM"), Some(1260));
        assert_eq!(parse_time("12:00am"), Some(0));
        assert_eq!(parse_time("12:00pm"), Some(720));
        assert_eq!(parse_time("12:30 pm"), Some(750));
        assert_eq!(parse_time("13:00pm"), None);
        assert_eq!(parse_time("0:30am"), None);
    }

    #[test]
    fn test_parse_time_invalid() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("   "), None);
        assert_eq!(parse_time("later"), None);
        assert_eq!(parse_time("8:3"), None);
        assert_eq!(parse_time("-10"), None);
    }

    #[test]
    fn test_parse_time_checked_distinguishes_empty_from_invalid() {
        assert_eq!(parse_time_checked(""), TimeParse::Empty);
        assert_eq!(parse_time_checked("  "), TimeParse::Empty);
        assert_eq!(parse_time_checked("nonsense"), TimeParse::Invalid);
        assert_eq!(parse_time_checked("07:45"), TimeParse::Minutes(465));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(510), "08:30");
        assert_eq!(format_minutes(1439), "23:59");
    }

    #[test]
    fn test_format_minutes_wraps() {
        assert_eq!(format_minutes(-30), "23:30");
        assert_eq!(format_minutes(-1470), "23:30");
        assert_eq!(format_minutes(1500), "01:00");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for minutes in 0..MINUTES_PER_DAY {
            assert_eq!(parse_time(&format_minutes(minutes)), Some(minutes));
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(-90), "-1h 30m");
    }

    #[test]
    fn test_time_difference() {
        assert_eq!(time_difference("08:00", "09:30"), Some(90));
        assert_eq!(time_difference("09:30", "08:00"), Some(-90));
        assert_eq!(time_difference("bad", "09:30"), None);
        assert_eq!(time_difference("08:00", ""), None);
    }

    #[test]
    fn test_time_range_defaults() {
        assert_eq!(time_range(&[]), (DEFAULT_DAY_START, DEFAULT_DAY_END));

        // Trains without usable times fall back to the default day, padded.
        let train = Train::with_schedule("T", "#fff", vec![Stop::new("A", None, None)]);
        assert_eq!(time_range(&[train]), (DEFAULT_DAY_START - 30, DEFAULT_DAY_END + 30));
    }

    #[test]
    fn test_time_range_pads_and_clamps() {
        let train = Train::with_schedule(
            "T",
            "#fff",
            vec![Stop::new("A", Some(10), Some(20)), Stop::new("B", Some(1430), None)],
        );
        assert_eq!(time_range(&[train]), (0, MINUTES_PER_DAY));
    }

    #[test]
    fn test_time_steps() {
        assert_eq!(time_steps(480, 600, 60), vec![480, 540, 600]);
        assert_eq!(time_steps(480, 610, 60), vec![480, 540, 600]);
        assert!(time_steps(480, 400, 60).is_empty());
        assert!(time_steps(480, 600, 0).is_empty());
        assert!(time_steps(480, 600, -60).is_empty());
    }
}
