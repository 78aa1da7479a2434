//! Date and time parsing for task options.
//!
//! The values given to `/by`, `/from` and `/to` are read into a
//! [`Timestamp`]. Both exact forms (`2024-12-15 18:00`) and relative ones
//! (`tomorrow 3pm`, `next friday`, `in 2 weeks`) are understood.

use std::fmt;

use chrono::{Datelike, Days, Duration, Local, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

const STORAGE_DATE: &str = "%Y-%m-%d";
const STORAGE_TIME: &str = "%H:%M";
const DISPLAY_DATE: &str = "%b %d %Y";

/// A calendar date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp {
    /// The date.
    pub date: NaiveDate,
    /// Optional time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl Timestamp {
    /// Create a timestamp with just a date.
    #[must_use]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Create a timestamp with date and time.
    #[must_use]
    pub const fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }

    /// Canonical form written to the task file: `YYYY-MM-DD[ HH:MM]`.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        match self.time {
            Some(time) => format!(
                "{} {}",
                self.date.format(STORAGE_DATE),
                time.format(STORAGE_TIME)
            ),
            None => self.date.format(STORAGE_DATE).to_string(),
        }
    }

    /// Read the canonical storage form back.
    ///
    /// Unlike [`parse_timestamp`] this accepts nothing relative, so a task
    /// file never changes meaning depending on the day it is loaded.
    #[must_use]
    pub fn from_storage_str(input: &str) -> Option<Self> {
        let input = input.trim();
        let (date_part, time_part) = input
            .split_once(' ')
            .map_or((input, None), |(d, t)| (d, Some(t)));

        let date = NaiveDate::parse_from_str(date_part, STORAGE_DATE).ok()?;
        match time_part {
            Some(t) => NaiveTime::parse_from_str(t.trim(), STORAGE_TIME)
                .ok()
                .map(|time| Self::with_time(date, time)),
            None => Some(Self::date_only(date)),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DISPLAY_DATE))?;
        if let Some(time) = self.time {
            write!(f, " {}", time.format(STORAGE_TIME))?;
        }
        Ok(())
    }
}

/// Parse an option value relative to the local date.
///
/// Supports patterns like:
/// - `2024-12-15`, `2024-12-15 18:00`, `2024-12-15 1800`
/// - `today`, `tomorrow`, `yesterday`
/// - `monday`, `mon`, `next friday` (next occurrence)
/// - `in 3 days`, `in 2 weeks`
/// - `dec 15`, `december 15 3pm`
/// - a bare time (`6pm`, `noon`) meaning today
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<Timestamp> {
    parse_timestamp_on(input, Local::now().date_naive())
}

/// Parse an option value relative to `today`.
#[must_use]
pub fn parse_timestamp_on(input: &str, today: NaiveDate) -> Option<Timestamp> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let (date_part, time) = extract_time(&input);
    let date = if date_part.is_empty() && time.is_some() {
        today
    } else {
        parse_date(&date_part, today)?
    };

    Some(Timestamp { date, time })
}

fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    match input {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        "yesterday" => return today.pred_opt(),
        _ => {},
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, STORAGE_DATE) {
        return Some(date);
    }

    parse_relative_offset(input, today)
        .or_else(|| parse_weekday(input, today))
        .or_else(|| parse_month_day(input, today))
}

/// Parse "in X days/weeks" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let days = match parts[2].trim_end_matches('s') {
        "day" => amount,
        "week" => amount.checked_mul(7)?,
        _ => return None,
    };

    today.checked_add_signed(Duration::try_days(days)?)
}

/// Parse weekday names. Today's weekday always means a week ahead.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let day_str = input.strip_prefix("next ").unwrap_or(input);

    let target = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_until = (u64::from(target.num_days_from_sunday()) + 7
        - u64::from(today.weekday().num_days_from_sunday()))
        % 7;
    if days_until == 0 {
        days_until = 7;
    }

    today.checked_add_days(Days::new(days_until))
}

/// Parse "dec 15" style dates, rolling over to next year once passed.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let month = parse_month_name(parts[0])?;
    let day: u32 = parts[1].parse().ok()?;

    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if this_year < today {
        NaiveDate::from_ymd_opt(today.year().checked_add(1)?, month, day)
    } else {
        Some(this_year)
    }
}

fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Split a trailing time token off the input.
///
/// Returns the remaining date text and the parsed time.
fn extract_time(input: &str) -> (String, Option<NaiveTime>) {
    let mut parts: Vec<&str> = input.split_whitespace().collect();

    let Some(last) = parts.last() else {
        return (String::new(), None);
    };
    let Some(time) = parse_time(last) else {
        return (parts.join(" "), None);
    };

    parts.pop();
    if parts.last().is_some_and(|word| *word == "at" || *word == "@") {
        parts.pop();
    }
    (parts.join(" "), Some(time))
}

/// Parse a time string.
fn parse_time(input: &str) -> Option<NaiveTime> {
    match input {
        "morning" => return NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => return NaiveTime::from_hms_opt(14, 0, 0),
        "evening" => return NaiveTime::from_hms_opt(18, 0, 0),
        "night" => return NaiveTime::from_hms_opt(21, 0, 0),
        _ => {},
    }

    // 24-hour format (15:00)
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Some(time);
    }

    // Compact 24-hour format (1800)
    if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::parse_from_str(input, "%H%M").ok();
    }

    // 12-hour format (3pm, 3:30pm)
    let (time_str, is_pm) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (hour_str, minute) = match time_str.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m.parse::<u32>().ok()?),
        Some(_) => return None,
        None => (time_str, 0),
    };
    let mut hour: u32 = hour_str.parse().ok()?;
    if hour == 0 || hour > 12 {
        return None;
    }

    if is_pm && hour < 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A Wednesday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        let ts = parse_timestamp_on("2024-01-01", today()).unwrap();
        assert_eq!(ts, Timestamp::date_only(date(2024, 1, 1)));
    }

    #[test]
    fn test_parse_iso_date_with_times() {
        let expected = Timestamp::with_time(date(2019, 12, 2), time(18, 0));
        assert_eq!(parse_timestamp_on("2019-12-02 1800", today()), Some(expected));
        assert_eq!(parse_timestamp_on("2019-12-02 18:00", today()), Some(expected));
        assert_eq!(parse_timestamp_on("2019-12-02 6pm", today()), Some(expected));
        assert_eq!(parse_timestamp_on("2019-12-02 at 6pm", today()), Some(expected));
    }

    #[test]
    fn test_parse_relative_words() {
        assert_eq!(parse_timestamp_on("today", today()).unwrap().date, today());
        assert_eq!(
            parse_timestamp_on("Tomorrow", today()).unwrap().date,
            date(2024, 6, 13)
        );
        assert_eq!(
            parse_timestamp_on("yesterday", today()).unwrap().date,
            date(2024, 6, 11)
        );
    }

    #[test]
    fn test_parse_relative_offset() {
        assert_eq!(
            parse_timestamp_on("in 3 days", today()).unwrap().date,
            date(2024, 6, 15)
        );
        assert_eq!(
            parse_timestamp_on("in 1 week", today()).unwrap().date,
            date(2024, 6, 19)
        );
        assert!(parse_timestamp_on("in 3 fortnights", today()).is_none());
    }

    #[test]
    fn test_parse_relative_offset_out_of_range() {
        assert!(parse_timestamp_on("in 100000000 days", today()).is_none());
        assert!(parse_timestamp_on("in 200000000000 days", today()).is_none());
        assert!(parse_timestamp_on("in 2000000000000000000 weeks", today()).is_none());
        assert!(parse_timestamp_on("tomorrow", NaiveDate::MAX).is_none());
        assert!(parse_timestamp_on("friday", NaiveDate::MAX).is_none());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_timestamp_on("Mon", today()).unwrap().date, date(2024, 6, 17));
        assert_eq!(
            parse_timestamp_on("friday", today()).unwrap().date,
            date(2024, 6, 14)
        );
        // Same weekday as today rolls a full week.
        assert_eq!(
            parse_timestamp_on("wednesday", today()).unwrap().date,
            date(2024, 6, 19)
        );
        assert_eq!(
            parse_timestamp_on("next tue", today()).unwrap().date,
            date(2024, 6, 18)
        );
    }

    #[test]
    fn test_parse_month_day_rolls_over() {
        assert_eq!(
            parse_timestamp_on("dec 15", today()).unwrap().date,
            date(2024, 12, 15)
        );
        assert_eq!(
            parse_timestamp_on("jan 2", today()).unwrap().date,
            date(2025, 1, 2)
        );
    }

    #[test]
    fn test_parse_time_only_means_today() {
        let ts = parse_timestamp_on("noon", today()).unwrap();
        assert_eq!(ts, Timestamp::with_time(today(), time(12, 0)));
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("3pm"), Some(time(15, 0)));
        assert_eq!(parse_time("3:30pm"), Some(time(15, 30)));
        assert_eq!(parse_time("12am"), Some(time(0, 0)));
        assert_eq!(parse_time("12pm"), Some(time(12, 0)));
        assert_eq!(parse_time("0930"), Some(time(9, 30)));
        assert_eq!(parse_time("evening"), Some(time(18, 0)));
        assert_eq!(parse_time("13pm"), None);
        assert_eq!(parse_time("2500"), None);
        assert_eq!(parse_time("3:5pm"), None);
        assert_eq!(parse_time("3:050pm"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp_on("", today()).is_none());
        assert!(parse_timestamp_on("someday", today()).is_none());
        assert!(parse_timestamp_on("2024-13-01", today()).is_none());
    }

    #[test]
    fn test_storage_form() {
        let ts = Timestamp::with_time(date(2024, 1, 1), time(9, 5));
        assert_eq!(ts.to_storage_string(), "2024-01-01 09:05");
        assert_eq!(Timestamp::from_storage_str("2024-01-01 09:05"), Some(ts));

        let day = Timestamp::date_only(date(2024, 1, 1));
        assert_eq!(day.to_storage_string(), "2024-01-01");
        assert_eq!(Timestamp::from_storage_str("2024-01-01"), Some(day));

        assert!(Timestamp::from_storage_str("tomorrow").is_none());
        assert!(Timestamp::from_storage_str("2024-01-01 late").is_none());
    }

    #[test]
    fn test_display_form() {
        assert_eq!(
            Timestamp::date_only(date(2024, 1, 1)).to_string(),
            "Jan 01 2024"
        );
        assert_eq!(
            Timestamp::with_time(date(2024, 1, 1), time(18, 0)).to_string(),
            "Jan 01 2024 18:00"
        );
    }

    #[test]
    fn test_ordering_puts_time_after_bare_date() {
        let bare = Timestamp::date_only(date(2024, 1, 1));
        let timed = Timestamp::with_time(date(2024, 1, 1), time(8, 0));
        assert!(bare < timed);
        assert!(timed < Timestamp::date_only(date(2024, 1, 2)));
    }
}
