//! Time-of-day value type.
//!
//! Shift records carry wall-clock times without a date or timezone. This
//! module provides [`ClockTime`], an hour/minute value with explicit wrap
//! detection, so elapsed time never depends on an arbitrary calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when a string is not a valid time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid time of day (expected HH:MM or HH:MM:00)")]
pub struct ParseClockTimeError {
    /// The rejected input.
    pub value: String,
}

/// A wall-clock time of day with minute resolution.
///
/// The data layer stores `HH:MM:SS`, so a seconds field is accepted when it
/// is zero. Any other seconds value is rejected rather than rounded away.
///
/// # Example
///
/// ```
/// use shift_ledger::models::ClockTime;
///
/// let start: ClockTime = "22:00".parse().unwrap();
/// let end: ClockTime = "06:00:00".parse().unwrap();
///
/// assert!(start.wraps_midnight(end));
/// assert_eq!(start.minutes_until(end), 8 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Creates a time of day, returning `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    ///
    /// The seconds field must be `00`. `24:00` (and `24:00:00`) is read as the
    /// end-of-day marker and maps to midnight, so as an end time it wraps.
    ///
    /// ```
    /// use shift_ledger::models::ClockTime;
    ///
    /// assert_eq!(ClockTime::parse("24:00").unwrap(), ClockTime::MIDNIGHT);
    /// assert!(ClockTime::parse("22:00:30").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ParseClockTimeError> {
        let trimmed = value.trim();
        let malformed = || ParseClockTimeError {
            value: value.to_string(),
        };
        if matches!(trimmed, "24:00" | "24:00:00") {
            return Ok(Self::MIDNIGHT);
        }
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map_err(|_| malformed())?;
        Self::from_whole_minute(time).ok_or_else(malformed)
    }

    /// Converts a `NaiveTime` that falls on a whole minute.
    ///
    /// Returns `None` when the time carries seconds or a fraction, including
    /// a leap second.
    pub fn from_whole_minute(time: NaiveTime) -> Option<Self> {
        if time.second() != 0 || time.nanosecond() != 0 {
            return None;
        }
        // chrono guarantees hour < 24 and minute < 60.
        Some(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        })
    }

    /// The hour of day (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute of the hour (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Returns true if a shift from `self` to `end` crosses midnight.
    ///
    /// Only a strictly earlier end wraps; equal times are a zero-length shift.
    pub fn wraps_midnight(&self, end: ClockTime) -> bool {
        end < *self
    }

    /// Adds `minutes` (which may be negative), wrapping around midnight.
    ///
    /// ```
    /// use shift_ledger::models::ClockTime;
    ///
    /// let late = ClockTime::new(23, 30).unwrap();
    /// assert_eq!(late.plus_minutes(45), ClockTime::new(0, 15).unwrap());
    /// ```
    pub fn plus_minutes(&self, minutes: i64) -> ClockTime {
        let total = (self.minutes_from_midnight() + minutes).rem_euclid(MINUTES_PER_DAY);
        // rem_euclid keeps total in 0..1440.
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }

    /// Minutes from `self` to `end`, advancing `end` one day when it wraps.
    ///
    /// The result is always in `0..MINUTES_PER_DAY`.
    pub fn minutes_until(&self, end: ClockTime) -> i64 {
        let elapsed = end.minutes_from_midnight() - self.minutes_from_midnight();
        if self.wraps_midnight(end) {
            elapsed + MINUTES_PER_DAY
        } else {
            elapsed
        }
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_hours_and_minutes() {
        let time = t("08:30");
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn test_parse_accepts_zero_seconds() {
        assert_eq!(t("17:45:00"), t("17:45"));
    }

    #[test]
    fn test_parse_rejects_nonzero_seconds() {
        for value in ["22:00:30", "08:00:45", "17:45:59", "23:59:60"] {
            let err = ClockTime::parse(value).unwrap_err();
            assert_eq!(err.value, value);
        }
    }

    #[test]
    fn test_parse_end_of_day_marker_is_midnight() {
        assert_eq!(t("24:00"), ClockTime::MIDNIGHT);
        assert_eq!(t("24:00:00"), ClockTime::MIDNIGHT);
        assert!(t("08:00").wraps_midnight(t("24:00")));
        assert_eq!(t("08:00").minutes_until(t("24:00")), 16 * 60);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ClockTime::parse("").is_err());
        assert!(ClockTime::parse("noon").is_err());
        assert!(ClockTime::parse("24:01").is_err());
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
    }

    #[test]
    fn test_from_whole_minute() {
        let exact = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        assert_eq!(ClockTime::from_whole_minute(exact), ClockTime::new(6, 30));

        let with_seconds = NaiveTime::from_hms_opt(6, 30, 1).unwrap();
        assert_eq!(ClockTime::from_whole_minute(with_seconds), None);
    }

    #[test]
    fn test_parse_error_keeps_raw_value() {
        let err = ClockTime::parse("7h30").unwrap_err();
        assert_eq!(err.value, "7h30");
    }

    #[test]
    fn test_new_validates_range() {
        assert!(ClockTime::new(23, 59).is_some());
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
    }

    #[test]
    fn test_wraps_midnight_only_when_strictly_earlier() {
        assert!(t("22:00").wraps_midnight(t("06:00")));
        assert!(!t("08:00").wraps_midnight(t("17:00")));
        assert!(!t("08:00").wraps_midnight(t("08:00")));
    }

    #[test]
    fn test_minutes_until_same_day() {
        assert_eq!(t("08:00").minutes_until(t("17:30")), 570);
    }

    #[test]
    fn test_minutes_until_wrapped() {
        assert_eq!(t("23:30").minutes_until(t("00:15")), 45);
        assert_eq!(t("00:01").minutes_until(t("00:00")), MINUTES_PER_DAY - 1);
    }

    #[test]
    fn test_minutes_until_equal_is_zero() {
        assert_eq!(t("12:00").minutes_until(t("12:00")), 0);
    }

    #[test]
    fn test_plus_minutes_wraps_both_ways() {
        assert_eq!(t("22:00").plus_minutes(60), t("23:00"));
        assert_eq!(t("23:00").plus_minutes(60), t("00:00"));
        assert_eq!(t("00:10").plus_minutes(-20), t("23:50"));
        assert_eq!(t("08:00").plus_minutes(MINUTES_PER_DAY), t("08:00"));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&t("22:00")).unwrap();
        assert_eq!(json, "\"22:00\"");

        let parsed: ClockTime = serde_json::from_str("\"06:30:00\"").unwrap();
        assert_eq!(parsed, t("06:30"));

        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
