//! Shift model.
//!
//! A shift is one worked period on one accounting date, recorded as two
//! wall-clock times. The times arrive as raw strings from the data layer
//! and are only interpreted by the engine, so a malformed value surfaces as
//! an error naming the shift instead of being silently dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ClockTime;

/// Represents a work shift as stored by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The accounting day the shift belongs to.
    pub date: NaiveDate,
    /// The start time of day (`HH:MM` or `HH:MM:SS`).
    pub start_time: String,
    /// The end time of day. Earlier than `start_time` means the next day.
    pub end_time: String,
}

impl Shift {
    /// Creates a shift from string times.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parses the start and end times.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTimeValue`] naming this shift and the
    /// offending field when either time cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_ledger::models::{ClockTime, Shift};
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift::new("shift_001", NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), "22:00:00", "06:00:00");
    /// let (start, end) = shift.clock_times().unwrap();
    /// assert_eq!(start, ClockTime::new(22, 0).unwrap());
    /// assert!(start.wraps_midnight(end));
    /// ```
    pub fn clock_times(&self) -> EngineResult<(ClockTime, ClockTime)> {
        let start = self.parse_field("start_time", &self.start_time)?;
        let end = self.parse_field("end_time", &self.end_time)?;
        Ok((start, end))
    }

    fn parse_field(&self, field: &str, value: &str) -> EngineResult<ClockTime> {
        ClockTime::parse(value).map_err(|_| EngineError::MalformedTimeValue {
            shift_id: self.id.clone(),
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// SH-001: day shift parses cleanly
    #[test]
    fn test_day_shift_clock_times() {
        let shift = Shift::new("SH-001", make_date("2026-01-15"), "08:00:00", "17:00:00");
        let (start, end) = shift.clock_times().unwrap();

        assert_eq!(start.hour(), 8);
        assert_eq!(end.hour(), 17);
        assert!(!start.wraps_midnight(end));
    }

    /// SH-002: malformed start time names the shift and field
    #[test]
    fn test_malformed_start_time() {
        let shift = Shift::new("SH-002", make_date("2026-01-15"), "8am", "17:00");

        match shift.clock_times() {
            Err(EngineError::MalformedTimeValue {
                shift_id,
                field,
                value,
            }) => {
                assert_eq!(shift_id, "SH-002");
                assert_eq!(field, "start_time");
                assert_eq!(value, "8am");
            }
            other => panic!("Expected MalformedTimeValue, got {:?}", other),
        }
    }

    /// SH-003: malformed end time
    #[test]
    fn test_malformed_end_time() {
        let shift = Shift::new("SH-003", make_date("2026-01-15"), "08:00", "");

        match shift.clock_times() {
            Err(EngineError::MalformedTimeValue { field, .. }) => {
                assert_eq!(field, "end_time");
            }
            other => panic!("Expected MalformedTimeValue, got {:?}", other),
        }
    }

    /// SH-004: non-zero seconds are malformed, not truncated
    #[test]
    fn test_nonzero_seconds_are_malformed() {
        let shift = Shift::new("SH-004", make_date("2026-01-15"), "22:00:30", "22:00:00");

        match shift.clock_times() {
            Err(EngineError::MalformedTimeValue { field, value, .. }) => {
                assert_eq!(field, "start_time");
                assert_eq!(value, "22:00:30");
            }
            other => panic!("Expected MalformedTimeValue, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "date": "2026-01-15",
            "start_time": "22:00:00",
            "end_time": "06:00:00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, "shift_001");
        assert_eq!(shift.date, make_date("2026-01-15"));
        assert_eq!(shift.end_time, "06:00:00");
    }
}
