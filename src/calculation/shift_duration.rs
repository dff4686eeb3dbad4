//! Shift duration calculation.
//!
//! This module computes the elapsed time of a shift from its two wall-clock
//! times. An end time strictly earlier than the start time is read as the
//! following day; equal times are a zero-length shift.

use rust_decimal::Decimal;

use crate::models::ClockTime;

/// Converts whole minutes to hours.
///
/// # Example
///
/// ```
/// use shift_ledger::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(450), Decimal::new(75, 1)); // 7.5 hours
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Elapsed minutes between `start` and `end`, wrapping past midnight when needed.
///
/// The result is in `0..1440`.
pub fn shift_duration_minutes(start: ClockTime, end: ClockTime) -> i64 {
    start.minutes_until(end)
}

/// Elapsed hours between `start` and `end`.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::shift_duration;
/// use shift_ledger::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let start = ClockTime::new(22, 0).unwrap();
/// let end = ClockTime::new(6, 0).unwrap();
///
/// // Overnight: 22:00 to 06:00 the next day
/// assert_eq!(shift_duration(start, end), Decimal::from(8));
/// ```
pub fn shift_duration(start: ClockTime, end: ClockTime) -> Decimal {
    minutes_to_hours(shift_duration_minutes(start, end))
}
