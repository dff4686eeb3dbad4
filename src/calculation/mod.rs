//! Calculation logic for monthly time accounting.
//!
//! This module contains the calculation functions for a month's balance:
//! shift duration with midnight wrap, the quantized night premium, the
//! working-day count under the configured policy, and the monthly and
//! quarterly aggregators that combine them.

mod monthly;
mod night_premium;
mod quarterly;
mod shift_duration;
mod working_days;

pub use monthly::{calculate_month, expected_hours, shift_line, summarize};
pub use night_premium::{
    NightPremiumResult, calculate_night_premium, is_night_hour, night_premium_hours,
    night_premium_minutes,
};
pub use quarterly::summarize_quarter;
pub use shift_duration::{minutes_to_hours, shift_duration, shift_duration_minutes};
pub use working_days::{
    WorkingDayCount, count_overlapping, count_working_days, overlapping_records,
};
pub use crate::config::WorkingDayPolicy;
