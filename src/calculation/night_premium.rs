//! Night premium calculation.
//!
//! Hours worked in the night window earn extra credited time on top of their
//! elapsed duration. The credit is quantized: the shift is walked in
//! whole-hour steps from its start, and every step whose starting hour of day
//! falls in the window earns a fixed number of minutes (10 by default), not a
//! full hour. Minutes within the hour are ignored, and a partial final step
//! earns the full credit when its starting hour qualifies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::NightPremiumConfig;
use crate::models::ClockTime;

use super::shift_duration::{minutes_to_hours, shift_duration_minutes};

/// The result of a night premium calculation for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightPremiumResult {
    /// Number of whole-hour steps that started inside the night window.
    pub qualifying_steps: u32,
    /// Total credit in minutes.
    pub minutes: i64,
    /// Total credit in hours.
    pub hours: Decimal,
}

/// Returns true if `hour` lies in the configured night window.
///
/// The window `[start_hour, end_hour)` wraps across midnight when
/// `start_hour > end_hour`. Equal bounds make an empty window.
///
/// # Example
///
/// ```
/// use shift_ledger::calculation::is_night_hour;
/// use shift_ledger::config::NightPremiumConfig;
///
/// let window = NightPremiumConfig::default(); // 23:00 to 05:00
/// assert!(is_night_hour(23, &window));
/// assert!(is_night_hour(4, &window));
/// assert!(!is_night_hour(5, &window));
/// assert!(!is_night_hour(22, &window));
/// ```
pub fn is_night_hour(hour: u8, config: &NightPremiumConfig) -> bool {
    let (start, end) = (config.start_hour, config.end_hour);
    if start > end {
        hour >= start || hour < end
    } else {
        hour >= start && hour < end
    }
}

/// Walks the shift hour by hour and credits each qualifying step.
///
/// The walk uses the same midnight-wrap rule as the duration, starts at the
/// start instant and stops strictly before the end instant. It takes at most
/// 24 steps.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::calculate_night_premium;
/// use shift_ledger::config::NightPremiumConfig;
/// use shift_ledger::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// // 22:00 to 06:00 starts steps at 22, 23, 0, 1, 2, 3, 4, 5.
/// // Six of them (23 through 4) are night hours: 6 x 10 minutes = 1 hour.
/// let result = calculate_night_premium(
///     ClockTime::new(22, 0).unwrap(),
///     ClockTime::new(6, 0).unwrap(),
///     &NightPremiumConfig::default(),
/// );
/// assert_eq!(result.qualifying_steps, 6);
/// assert_eq!(result.minutes, 60);
/// assert_eq!(result.hours, Decimal::ONE);
/// ```
pub fn calculate_night_premium(
    start: ClockTime,
    end: ClockTime,
    config: &NightPremiumConfig,
) -> NightPremiumResult {
    let duration = shift_duration_minutes(start, end);

    let mut qualifying_steps = 0u32;
    let mut offset = 0i64;
    while offset < duration {
        if is_night_hour(start.plus_minutes(offset).hour(), config) {
            qualifying_steps += 1;
        }
        offset += 60;
    }

    let minutes = i64::from(qualifying_steps) * i64::from(config.credit_minutes);
    NightPremiumResult {
        qualifying_steps,
        minutes,
        hours: minutes_to_hours(minutes),
    }
}

/// Night premium credit in minutes.
pub fn night_premium_minutes(start: ClockTime, end: ClockTime, config: &NightPremiumConfig) -> i64 {
    calculate_night_premium(start, end, config).minutes
}

/// Night premium credit in hours.
pub fn night_premium_hours(start: ClockTime, end: ClockTime, config: &NightPremiumConfig) -> Decimal {
    calculate_night_premium(start, end, config).hours
}
