//! Monthly aggregation.
//!
//! Combines the per-shift duration and night premium with the working-day
//! count into a [`MonthSummary`]:
//!
//! - `expected_hours = monthly_target_hours * working_days / normalized_month_days`
//! - `worked_hours = Σ (duration + night premium)` over the given shifts
//!
//! Durations and premiums are accumulated as whole minutes and converted to
//! hours once, so the result does not depend on shift order.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::config::{EngineConfig, ExpectedHoursConfig, WorkingDayPolicy};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, MonthSummary, MonthWindow, MonthlyCalculation,
    NonAccountingDay, Shift, ShiftLine,
};

use super::night_premium::calculate_night_premium;
use super::shift_duration::{minutes_to_hours, shift_duration_minutes};
use super::working_days::{WorkingDayCount, count_overlapping, overlapping_records};

/// Expected hours for a number of working days.
///
/// # Example
///
/// ```
/// use shift_ledger::calculation::expected_hours;
/// use shift_ledger::config::ExpectedHoursConfig;
/// use rust_decimal::Decimal;
///
/// assert_eq!(expected_hours(21, &ExpectedHoursConfig::default()), Decimal::from(112));
/// ```
pub fn expected_hours(working_days: u32, config: &ExpectedHoursConfig) -> Decimal {
    if config.normalized_month_days == 0 {
        return Decimal::ZERO;
    }
    config.monthly_target_hours * Decimal::from(working_days)
        / Decimal::from(config.normalized_month_days)
}

/// Builds the per-shift breakdown for one shift.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedTimeValue`] if either time
/// cannot be parsed.
pub fn shift_line(shift: &Shift, config: &EngineConfig) -> EngineResult<ShiftLine> {
    let (start, end) = shift.clock_times()?;
    let base_minutes = shift_duration_minutes(start, end);
    let premium = calculate_night_premium(start, end, &config.night_premium);

    trace!(
        shift_id = %shift.id,
        base_minutes,
        night_premium_minutes = premium.minutes,
        "Computed shift line"
    );

    Ok(ShiftLine {
        shift_id: shift.id.clone(),
        date: shift.date,
        start_time: start,
        end_time: end,
        crosses_midnight: start.wraps_midnight(end),
        base_minutes,
        night_premium_minutes: premium.minutes,
        base_hours: minutes_to_hours(base_minutes),
        night_premium_hours: premium.hours,
        worked_hours: minutes_to_hours(base_minutes + premium.minutes),
    })
}

/// Aggregates one month and records how each figure was reached.
///
/// Every shift passed in is counted, whatever its date; callers are expected
/// to pass the month's shifts. Shifts dated outside the month produce a
/// warning in the audit trace.
///
/// # Errors
///
/// - [`crate::error::EngineError::MalformedTimeValue`] for the first shift with
///   an unparseable time.
/// - [`crate::error::EngineError::InvalidInterval`] for the first record whose
///   end date precedes its start date.
///
/// No partial summary is produced when either occurs.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::calculate_month;
/// use shift_ledger::config::EngineConfig;
/// use shift_ledger::models::{MonthWindow, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let window = MonthWindow::new(2026, 4).unwrap();
/// let shifts = vec![
///     Shift::new("s1", NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), "08:00", "17:00"),
///     Shift::new("s2", NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(), "22:00", "06:00"),
/// ];
///
/// let result = calculate_month(window, &shifts, &[], &EngineConfig::default()).unwrap();
/// assert_eq!(result.summary.worked_hours, Decimal::from(18)); // 9 + (8 + 1)
/// assert_eq!(result.summary.expected_hours, Decimal::from(160));
/// ```
pub fn calculate_month(
    window: MonthWindow,
    shifts: &[Shift],
    records: &[NonAccountingDay],
    config: &EngineConfig,
) -> EngineResult<MonthlyCalculation> {
    let policy = config.working_days.policy;
    let mut audit_trace = AuditTrace::default();

    let overlapping = overlapping_records(&window, records)?;
    let count = count_overlapping(&window, &overlapping, policy)?;

    if count.is_clamped() {
        audit_trace.warnings.push(AuditWarning {
            code: "working_days_clamped".to_string(),
            message: format!(
                "Excluded days ({}) exceed the {} days of {}; working days clamped to 0",
                count.excluded_days, count.days_in_month, window
            ),
            severity: "medium".to_string(),
        });
    }
    if policy == WorkingDayPolicy::Span {
        for record in overlapping
            .iter()
            .filter(|r| r.start_date < window.start() || r.end_date > window.end())
        {
            audit_trace.warnings.push(AuditWarning {
                code: "record_extends_beyond_month".to_string(),
                message: format!(
                    "Record '{}' ({} to {}) extends beyond {}; its full span is excluded",
                    record.id, record.start_date, record.end_date, window
                ),
                severity: "low".to_string(),
            });
        }
    }
    audit_trace.steps.push(working_days_step(1, &window, &count));

    let mut shift_lines = Vec::with_capacity(shifts.len());
    let mut base_minutes = 0i64;
    let mut premium_minutes = 0i64;
    for shift in shifts {
        let line = shift_line(shift, config)?;
        if !window.contains(line.date) {
            audit_trace.warnings.push(AuditWarning {
                code: "shift_outside_month".to_string(),
                message: format!(
                    "Shift '{}' is dated {}, outside {}",
                    line.shift_id, line.date, window
                ),
                severity: "low".to_string(),
            });
        }
        base_minutes += line.base_minutes;
        premium_minutes += line.night_premium_minutes;
        shift_lines.push(line);
    }

    let worked_hours = minutes_to_hours(base_minutes + premium_minutes);
    audit_trace.steps.push(AuditStep {
        step_number: 2,
        rule_id: "worked_hours".to_string(),
        rule_name: "Worked Hours".to_string(),
        input: serde_json::json!({
            "shift_count": shift_lines.len(),
            "night_window_start_hour": config.night_premium.start_hour,
            "night_window_end_hour": config.night_premium.end_hour,
            "night_credit_minutes": config.night_premium.credit_minutes
        }),
        output: serde_json::json!({
            "base_minutes": base_minutes,
            "night_premium_minutes": premium_minutes,
            "worked_hours": worked_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{} shift(s): {} elapsed minutes + {} night premium minutes = {} hours",
            shift_lines.len(),
            base_minutes,
            premium_minutes,
            worked_hours.round_dp(2).normalize()
        ),
    });

    let expected = expected_hours(count.working_days, &config.expected_hours);
    audit_trace.steps.push(AuditStep {
        step_number: 3,
        rule_id: "expected_hours".to_string(),
        rule_name: "Expected Hours".to_string(),
        input: serde_json::json!({
            "working_days": count.working_days,
            "monthly_target_hours": config.expected_hours.monthly_target_hours.normalize().to_string(),
            "normalized_month_days": config.expected_hours.normalized_month_days
        }),
        output: serde_json::json!({
            "expected_hours": expected.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} / {} = {} hours",
            config.expected_hours.monthly_target_hours.normalize(),
            count.working_days,
            config.expected_hours.normalized_month_days,
            expected.round_dp(2).normalize()
        ),
    });

    let summary = MonthSummary {
        month: window,
        policy,
        days_in_month: count.days_in_month,
        non_accounting_day_count: count.overlapping_records,
        working_days: count.working_days,
        expected_hours: expected,
        worked_hours,
        balance_hours: worked_hours - expected,
    };

    debug!(
        month = %window,
        shifts = shift_lines.len(),
        working_days = summary.working_days,
        expected_hours = %summary.expected_hours.round_dp(2),
        worked_hours = %summary.worked_hours.round_dp(2),
        warnings = audit_trace.warnings.len(),
        "Aggregated month"
    );

    Ok(MonthlyCalculation {
        summary,
        shift_lines,
        audit_trace,
    })
}

/// Aggregates one month, returning only the headline figures.
///
/// # Errors
///
/// Same as [`calculate_month`].
pub fn summarize(
    window: MonthWindow,
    shifts: &[Shift],
    records: &[NonAccountingDay],
    config: &EngineConfig,
) -> EngineResult<MonthSummary> {
    calculate_month(window, shifts, records, config).map(|calculation| calculation.summary)
}

fn working_days_step(step_number: u32, window: &MonthWindow, count: &WorkingDayCount) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "working_days".to_string(),
        rule_name: "Working Days".to_string(),
        input: serde_json::json!({
            "month": window.to_string(),
            "days_in_month": count.days_in_month,
            "overlapping_records": count.overlapping_records,
            "policy": count.policy
        }),
        output: serde_json::json!({
            "excluded_days": count.excluded_days,
            "working_days": count.working_days
        }),
        reasoning: format!(
            "{} days in {} minus {} excluded day(s) under the {} policy = {} working days",
            count.days_in_month, window, count.excluded_days, count.policy, count.working_days
        ),
    }
}
