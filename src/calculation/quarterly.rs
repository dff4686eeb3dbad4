//! Quarterly totals.
//!
//! A quarter is summarized month by month; shifts are assigned to the month
//! containing their date and each month applies its own working-day count.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{NonAccountingDay, Quarter, QuarterSummary, Shift};

use super::monthly::summarize;

/// Summarizes the three months of a quarter and totals them.
///
/// Shifts dated outside the quarter are ignored. Every record is validated,
/// and each month counts only the records overlapping it.
///
/// # Errors
///
/// Propagates the first error from any month, see [`super::calculate_month`].
///
/// # Example
///
/// ```
/// use shift_ledger::calculation::summarize_quarter;
/// use shift_ledger::config::EngineConfig;
/// use shift_ledger::models::{Quarter, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let q2 = Quarter::new(2026, 2).unwrap();
/// let shifts = vec![Shift::new("s1", NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(), "08:00", "16:00")];
///
/// let summary = summarize_quarter(q2, &shifts, &[], &EngineConfig::default()).unwrap();
/// assert_eq!(summary.months.len(), 3);
/// assert_eq!(summary.worked_hours, Decimal::from(8));
/// ```
pub fn summarize_quarter(
    quarter: Quarter,
    shifts: &[Shift],
    records: &[NonAccountingDay],
    config: &EngineConfig,
) -> EngineResult<QuarterSummary> {
    let mut months = Vec::with_capacity(3);
    for window in quarter.months() {
        let month_shifts: Vec<Shift> = shifts
            .iter()
            .filter(|shift| window.contains(shift.date))
            .cloned()
            .collect();
        months.push(summarize(window, &month_shifts, records, config)?);
    }

    let expected_hours: Decimal = months.iter().map(|m| m.expected_hours).sum();
    let worked_hours: Decimal = months.iter().map(|m| m.worked_hours).sum();

    debug!(
        quarter = %quarter,
        expected_hours = %expected_hours.round_dp(2),
        worked_hours = %worked_hours.round_dp(2),
        "Aggregated quarter"
    );

    Ok(QuarterSummary {
        year: quarter.year(),
        quarter: quarter.quarter(),
        months,
        expected_hours,
        worked_hours,
        balance_hours: worked_hours - expected_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::MonthWindow;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift::new(id, make_date(date), start, end)
    }

    /// QS-001: empty quarter expects three full targets
    #[test]
    fn test_empty_quarter() {
        let summary =
            summarize_quarter(Quarter::new(2026, 1).unwrap(), &[], &[], &EngineConfig::default())
                .unwrap();

        let months: Vec<MonthWindow> = summary.months.iter().map(|m| m.month).collect();
        assert_eq!(
            months,
            vec![
                MonthWindow::new(2026, 1).unwrap(),
                MonthWindow::new(2026, 2).unwrap(),
                MonthWindow::new(2026, 3).unwrap(),
            ]
        );
        // 31, 28 and 31 days in the month, but expected hours scale on working days.
        assert_eq!(summary.months[1].working_days, 28);
        assert_eq!(summary.worked_hours, Decimal::ZERO);
        assert_eq!(summary.balance_hours, -summary.expected_hours);
    }

    /// QS-002: shifts land in the month of their date
    #[test]
    fn test_shifts_are_partitioned_by_month() {
        let shifts = vec![
            shift("apr", "2026-04-30", "22:00", "06:00"),
            shift("may", "2026-05-01", "08:00", "12:00"),
            shift("jun", "2026-06-15", "08:00", "10:00"),
            shift("jul", "2026-07-01", "08:00", "18:00"),
        ];

        let summary =
            summarize_quarter(Quarter::new(2026, 2).unwrap(), &shifts, &[], &EngineConfig::default())
                .unwrap();

        assert_eq!(summary.months[0].worked_hours, dec("9"));
        assert_eq!(summary.months[1].worked_hours, dec("4"));
        assert_eq!(summary.months[2].worked_hours, dec("2"));
        assert_eq!(summary.worked_hours, dec("15"));
    }

    /// QS-003: a record counts in every month it overlaps
    #[test]
    fn test_record_spanning_two_months() {
        let records = vec![NonAccountingDay {
            id: "leave".to_string(),
            start_date: make_date("2026-04-29"),
            end_date: make_date("2026-05-02"),
            reason: String::new(),
        }];

        let summary = summarize_quarter(
            Quarter::new(2026, 2).unwrap(),
            &[],
            &records,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.months[0].non_accounting_day_count, 1);
        assert_eq!(summary.months[1].non_accounting_day_count, 1);
        assert_eq!(summary.months[2].non_accounting_day_count, 0);
        assert_eq!(summary.months[2].working_days, 30);
    }

    #[test]
    fn test_totals_equal_sum_of_months() {
        let shifts = vec![shift("s", "2026-08-10", "23:00", "07:00")];
        let summary =
            summarize_quarter(Quarter::new(2026, 3).unwrap(), &shifts, &[], &EngineConfig::default())
                .unwrap();

        let expected: Decimal = summary.months.iter().map(|m| m.expected_hours).sum();
        assert_eq!(summary.expected_hours, expected);
        assert_eq!(summary.balance_hours, summary.worked_hours - summary.expected_hours);
    }

    #[test]
    fn test_malformed_shift_in_quarter_fails() {
        let shifts = vec![shift("bad", "2026-11-03", "8 o'clock", "17:00")];
        let result =
            summarize_quarter(Quarter::new(2026, 4).unwrap(), &shifts, &[], &EngineConfig::default());
        assert!(matches!(result, Err(EngineError::MalformedTimeValue { .. })));
    }
}
