//! Summary models produced by the engine.
//!
//! This module contains the [`MonthSummary`] type and its associated structures
//! that capture the outputs of a monthly aggregation: the headline figures,
//! the per-shift breakdown and an audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkingDayPolicy;

use super::{ClockTime, MonthWindow, NonAccountingDay, Shift};

/// The headline figures for one month.
///
/// Derived on every query; it has no identity beyond a single aggregation.
///
/// # Example
///
/// ```
/// use shift_ledger::config::WorkingDayPolicy;
/// use shift_ledger::models::{MonthSummary, MonthWindow};
/// use rust_decimal::Decimal;
///
/// let summary = MonthSummary {
///     month: MonthWindow::new(2026, 4).unwrap(),
///     policy: WorkingDayPolicy::Span,
///     days_in_month: 30,
///     non_accounting_day_count: 0,
///     working_days: 30,
///     expected_hours: Decimal::from(160),
///     worked_hours: Decimal::from(150),
///     balance_hours: Decimal::from(-10),
/// };
/// assert!(summary.balance_hours.is_sign_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month summarized.
    pub month: MonthWindow,
    /// The working-day policy used for `working_days`.
    pub policy: WorkingDayPolicy,
    /// Calendar days in the month (28-31).
    pub days_in_month: u32,
    /// Number of non-accounting-day records overlapping the month.
    ///
    /// A record count for display, independent of the working-day policy.
    pub non_accounting_day_count: u32,
    /// Days counted toward the expected-hours target.
    pub working_days: u32,
    /// Target hours for the month.
    pub expected_hours: Decimal,
    /// Worked hours including night premium.
    pub worked_hours: Decimal,
    /// `worked_hours - expected_hours`.
    pub balance_hours: Decimal,
}

/// Per-shift breakdown of the worked-hours figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLine {
    /// The ID of the shift.
    pub shift_id: String,
    /// The shift's accounting date.
    pub date: NaiveDate,
    /// Parsed start time.
    pub start_time: ClockTime,
    /// Parsed end time.
    pub end_time: ClockTime,
    /// Whether the end time falls on the following day.
    pub crosses_midnight: bool,
    /// Elapsed minutes.
    pub base_minutes: i64,
    /// Night premium credit in minutes.
    pub night_premium_minutes: i64,
    /// Elapsed hours.
    pub base_hours: Decimal,
    /// Night premium credit in hours.
    pub night_premium_hours: Decimal,
    /// `base_hours + night_premium_hours`.
    pub worked_hours: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but look suspicious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A month summary together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalculation {
    /// The headline figures.
    pub summary: MonthSummary,
    /// One line per shift, in input order.
    pub shift_lines: Vec<ShiftLine>,
    /// Rule-by-rule trace.
    pub audit_trace: AuditTrace,
}

/// Totals across the three months of a quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterSummary {
    /// The calendar year.
    pub year: i32,
    /// The quarter number (1-4).
    pub quarter: u32,
    /// Summaries of each month, in order.
    pub months: Vec<MonthSummary>,
    /// Sum of monthly expected hours.
    pub expected_hours: Decimal,
    /// Sum of monthly worked hours.
    pub worked_hours: Decimal,
    /// `worked_hours - expected_hours`.
    pub balance_hours: Decimal,
}

/// What a month page renders: the summary plus the raw lists, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    /// The computed summary.
    pub summary: MonthSummary,
    /// Shifts in the month, as delivered by the data layer.
    pub shifts: Vec<Shift>,
    /// Non-accounting-day records overlapping the month, as delivered.
    pub non_accounting_days: Vec<NonAccountingDay>,
}
