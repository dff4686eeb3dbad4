//! Working-day counting.
//!
//! A month's working days are its calendar days minus the days excluded by
//! non-accounting-day records that overlap it. How much each record excludes
//! depends on the configured [`WorkingDayPolicy`]:
//!
//! - [`WorkingDayPolicy::Count`]: one day per overlapping record.
//! - [`WorkingDayPolicy::Span`]: the record's full inclusive day span, including
//!   any days that fall outside the month.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::WorkingDayPolicy;
use crate::error::EngineResult;
use crate::models::{MonthWindow, NonAccountingDay};

/// The breakdown of a working-day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayCount {
    /// The policy applied.
    pub policy: WorkingDayPolicy,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Number of records overlapping the month.
    pub overlapping_records: u32,
    /// Days subtracted under the policy. May exceed `days_in_month`.
    pub excluded_days: u32,
    /// `days_in_month - excluded_days`, clamped at zero.
    pub working_days: u32,
}

impl WorkingDayCount {
    /// The unclamped difference, negative when exclusions exceed the month.
    pub fn raw_working_days(&self) -> i64 {
        i64::from(self.days_in_month) - i64::from(self.excluded_days)
    }

    /// Returns true if the exclusions exceeded the month and were clamped.
    pub fn is_clamped(&self) -> bool {
        self.raw_working_days() < 0
    }
}

/// Returns the records that overlap the month, validating every record given.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInterval`] for the first record
/// whose end date precedes its start date, whether or not it overlaps.
pub fn overlapping_records<'a>(
    window: &MonthWindow,
    records: &'a [NonAccountingDay],
) -> EngineResult<Vec<&'a NonAccountingDay>> {
    let mut overlapping = Vec::new();
    for record in records {
        record.validate()?;
        if record.overlaps(window) {
            overlapping.push(record);
        }
    }
    Ok(overlapping)
}

/// Counts the working days in a month.
///
/// # Examples
///
/// ```
/// use shift_ledger::calculation::count_working_days;
/// use shift_ledger::config::WorkingDayPolicy;
/// use shift_ledger::models::{MonthWindow, NonAccountingDay};
/// use chrono::NaiveDate;
///
/// let april = MonthWindow::new(2026, 4).unwrap();
/// let leave = vec![NonAccountingDay {
///     id: "nad_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
///     reason: "Annual leave".to_string(),
/// }];
///
/// let span = count_working_days(&april, &leave, WorkingDayPolicy::Span).unwrap();
/// assert_eq!(span.working_days, 25);
///
/// let count = count_working_days(&april, &leave, WorkingDayPolicy::Count).unwrap();
/// assert_eq!(count.working_days, 29);
/// ```
pub fn count_working_days(
    window: &MonthWindow,
    records: &[NonAccountingDay],
    policy: WorkingDayPolicy,
) -> EngineResult<WorkingDayCount> {
    let overlapping = overlapping_records(window, records)?;
    count_overlapping(window, &overlapping, policy)
}

/// Counts the working days from records already filtered by
/// [`overlapping_records`].
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInterval`] if a record's end date
/// precedes its start date.
pub fn count_overlapping(
    window: &MonthWindow,
    overlapping: &[&NonAccountingDay],
    policy: WorkingDayPolicy,
) -> EngineResult<WorkingDayCount> {
    let days_in_month = window.days_in_month();
    let overlapping_count = u32::try_from(overlapping.len()).unwrap_or(u32::MAX);

    let excluded_days = match policy {
        WorkingDayPolicy::Count => overlapping_count,
        WorkingDayPolicy::Span => {
            let mut total = 0u32;
            for record in overlapping {
                total = total.saturating_add(record.span_days()?);
            }
            total
        }
    };

    let working_days = days_in_month.saturating_sub(excluded_days);

    debug!(
        month = %window,
        policy = %policy,
        days_in_month,
        overlapping_records = overlapping_count,
        excluded_days,
        working_days,
        "Counted working days"
    );

    Ok(WorkingDayCount {
        policy,
        days_in_month,
        overlapping_records: overlapping_count,
        excluded_days,
        working_days,
    })
}
