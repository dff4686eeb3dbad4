//! Non-accounting day model.
//!
//! A non-accounting day record excludes an inclusive interval of calendar
//! days (leave, holiday, sickness) from working-day counting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MonthWindow;

/// An inclusive interval of days excluded from working-day counting.
///
/// # Example
///
/// ```
/// use shift_ledger::models::{MonthWindow, NonAccountingDay};
/// use chrono::NaiveDate;
///
/// let leave = NonAccountingDay {
///     id: "nad_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 4, 6).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
///     reason: "Annual leave".to_string(),
/// };
///
/// assert_eq!(leave.span_days().unwrap(), 5);
/// assert!(leave.overlaps(&MonthWindow::new(2026, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAccountingDay {
    /// Unique identifier for the record.
    pub id: String,
    /// First excluded day (inclusive).
    pub start_date: NaiveDate,
    /// Last excluded day (inclusive).
    pub end_date: NaiveDate,
    /// Free-text label. Not used in any computation.
    #[serde(default)]
    pub reason: String,
}

impl NonAccountingDay {
    /// Checks that the interval does not end before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] when `end_date < start_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidInterval {
                record_id: self.id.clone(),
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }

    /// Number of days in the interval, counting both ends.
    pub fn span_days(&self) -> EngineResult<u32> {
        self.validate()?;
        let days = (self.end_date - self.start_date).num_days() + 1;
        // At most the whole supported chrono range, which fits in u32.
        Ok(u32::try_from(days).unwrap_or(u32::MAX))
    }

    /// Checks if the interval touches the month.
    pub fn overlaps(&self, window: &MonthWindow) -> bool {
        window.overlaps(self.start_date, self.end_date)
    }
}
