//! Data access for month views.
//!
//! The engine itself is pure; this module defines the seam through which a
//! month's shifts and non-accounting days are fetched for a user. Both
//! queries must return their complete result set before aggregation starts,
//! so a failed fetch never yields a partial summary.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::summarize;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{MonthView, MonthWindow, NonAccountingDay, Shift};

/// A store of per-user shifts and non-accounting days.
///
/// Implementations report failures as
/// [`crate::error::EngineError::UpstreamFetchFailure`].
pub trait TimesheetSource: Send + Sync {
    /// Shifts with `start <= date <= end`, ordered by date ascending.
    fn shifts_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Shift>>;

    /// Records whose interval intersects `[start, end]`, ordered by start date.
    fn non_accounting_days_overlapping(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<NonAccountingDay>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserTimesheet {
    #[serde(default)]
    shifts: Vec<Shift>,
    #[serde(default)]
    non_accounting_days: Vec<NonAccountingDay>,
}

/// An in-memory [`TimesheetSource`].
///
/// Serializes as a map from user ID to that user's `shifts` and
/// `non_accounting_days`, so a store can be seeded from a JSON snapshot.
///
/// # Example
///
/// ```
/// use shift_ledger::source::{InMemoryTimesheet, TimesheetSource};
/// use shift_ledger::models::Shift;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
/// let mut source = InMemoryTimesheet::new();
/// source.add_shift("user_1", Shift::new("s1", date, "08:00", "17:00"));
///
/// let shifts = source.shifts_between("user_1", date, date).unwrap();
/// assert_eq!(shifts.len(), 1);
/// assert!(source.shifts_between("user_2", date, date).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryTimesheet {
    users: HashMap<String, UserTimesheet>,
}

impl InMemoryTimesheet {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a shift for a user.
    pub fn add_shift(&mut self, user_id: impl Into<String>, shift: Shift) {
        self.users
            .entry(user_id.into())
            .or_default()
            .shifts
            .push(shift);
    }

    /// Records a non-accounting day for a user.
    pub fn add_non_accounting_day(&mut self, user_id: impl Into<String>, record: NonAccountingDay) {
        self.users
            .entry(user_id.into())
            .or_default()
            .non_accounting_days
            .push(record);
    }
}

impl TimesheetSource for InMemoryTimesheet {
    fn shifts_between(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Shift>> {
        let mut shifts: Vec<Shift> = self
            .users
            .get(user_id)
            .map(|user| {
                user.shifts
                    .iter()
                    .filter(|shift| shift.date >= start && shift.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        shifts.sort_by_key(|shift| shift.date);
        Ok(shifts)
    }

    fn non_accounting_days_overlapping(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<NonAccountingDay>> {
        let mut records: Vec<NonAccountingDay> = self
            .users
            .get(user_id)
            .map(|user| {
                user.non_accounting_days
                    .iter()
                    .filter(|record| record.start_date <= end && record.end_date >= start)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by_key(|record| record.start_date);
        Ok(records)
    }
}

/// Fetches a user's month and summarizes it.
///
/// The raw lists are passed through untouched alongside the summary.
///
/// # Errors
///
/// Returns the source's [`crate::error::EngineError::UpstreamFetchFailure`]
/// before any aggregation, or any aggregation error.
pub fn load_month_view(
    source: &dyn TimesheetSource,
    user_id: &str,
    window: MonthWindow,
    config: &EngineConfig,
) -> EngineResult<MonthView> {
    let shifts = source
        .shifts_between(user_id, window.start(), window.end())
        .inspect_err(|e| warn!(user_id, month = %window, error = %e, "Shift fetch failed"))?;
    let non_accounting_days = source
        .non_accounting_days_overlapping(user_id, window.start(), window.end())
        .inspect_err(|e| {
            warn!(user_id, month = %window, error = %e, "Non-accounting day fetch failed")
        })?;

    debug!(
        user_id,
        month = %window,
        shifts = shifts.len(),
        non_accounting_days = non_accounting_days.len(),
        "Fetched month"
    );

    let summary = summarize(window, &shifts, &non_accounting_days, config)?;
    Ok(MonthView {
        summary,
        shifts,
        non_accounting_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str, start: &str, end: &str) -> NonAccountingDay {
        NonAccountingDay {
            id: id.to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            reason: "Leave".to_string(),
        }
    }

    fn sample_source() -> InMemoryTimesheet {
        let mut source = InMemoryTimesheet::new();
        source.add_shift("ana", Shift::new("s3", make_date("2026-04-20"), "08:00", "16:00"));
        source.add_shift("ana", Shift::new("s1", make_date("2026-04-01"), "22:00", "06:00"));
        source.add_shift("ana", Shift::new("s0", make_date("2026-03-31"), "08:00", "16:00"));
        source.add_shift("ana", Shift::new("s4", make_date("2026-05-01"), "08:00", "16:00"));
        source.add_non_accounting_day("ana", record("n2", "2026-04-30", "2026-05-02"));
        source.add_non_accounting_day("ana", record("n1", "2026-03-28", "2026-04-01"));
        source.add_non_accounting_day("ana", record("n0", "2026-02-01", "2026-02-03"));
        source.add_shift("bo", Shift::new("b1", make_date("2026-04-10"), "08:00", "09:00"));
        source
    }

    struct FailingSource;

    impl TimesheetSource for FailingSource {
        fn shifts_between(&self, _: &str, _: NaiveDate, _: NaiveDate) -> EngineResult<Vec<Shift>> {
            Err(EngineError::UpstreamFetchFailure {
                query: "shifts".to_string(),
                message: "connection reset".to_string(),
            })
        }

        fn non_accounting_days_overlapping(
            &self,
            _: &str,
            _: NaiveDate,
            _: NaiveDate,
        ) -> EngineResult<Vec<NonAccountingDay>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_shifts_between_is_inclusive_and_sorted() {
        let source = sample_source();
        let shifts = source
            .shifts_between("ana", make_date("2026-04-01"), make_date("2026-04-30"))
            .unwrap();
        let ids: Vec<&str> = shifts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_overlap_query_includes_straddling_records() {
        let source = sample_source();
        let records = source
            .non_accounting_days_overlapping("ana", make_date("2026-04-01"), make_date("2026-04-30"))
            .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2"]);
    }

    #[test]
    fn test_unknown_user_has_no_data() {
        let source = sample_source();
        let shifts = source
            .shifts_between("nobody", make_date("2026-01-01"), make_date("2026-12-31"))
            .unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_seed_from_json_snapshot() {
        let json = r#"{
            "ana": {
                "shifts": [
                    {"id": "s1", "date": "2026-04-01", "start_time": "08:00:00", "end_time": "12:00:00"}
                ],
                "non_accounting_days": [
                    {"id": "n1", "start_date": "2026-04-02", "end_date": "2026-04-02"}
                ]
            },
            "bo": {}
        }"#;

        let source: InMemoryTimesheet = serde_json::from_str(json).unwrap();
        let window = MonthWindow::new(2026, 4).unwrap();
        let view = load_month_view(&source, "ana", window, &EngineConfig::default()).unwrap();
        assert_eq!(view.summary.worked_hours, Decimal::from(4));
        assert_eq!(view.summary.working_days, 29);

        let empty = load_month_view(&source, "bo", window, &EngineConfig::default()).unwrap();
        assert!(empty.shifts.is_empty());
    }

    #[test]
    fn test_load_month_view() {
        let source = sample_source();
        let window = MonthWindow::new(2026, 4).unwrap();
        let view = load_month_view(&source, "ana", window, &EngineConfig::default()).unwrap();

        assert_eq!(view.shifts.len(), 2);
        assert_eq!(view.non_accounting_days.len(), 2);
        // 8 + 1 premium + 8
        assert_eq!(view.summary.worked_hours, Decimal::from(17));
        // Span policy: 5 + 3 days excluded.
        assert_eq!(view.summary.working_days, 22);
        assert_eq!(view.summary.non_accounting_day_count, 2);
    }

    #[test]
    fn test_load_month_view_isolates_users() {
        let source = sample_source();
        let window = MonthWindow::new(2026, 4).unwrap();
        let view = load_month_view(&source, "bo", window, &EngineConfig::default()).unwrap();
        assert_eq!(view.summary.worked_hours, Decimal::ONE);
        assert_eq!(view.summary.working_days, 30);
    }

    #[test]
    fn test_fetch_failure_is_returned_before_aggregation() {
        let window = MonthWindow::new(2026, 4).unwrap();
        match load_month_view(&FailingSource, "ana", window, &EngineConfig::default()) {
            Err(EngineError::UpstreamFetchFailure { query, .. }) => assert_eq!(query, "shifts"),
            other => panic!("Expected UpstreamFetchFailure, got {:?}", other),
        }
    }
}
