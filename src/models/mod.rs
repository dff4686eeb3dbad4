//! Core data models for the shift ledger.
//!
//! This module contains the input records handed over by the data layer
//! and the summary values produced by the engine.

mod clock_time;
mod month;
mod non_accounting_day;
mod shift;
mod summary;

pub use clock_time::{ClockTime, MINUTES_PER_DAY, ParseClockTimeError};
pub use month::{MonthWindow, Quarter};
pub use non_accounting_day::NonAccountingDay;
pub use shift::Shift;
pub use summary::{
    AuditStep, AuditTrace, AuditWarning, MonthSummary, MonthView, MonthlyCalculation,
    QuarterSummary, ShiftLine,
};
