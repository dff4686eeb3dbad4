//! Calendar month and quarter windows.
//!
//! This module contains the [`MonthWindow`] and [`Quarter`] types that define
//! the calculation context for a summary. Every entry point takes an explicit
//! reference date instead of reading the wall clock, so results are
//! deterministic.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month, `[start(), end()]` inclusive on both ends.
///
/// # Example
///
/// ```
/// use shift_ledger::models::MonthWindow;
/// use chrono::NaiveDate;
///
/// let window = MonthWindow::containing(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
///
/// assert_eq!(window.start(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(window.end(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(window.days_in_month(), 29);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthWindow {
    year: i32,
    month: u32,
}

impl MonthWindow {
    /// Creates a window for the given year and month (1-12).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when the month is out of range or
    /// the year is outside chrono's supported calendar.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::containing)
            .ok_or_else(|| EngineError::InvalidMonth {
                value: format!("{:04}-{:02}", year, month),
            })
    }

    /// Returns the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Resolves a month route identifier.
    ///
    /// Accepts `yyyy-MM-dd` or `yyyy-MM`. A missing or unparseable identifier
    /// falls back to the month containing `today`, which the caller supplies.
    ///
    /// ```
    /// use shift_ledger::models::MonthWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    ///
    /// assert_eq!(MonthWindow::from_route_id(Some("2026-03-01"), today).month(), 3);
    /// assert_eq!(MonthWindow::from_route_id(Some("2026-04"), today).month(), 4);
    /// assert_eq!(MonthWindow::from_route_id(Some("garbage"), today).month(), 10);
    /// assert_eq!(MonthWindow::from_route_id(None, today).month(), 10);
    /// ```
    pub fn from_route_id(id: Option<&str>, today: NaiveDate) -> Self {
        id.and_then(|id| Self::parse_route_id(id).ok())
            .unwrap_or_else(|| Self::containing(today))
    }

    /// Parses a `yyyy-MM-dd` or `yyyy-MM` identifier strictly.
    pub fn parse_route_id(id: &str) -> EngineResult<Self> {
        let id = id.trim();
        if let Ok(date) = NaiveDate::parse_from_str(id, "%Y-%m-%d") {
            return Ok(Self::containing(date));
        }
        NaiveDate::parse_from_str(&format!("{}-01", id), "%Y-%m-%d")
            .map(Self::containing)
            .map_err(|_| EngineError::InvalidMonth {
                value: id.to_string(),
            })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn start(&self) -> NaiveDate {
        // Constructed only from a valid date, so day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last day of the month.
    pub fn end(&self) -> NaiveDate {
        self.start()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of calendar days in the month (28-31).
    pub fn days_in_month(&self) -> u32 {
        self.end().day()
    }

    /// Checks if `date` falls inside the month (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// Checks if the inclusive interval `[start, end]` touches the month.
    ///
    /// A record need only touch a boundary day to overlap.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end() && end >= self.start()
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        self.start()
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        self.start()
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// The canonical route identifier, `yyyy-MM-01`.
    pub fn route_id(&self) -> String {
        self.start().format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthWindow {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_route_id(&value)
    }
}

impl From<MonthWindow> for String {
    fn from(window: MonthWindow) -> Self {
        window.to_string()
    }
}

/// A calendar quarter (Q1 = January to March).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quarter {
    year: i32,
    quarter: u32,
}

impl Quarter {
    /// Creates a quarter, validating `quarter` is in 1-4.
    pub fn new(year: i32, quarter: u32) -> EngineResult<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(EngineError::InvalidMonth {
                value: format!("{:04}-Q{}", year, quarter),
            });
        }
        // Reject years chrono cannot represent up front.
        MonthWindow::new(year, (quarter - 1) * 3 + 1)?;
        Ok(Self { year, quarter })
    }

    /// Returns the quarter containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The quarter number (1-4).
    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    /// The three months of the quarter, in order.
    pub fn months(&self) -> [MonthWindow; 3] {
        let first = MonthWindow {
            year: self.year,
            month: (self.quarter - 1) * 3 + 1,
        };
        let second = first.next();
        [first, second, second.next()]
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-Q{}", self.year, self.quarter)
    }
}
