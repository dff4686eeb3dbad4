//! Request types for the shift ledger API.
//!
//! This module defines the JSON request structures for the `/summary` and
//! `/quarter` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{NonAccountingDay, Shift};

/// Request body for the `/summary` endpoint.
///
/// The month summarized is the one containing `reference_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Any date inside the month to summarize.
    pub reference_date: NaiveDate,
    /// The shifts worked in the month.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
    /// Non-accounting-day records that may overlap the month.
    #[serde(default)]
    pub non_accounting_days: Vec<NonAccountingDayRequest>,
}

/// Request body for the `/quarter` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterRequest {
    /// The calendar year.
    pub year: i32,
    /// The quarter number (1-4).
    pub quarter: u32,
    /// The shifts worked in the quarter.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
    /// Non-accounting-day records that may overlap the quarter.
    #[serde(default)]
    pub non_accounting_days: Vec<NonAccountingDayRequest>,
}

/// Shift information in a request.
///
/// Times are kept as strings so that an unparseable value is reported
/// against its shift instead of rejecting the whole body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The accounting date of the shift.
    pub date: NaiveDate,
    /// Start time of day, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// End time of day. Earlier than `start_time` means the next day.
    pub end_time: String,
}

/// Non-accounting-day information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonAccountingDayRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// First excluded day (inclusive).
    pub start_date: NaiveDate,
    /// Last excluded day (inclusive).
    pub end_date: NaiveDate,
    /// Optional label.
    #[serde(default)]
    pub reason: String,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl From<NonAccountingDayRequest> for NonAccountingDay {
    fn from(req: NonAccountingDayRequest) -> Self {
        NonAccountingDay {
            id: req.id,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
        }
    }
}
