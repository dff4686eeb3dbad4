//! Error types for the shift ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a monthly summary.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift ledger.
///
/// All operations in the engine return this error type. The engine never
/// recovers from these itself: any inconsistency is reported to the caller.
///
/// # Example
///
/// ```
/// use shift_ledger::error::EngineError;
///
/// let error = EngineError::MalformedTimeValue {
///     shift_id: "shift_001".to_string(),
///     field: "start_time".to_string(),
///     value: "25:00".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed start_time '25:00' on shift 'shift_001'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was parsed but is out of range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A shift's start or end time could not be parsed as a time of day.
    #[error("Malformed {field} '{value}' on shift '{shift_id}'")]
    MalformedTimeValue {
        /// The ID of the shift carrying the bad value.
        shift_id: String,
        /// Which field was malformed (`start_time` or `end_time`).
        field: String,
        /// The raw value as received.
        value: String,
    },

    /// A non-accounting-day record ends before it starts.
    #[error("Invalid interval on record '{record_id}': end {end_date} is before start {start_date}")]
    InvalidInterval {
        /// The ID of the offending record.
        record_id: String,
        /// The record's start date.
        start_date: NaiveDate,
        /// The record's end date.
        end_date: NaiveDate,
    },

    /// A month or quarter identifier could not be interpreted.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The rejected identifier or component.
        value: String,
    },

    /// The data-access layer failed to deliver a result set.
    #[error("Upstream fetch '{query}' failed: {message}")]
    UpstreamFetchFailure {
        /// The query that failed.
        query: String,
        /// The reported failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
