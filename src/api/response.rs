//! Response types for the shift ledger API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::MonthView;

/// Metadata wrapped around every calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse<T> {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The version of the policy configuration used.
    pub policy_version: String,
    /// How long the calculation took, in microseconds.
    pub duration_us: u64,
    /// The calculation result itself.
    #[serde(flatten)]
    pub result: T,
}

/// Response body for a user's month page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthViewResponse {
    /// The user whose month is shown.
    pub user_id: String,
    /// Route identifier of this month (`yyyy-MM-01`).
    pub month_id: String,
    /// Route identifier of the previous month.
    pub previous_month_id: String,
    /// Route identifier of the next month.
    pub next_month_id: String,
    /// The summary and the raw lists.
    #[serde(flatten)]
    pub view: MonthView,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::MalformedTimeValue {
                shift_id,
                field,
                value,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_TIME_VALUE",
                    format!("Malformed {} '{}' on shift '{}'", field, value, shift_id),
                    "Times of day must be HH:MM or HH:MM:SS",
                ),
            },
            EngineError::InvalidInterval {
                record_id,
                start_date,
                end_date,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    format!(
                        "Record '{}' ends on {} before it starts on {}",
                        record_id, end_date, start_date
                    ),
                    "A non-accounting day's end date must not precede its start date",
                ),
            },
            EngineError::InvalidMonth { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_MONTH", format!("Invalid month: {}", value)),
            },
            EngineError::UpstreamFetchFailure { query, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_FETCH_FAILURE",
                    format!("Failed to fetch {}", query),
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_malformed_time_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::MalformedTimeValue {
            shift_id: "shift_001".to_string(),
            field: "end_time".to_string(),
            value: "99:00".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MALFORMED_TIME_VALUE");
        assert!(api_error.error.message.contains("shift_001"));
    }

    #[test]
    fn test_invalid_interval_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidInterval {
            record_id: "nad_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INTERVAL");
    }

    #[test]
    fn test_upstream_failure_maps_to_502() {
        let api_error: ApiErrorResponse = EngineError::UpstreamFetchFailure {
            query: "shifts".to_string(),
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.error.details.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            field: "night_premium.end_hour".to_string(),
            message: "must be between 0 and 23".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
