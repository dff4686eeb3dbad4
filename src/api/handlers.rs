//! HTTP request handlers for the shift ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_month, summarize_quarter};
use crate::error::EngineError;
use crate::models::{MonthWindow, NonAccountingDay, Quarter, Shift};
use crate::source::load_month_view;

use super::request::{QuarterRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, MonthViewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/quarter", post(quarter_handler))
        .route("/users/:user_id/months", get(current_month_handler))
        .route("/users/:user_id/months/:month_id", get(month_view_handler))
        .with_state(state)
}

/// Handler for POST /summary.
///
/// Summarizes the month containing the request's reference date.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let window = MonthWindow::containing(request.reference_date);
    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();
    let records: Vec<NonAccountingDay> = request
        .non_accounting_days
        .into_iter()
        .map(Into::into)
        .collect();

    let start_time = Instant::now();
    match calculate_month(window, &shifts, &records, state.config().engine()) {
        Ok(calculation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                month = %window,
                shifts_count = shifts.len(),
                worked_hours = %calculation.summary.worked_hours.round_dp(2),
                balance_hours = %calculation.summary.balance_hours.round_dp(2),
                duration_us = duration.as_micros(),
                "Summary completed successfully"
            );
            json_response(envelope(&state, calculation, duration))
        }
        Err(err) => engine_error_response(err, correlation_id, "Summary failed"),
    }
}

/// Handler for POST /quarter.
async fn quarter_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuarterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quarter request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let quarter = match Quarter::new(request.year, request.quarter) {
        Ok(quarter) => quarter,
        Err(err) => return engine_error_response(err, correlation_id, "Invalid quarter"),
    };
    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();
    let records: Vec<NonAccountingDay> = request
        .non_accounting_days
        .into_iter()
        .map(Into::into)
        .collect();

    let start_time = Instant::now();
    match summarize_quarter(quarter, &shifts, &records, state.config().engine()) {
        Ok(summary) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                quarter = %quarter,
                shifts_count = shifts.len(),
                balance_hours = %summary.balance_hours.round_dp(2),
                duration_us = duration.as_micros(),
                "Quarter completed successfully"
            );
            json_response(envelope(&state, summary, duration))
        }
        Err(err) => engine_error_response(err, correlation_id, "Quarter failed"),
    }
}

/// Handler for GET /users/:user_id/months.
///
/// Shows the current month in the users' configured offset.
async fn current_month_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let window = MonthWindow::containing(local_today(&state));
    month_view(&state, user_id, window)
}

/// Handler for GET /users/:user_id/months/:month_id.
///
/// An unrecognized month identifier falls back to the current month.
async fn month_view_handler(
    State(state): State<AppState>,
    Path((user_id, month_id)): Path<(String, String)>,
) -> Response {
    let window = MonthWindow::from_route_id(Some(&month_id), local_today(&state));
    month_view(&state, user_id, window)
}

fn local_today(state: &AppState) -> NaiveDate {
    state.config().metadata().local_date(Utc::now())
}

fn month_view(state: &AppState, user_id: String, window: MonthWindow) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        month = %window,
        "Processing month view request"
    );

    match load_month_view(state.source(), &user_id, window, state.config().engine()) {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = view.shifts.len(),
                working_days = view.summary.working_days,
                "Month view completed successfully"
            );
            json_response(MonthViewResponse {
                user_id,
                month_id: window.route_id(),
                previous_month_id: window.previous().route_id(),
                next_month_id: window.next().route_id(),
                view,
            })
        }
        Err(err) => engine_error_response(err, correlation_id, "Month view failed"),
    }
}

fn envelope<T>(state: &AppState, result: T, duration: Duration) -> CalculationResponse<T> {
    CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        policy_version: state.config().metadata().version.clone(),
        duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        result,
    }
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(
    err: EngineError,
    correlation_id: Uuid,
    context: &str,
) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
