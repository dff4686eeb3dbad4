//! HTTP API module for the shift ledger.
//!
//! This module provides the REST API endpoints for monthly and quarterly
//! summaries and for a user's month page.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NonAccountingDayRequest, QuarterRequest, ShiftRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, MonthViewResponse};
pub use state::AppState;
