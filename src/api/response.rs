//! Response types for the payroll engine API.
//!
//! This module defines the success and error response bodies and maps
//! [`EngineError`] onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PayrollRun, RunTotals};

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
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidMonth { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_MONTH", message, "Months use the format YYYY-MM"),
            ),
            EngineError::FutureMonth { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "FUTURE_MONTH",
                    message,
                    "Payroll can only be generated for the current or a past month",
                ),
            ),
            EngineError::InvalidSalaryProfile { .. }
            | EngineError::MalformedAttendance { .. }
            | EngineError::IncompleteAttendance { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INVALID_PAYROLL_DATA", message),
            ),
            EngineError::RunFailed(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::with_details(
                    "RUN_FAILED",
                    message,
                    "Nothing was saved; the run can be retried safely",
                ),
            ),
            EngineError::HistoryUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("HISTORY_UNAVAILABLE", message),
            ),
            EngineError::RunCancelled { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::with_details(
                    "RUN_CANCELLED",
                    message,
                    "Nothing was saved; the run can be retried safely",
                ),
            ),
            EngineError::PayrollRunNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("PAYROLL_RUN_NOT_FOUND", message),
            ),
            EngineError::PayslipNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("PAYSLIP_NOT_FOUND", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}

/// Counts and totals that let a client tell a clean run from a mixed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Entries with a computed payout.
    pub ok_count: usize,
    /// Entries that carry an error.
    pub error_count: usize,
    /// Totals over the computed payouts.
    pub totals: RunTotals,
}

/// Response body for a generated payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// The run as persisted.
    #[serde(flatten)]
    pub run: PayrollRun,
    /// Aggregates over the run.
    pub summary: RunSummary,
}

impl From<PayrollRun> for PayrollRunResponse {
    fn from(run: PayrollRun) -> Self {
        let summary = RunSummary {
            ok_count: run.ok_count(),
            error_count: run.error_count(),
            totals: run.totals(),
        };
        Self { run, summary }
    }
}
