//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{PayrollRun, PerEmployeeResult};

use super::request::GeneratePayrollRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollRunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/schools/:school_id/payroll",
            get(history_handler).post(generate_handler),
        )
        .route(
            "/schools/:school_id/payroll/:month/payslips/:staff_id",
            get(payslip_handler),
        )
        .with_state(state)
}

/// Handler for `POST /schools/:school_id/payroll`.
///
/// Generates and persists a payroll run. A run where some staff members could
/// not be paid still succeeds; its entries carry per-staff status.
async fn generate_handler(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    payload: Result<Json<GeneratePayrollRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PayrollRunResponse>), ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, school_id = %school_id, "Processing payroll generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_to_error(correlation_id, rejection)),
    };

    let start_time = Instant::now();
    match state.runner().generate(&school_id, &request.month).await {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                school_id = %school_id,
                run_id = %run.run_id,
                ok_count = run.ok_count(),
                error_count = run.error_count(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll generation completed"
            );
            Ok((StatusCode::CREATED, Json(run.into())))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                school_id = %school_id,
                month = %request.month,
                error = %err,
                "Payroll generation failed"
            );
            Err(err.into())
        }
    }
}

/// Handler for `GET /schools/:school_id/payroll`.
async fn history_handler(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<Json<Vec<PayrollRun>>, ApiErrorResponse> {
    let runs = state.runner().history(&school_id).await.map_err(|err| {
        warn!(school_id = %school_id, error = %err, "Payroll history lookup failed");
        ApiErrorResponse::from(err)
    })?;

    info!(school_id = %school_id, run_count = runs.len(), "Payroll history listed");
    Ok(Json(runs))
}

/// Handler for `GET /schools/:school_id/payroll/:month/payslips/:staff_id`.
async fn payslip_handler(
    State(state): State<AppState>,
    Path((school_id, month, staff_id)): Path<(String, String, String)>,
) -> Result<Json<PerEmployeeResult>, ApiErrorResponse> {
    state
        .runner()
        .payslip(&school_id, &month, &staff_id)
        .await
        .map(Json)
        .map_err(|err| {
            warn!(
                school_id = %school_id,
                month = %month,
                staff_id = %staff_id,
                error = %err,
                "Payslip lookup failed"
            );
            err.into()
        })
}

/// Converts a JSON extraction failure into an API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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

    ApiErrorResponse::bad_request(error)
}
