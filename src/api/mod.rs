//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints used by the HR screens and the
//! payslip view: generating a run, listing history, and reading a payslip.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::GeneratePayrollRequest;
pub use response::{ApiError, ApiErrorResponse, PayrollRunResponse, RunSummary};
pub use state::AppState;
