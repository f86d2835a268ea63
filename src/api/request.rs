//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /schools/:school_id/payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayrollRequest {
    /// The month to generate, as `YYYY-MM`.
    pub month: String,
}
