//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while generating or reading payroll.
//! Store adapters report [`StoreError`]; the runner lifts those into
//! [`EngineError::RunFailed`] so callers only ever see one run-level failure.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     input: "2026-13".to_string(),
///     message: "month must be between 01 and 12".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid month '2026-13': month must be between 01 and 12"
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

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A month string could not be parsed as a calendar year-month.
    #[error("Invalid month '{input}': {message}")]
    InvalidMonth {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        message: String,
    },

    /// Payroll was requested for a month that has not started yet.
    #[error("Cannot generate payroll for future month {month}")]
    FutureMonth {
        /// The requested month, formatted as `YYYY-MM`.
        month: String,
    },

    /// A salary profile failed validation.
    #[error("Invalid salary profile field '{field}': {message}")]
    InvalidSalaryProfile {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Attendance records for a month were inconsistent.
    #[error("Malformed attendance: {message}")]
    MalformedAttendance {
        /// A description of the inconsistency.
        message: String,
    },

    /// Attendance was required to be complete but was not.
    #[error("Incomplete attendance: {recorded} of {expected} days recorded")]
    IncompleteAttendance {
        /// Days that carry a record.
        recorded: u32,
        /// Days in the month.
        expected: u32,
    },

    /// An infrastructure failure aborted the whole payroll run.
    #[error("Payroll run failed: {0}")]
    RunFailed(#[from] StoreError),

    /// Stored payroll runs could not be read.
    #[error("Payroll history unavailable: {0}")]
    HistoryUnavailable(StoreError),

    /// The caller cancelled the payroll run before it was persisted.
    #[error("Payroll run for {school_id} {month} was cancelled")]
    RunCancelled {
        /// The school the run was for.
        school_id: String,
        /// The requested month.
        month: String,
    },

    /// No payroll run exists for the school and month.
    #[error("No payroll run found for school '{school_id}' in {month}")]
    PayrollRunNotFound {
        /// The school that was searched.
        school_id: String,
        /// The month that was searched.
        month: String,
    },

    /// The payroll run exists but does not contain the staff member.
    #[error("No payslip for staff '{staff_id}' in {month}")]
    PayslipNotFound {
        /// The staff member that was searched.
        staff_id: String,
        /// The month that was searched.
        month: String,
    },
}

/// Failures reported by the external stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the request.
    #[error("{store} unavailable: {message}")]
    Unavailable {
        /// Which store failed.
        store: String,
        /// Details from the store adapter.
        message: String,
    },

    /// A store call did not complete within the configured timeout.
    #[error("{store} timed out after {timeout_ms}ms")]
    Timeout {
        /// Which store timed out.
        store: String,
        /// The timeout that was exceeded.
        timeout_ms: u64,
    },
}

impl StoreError {
    /// Creates an [`StoreError::Unavailable`] for the named store.
    pub fn unavailable(store: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            store: store.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
