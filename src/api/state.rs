//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::payroll::PayrollRunner;

/// Shared application state.
///
/// Holds the payroll runner, which owns the store handles and engine settings.
#[derive(Clone)]
pub struct AppState {
    runner: Arc<PayrollRunner>,
}

impl AppState {
    /// Creates a new application state around the given runner.
    pub fn new(runner: PayrollRunner) -> Self {
        Self {
            runner: Arc::new(runner),
        }
    }

    /// Returns the payroll runner.
    pub fn runner(&self) -> &PayrollRunner {
        &self.runner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }
}
