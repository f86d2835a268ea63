//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What to assume when a staff member has no attendance records for the month.
///
/// Only an entirely empty month triggers the policy; partially recorded months
/// leave unrecorded days out of every bucket, except under `RequireComplete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAttendancePolicy {
    /// Treat every day as present. HR corrects attendance afterwards.
    #[default]
    Present,
    /// Treat every day as absent.
    Absent,
    /// Refuse to compute a payout unless every day has a record.
    RequireComplete,
}

/// Settings for payroll generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Policy applied to staff with no attendance records in the month.
    pub missing_attendance_policy: MissingAttendancePolicy,
    /// Upper bound on staff members fetched and computed concurrently.
    pub max_concurrent_fetches: usize,
    /// Timeout applied to each individual store call, in milliseconds.
    pub fetch_timeout_ms: u64,
}

impl EngineSettings {
    /// The per-call store timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            missing_attendance_policy: MissingAttendancePolicy::Present,
            max_concurrent_fetches: 8,
            fetch_timeout_ms: 5_000,
        }
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The complete payroll configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Payroll generation settings.
    pub engine: EngineSettings,
    /// HTTP server settings.
    pub server: ServerSettings,
}
