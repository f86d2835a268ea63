//! Store abstractions consumed and fed by the payroll engine.
//!
//! The staff directory, salary profiles and attendance are read-only from the
//! engine's point of view; payroll history is append-only. Each concern is a
//! separate trait so a deployment can back them with different systems.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{AttendanceDay, PayrollMonth, PayrollRun, SalaryProfile, StaffMember};

pub use memory::{InMemoryStore, SeedFile, SeedSchool, SeedStaff};

/// Enumerates the staff belonging to a school.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Lists the school's active staff.
    async fn list_staff(&self, school_id: &str) -> Result<Vec<StaffMember>, StoreError>;
}

/// Holds one salary profile per staff member.
#[async_trait]
pub trait SalaryProfileStore: Send + Sync {
    /// Fetches the profile, or `None` if HR has not defined one.
    async fn get_profile(
        &self,
        school_id: &str,
        staff_id: &str,
    ) -> Result<Option<SalaryProfile>, StoreError>;
}

/// Holds daily attendance records.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Fetches the staff member's records for `month`, possibly none.
    async fn get_month(
        &self,
        school_id: &str,
        staff_id: &str,
        month: PayrollMonth,
    ) -> Result<Vec<AttendanceDay>, StoreError>;
}

/// Append-only collection of generated payroll runs.
#[async_trait]
pub trait PayrollHistoryStore: Send + Sync {
    /// Persists a new run. Existing runs are never modified.
    async fn append(&self, run: PayrollRun) -> Result<(), StoreError>;

    /// Lists every run stored for the school, oldest first.
    async fn list_runs(&self, school_id: &str) -> Result<Vec<PayrollRun>, StoreError>;
}
