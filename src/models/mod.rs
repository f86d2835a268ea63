//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod month;
mod payout;
mod payroll_run;
mod salary;

pub use attendance::{AttendanceDay, AttendanceStatus, AttendanceSummary};
pub use month::PayrollMonth;
pub use payout::{NEGATIVE_NET_PAY, PAID_DAYS_EXCEED_MONTH, PayoutBreakdown, PayoutWarning};
pub use payroll_run::{
    NO_SALARY_STRUCTURE, PayrollRun, PerEmployeeResult, RunTotals, StaffMember,
};
pub use salary::{MAX_SALARY_AMOUNT, PayComponent, SalaryProfile};
