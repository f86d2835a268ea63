//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions behind payroll generation: folding
//! a month of attendance records into a summary, and computing a prorated
//! payout from a salary profile and that summary.

mod attendance_summary;
mod payout;

pub use attendance_summary::summarize_attendance;
pub use payout::{CURRENCY_MINOR_UNIT_DP, calculate_payout, round_to_minor_unit};
