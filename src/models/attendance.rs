//! Attendance models.
//!
//! This module defines the daily [`AttendanceDay`] record produced by
//! attendance entry and the per-month [`AttendanceSummary`] derived from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The recorded status of a staff member on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked the day.
    Present,
    /// Did not work the day; unpaid.
    Absent,
    /// On approved leave; paid.
    Leave,
}

impl AttendanceStatus {
    /// Returns true if the day counts towards earned basic salary.
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Present | Self::Leave)
    }
}

/// One attendance record for one staff member on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The status recorded for that date.
    pub status: AttendanceStatus,
}

impl AttendanceDay {
    /// Creates a new attendance record.
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self { date, status }
    }
}

/// Per-month attendance counts for one staff member.
///
/// Days without a record fall into none of the buckets, so
/// `present_days + absent_days + leave_days <= total_days_in_month`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceSummary;
///
/// let summary = AttendanceSummary::new(30, 25, 3, 2);
/// assert_eq!(summary.paid_days(), 27);
/// assert_eq!(summary.recorded_days(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Calendar days in the month.
    pub total_days_in_month: u32,
    /// Days recorded as present.
    pub present_days: u32,
    /// Days recorded as absent.
    pub absent_days: u32,
    /// Days recorded as leave.
    pub leave_days: u32,
    /// True when the counts were filled in by the missing-attendance policy
    /// rather than read from records.
    #[serde(default)]
    pub defaulted: bool,
}

impl AttendanceSummary {
    /// Creates a summary from recorded counts.
    pub fn new(total_days_in_month: u32, present_days: u32, absent_days: u32, leave_days: u32) -> Self {
        Self {
            total_days_in_month,
            present_days,
            absent_days,
            leave_days,
            defaulted: false,
        }
    }

    /// Days that are paid: present plus leave.
    pub fn paid_days(&self) -> u32 {
        self.present_days + self.leave_days
    }

    /// Days that carry any record.
    pub fn recorded_days(&self) -> u32 {
        self.present_days + self.absent_days + self.leave_days
    }

    /// Days with no record at all.
    pub fn unrecorded_days(&self) -> u32 {
        self.total_days_in_month.saturating_sub(self.recorded_days())
    }
}
