//! Attendance folding.
//!
//! This module folds a month of [`AttendanceDay`] records into an
//! [`AttendanceSummary`], applying the configured
//! [`MissingAttendancePolicy`] when a staff member has no records at all.

use std::collections::HashSet;

use crate::config::MissingAttendancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceDay, AttendanceStatus, AttendanceSummary, PayrollMonth};

/// Summarizes one staff member's attendance for `month`.
///
/// Records dated outside the month, or two records for the same date, make
/// the input malformed. With no records at all, `policy` decides:
/// `Present` and `Absent` fill every day with that status and mark the summary
/// as defaulted, `RequireComplete` rejects the month. `RequireComplete` also
/// rejects months where only some days were recorded; the other policies
/// leave unrecorded days out of every bucket.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_attendance;
/// use payroll_engine::config::MissingAttendancePolicy;
/// use payroll_engine::models::PayrollMonth;
///
/// let month = PayrollMonth::new(2026, 9).unwrap();
/// let summary = summarize_attendance(month, &[], MissingAttendancePolicy::Present).unwrap();
///
/// assert_eq!(summary.present_days, 30);
/// assert!(summary.defaulted);
/// ```
pub fn summarize_attendance(
    month: PayrollMonth,
    records: &[AttendanceDay],
    policy: MissingAttendancePolicy,
) -> EngineResult<AttendanceSummary> {
    let total_days = month.days_in_month();

    if records.is_empty() {
        let defaulted = |status: AttendanceStatus| {
            let mut summary = AttendanceSummary::new(total_days, 0, 0, 0);
            match status {
                AttendanceStatus::Present => summary.present_days = total_days,
                AttendanceStatus::Absent => summary.absent_days = total_days,
                AttendanceStatus::Leave => summary.leave_days = total_days,
            }
            summary.defaulted = true;
            summary
        };

        return match policy {
            MissingAttendancePolicy::Present => Ok(defaulted(AttendanceStatus::Present)),
            MissingAttendancePolicy::Absent => Ok(defaulted(AttendanceStatus::Absent)),
            MissingAttendancePolicy::RequireComplete => Err(EngineError::IncompleteAttendance {
                recorded: 0,
                expected: total_days,
            }),
        };
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut summary = AttendanceSummary::new(total_days, 0, 0, 0);

    for record in records {
        if !month.contains(record.date) {
            return Err(EngineError::MalformedAttendance {
                message: format!("record for {} is outside {}", record.date, month),
            });
        }
        if !seen.insert(record.date) {
            return Err(EngineError::MalformedAttendance {
                message: format!("more than one record for {}", record.date),
            });
        }

        match record.status {
            AttendanceStatus::Present => summary.present_days += 1,
            AttendanceStatus::Absent => summary.absent_days += 1,
            AttendanceStatus::Leave => summary.leave_days += 1,
        }
    }

    if policy == MissingAttendancePolicy::RequireComplete && summary.recorded_days() < total_days {
        return Err(EngineError::IncompleteAttendance {
            recorded: summary.recorded_days(),
            expected: total_days,
        });
    }

    Ok(summary)
}
