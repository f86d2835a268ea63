//! Payroll run models.
//!
//! A [`PayrollRun`] is the persisted aggregate of one generation event for a
//! school and month. Each staff member contributes one [`PerEmployeeResult`],
//! which is either a computed payout or the reason none could be computed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceSummary, PayoutBreakdown, PayrollMonth, SalaryProfile};

/// Reason recorded when a staff member has no salary profile.
pub const NO_SALARY_STRUCTURE: &str = "No salary structure defined";

/// A staff member as listed by the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Stable identifier within the school.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl StaffMember {
    /// Creates a new staff member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The outcome of payroll for one staff member within a run.
///
/// Serialized with a `status` tag of `"ok"` or `"error"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PerEmployeeResult {
    /// The payout was computed.
    Ok {
        /// The staff member's identifier.
        staff_id: String,
        /// The staff member's name at generation time.
        name: String,
        /// Attendance used for proration.
        attendance_summary: AttendanceSummary,
        /// The salary profile in effect at generation time.
        salary_details: SalaryProfile,
        /// The computed payout.
        payout: PayoutBreakdown,
    },
    /// The payout could not be computed for this staff member.
    Error {
        /// The staff member's identifier.
        staff_id: String,
        /// The staff member's name at generation time.
        name: String,
        /// Why no payout was computed.
        reason: String,
    },
}

impl PerEmployeeResult {
    /// Creates an error entry for `staff`.
    pub fn error(staff: &StaffMember, reason: impl Into<String>) -> Self {
        Self::Error {
            staff_id: staff.id.clone(),
            name: staff.name.clone(),
            reason: reason.into(),
        }
    }

    /// The staff member's identifier.
    pub fn staff_id(&self) -> &str {
        match self {
            Self::Ok { staff_id, .. } | Self::Error { staff_id, .. } => staff_id,
        }
    }

    /// The staff member's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Ok { name, .. } | Self::Error { name, .. } => name,
        }
    }

    /// Returns true for a computed payout.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// The payout, if one was computed.
    pub fn payout(&self) -> Option<&PayoutBreakdown> {
        match self {
            Self::Ok { payout, .. } => Some(payout),
            Self::Error { .. } => None,
        }
    }
}

/// Aggregate amounts over the computed payouts of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunTotals {
    /// Sum of gross salaries.
    pub gross_salary: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of net payable amounts.
    pub net_payable: Decimal,
}

/// One generated batch of payouts for a school and month.
///
/// Runs are append-only: generating again for the same month creates another
/// run with a new `run_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier of this generation event.
    pub run_id: Uuid,
    /// The school the run belongs to.
    pub school_id: String,
    /// The month the run covers.
    pub month: PayrollMonth,
    /// When the run was generated.
    pub generated_on: DateTime<Utc>,
    /// One entry per staff member, ordered by staff id.
    pub payroll_data: Vec<PerEmployeeResult>,
}

impl PayrollRun {
    /// Number of entries with a computed payout.
    pub fn ok_count(&self) -> usize {
        self.payroll_data.iter().filter(|r| r.is_ok()).count()
    }

    /// Number of entries that carry an error.
    pub fn error_count(&self) -> usize {
        self.payroll_data.len() - self.ok_count()
    }

    /// Returns true if any staff member could not be paid.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Finds the entry for `staff_id`.
    pub fn find(&self, staff_id: &str) -> Option<&PerEmployeeResult> {
        self.payroll_data.iter().find(|r| r.staff_id() == staff_id)
    }

    /// Sums the computed payouts, skipping error entries.
    pub fn totals(&self) -> RunTotals {
        self.payroll_data
            .iter()
            .filter_map(PerEmployeeResult::payout)
            .fold(RunTotals::default(), |acc, payout| RunTotals {
                gross_salary: acc.gross_salary + payout.gross_salary,
                total_deductions: acc.total_deductions + payout.total_deductions,
                net_payable: acc.net_payable + payout.net_payable,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayComponent;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ok_entry(staff_id: &str, net: &str) -> PerEmployeeResult {
        PerEmployeeResult::Ok {
            staff_id: staff_id.to_string(),
            name: format!("Staff {}", staff_id),
            attendance_summary: AttendanceSummary::new(30, 30, 0, 0),
            salary_details: SalaryProfile {
                basic_salary: dec(net) + dec("100"),
                allowances: vec![],
                deductions: vec![PayComponent::new("PF", dec("100"))],
            },
            payout: PayoutBreakdown {
                paid_days: 30,
                earned_basic: dec(net) + dec("100"),
                total_allowances: Decimal::ZERO,
                gross_salary: dec(net) + dec("100"),
                total_deductions: dec("100"),
                net_payable: dec(net),
                warnings: vec![],
            },
        }
    }

    fn sample_run() -> PayrollRun {
        let absent = StaffMember::new("s2", "No Profile");
        PayrollRun {
            run_id: Uuid::new_v4(),
            school_id: "school_1".to_string(),
            month: PayrollMonth::new(2026, 9).unwrap(),
            generated_on: Utc::now(),
            payroll_data: vec![
                ok_entry("s1", "1000"),
                PerEmployeeResult::error(&absent, NO_SALARY_STRUCTURE),
                ok_entry("s3", "2500.50"),
            ],
        }
    }

    #[test]
    fn test_counts_split_ok_and_error() {
        let run = sample_run();
        assert_eq!(run.ok_count(), 2);
        assert_eq!(run.error_count(), 1);
        assert!(run.has_errors());
    }

    #[test]
    fn test_totals_skip_error_entries() {
        let totals = sample_run().totals();
        assert_eq!(totals.net_payable, dec("3500.50"));
        assert_eq!(totals.total_deductions, dec("200"));
        assert_eq!(totals.gross_salary, dec("3700.50"));
    }

    #[test]
    fn test_find_by_staff_id() {
        let run = sample_run();
        assert!(run.find("s3").unwrap().is_ok());
        assert!(!run.find("s2").unwrap().is_ok());
        assert!(run.find("s9").is_none());
    }

    #[test]
    fn test_error_entry_serializes_with_status_tag() {
        let staff = StaffMember::new("s2", "No Profile");
        let json = serde_json::to_value(PerEmployeeResult::error(&staff, NO_SALARY_STRUCTURE)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["staff_id"], "s2");
        assert_eq!(json["reason"], "No salary structure defined");
    }

    #[test]
    fn test_ok_entry_serializes_with_status_tag() {
        let json = serde_json::to_value(ok_entry("s1", "1000")).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["payout"]["net_payable"], "1000");
        assert_eq!(json["attendance_summary"]["present_days"], 30);
    }

    #[test]
    fn test_run_round_trips_through_json() {
        let run = sample_run();
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"month\":\"2026-09\""));
        let parsed: PayrollRun = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, run);
    }
}
