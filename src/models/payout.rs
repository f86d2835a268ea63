//! Payout breakdown model.
//!
//! This module contains the [`PayoutBreakdown`] produced by the payout
//! calculator for one staff member and month, and the [`PayoutWarning`]s that
//! flag results a person should look at before paying.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Warning code raised when paid days exceed the days in the month.
pub const PAID_DAYS_EXCEED_MONTH: &str = "PAID_DAYS_EXCEED_MONTH";

/// Warning code raised when deductions exceed gross salary.
pub const NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";

/// A warning attached to a payout.
///
/// Warnings never change the computed amounts except where stated in the
/// message; they exist so HR can review the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The computed monthly payout for one staff member.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayoutBreakdown;
/// use rust_decimal::Decimal;
///
/// let payout = PayoutBreakdown {
///     paid_days: 27,
///     earned_basic: Decimal::from(27000),
///     total_allowances: Decimal::from(5000),
///     gross_salary: Decimal::from(32000),
///     total_deductions: Decimal::from(1800),
///     net_payable: Decimal::from(30200),
///     warnings: vec![],
/// };
/// assert!(!payout.is_suspect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    /// Days the basic salary was prorated over (present plus leave).
    pub paid_days: u32,
    /// Basic salary prorated by paid days, rounded to the minor unit.
    pub earned_basic: Decimal,
    /// Sum of allowances, paid in full.
    pub total_allowances: Decimal,
    /// `earned_basic + total_allowances`.
    pub gross_salary: Decimal,
    /// Sum of deductions, applied in full.
    pub total_deductions: Decimal,
    /// `gross_salary - total_deductions`; negative when deductions exceed gross.
    pub net_payable: Decimal,
    /// Conditions found while computing the payout.
    #[serde(default)]
    pub warnings: Vec<PayoutWarning>,
}

impl PayoutBreakdown {
    /// Returns true if the attendance input was inconsistent and had to be clamped.
    pub fn is_suspect(&self) -> bool {
        self.has_warning(PAID_DAYS_EXCEED_MONTH)
    }

    /// Returns true if net payable is below zero.
    pub fn is_negative(&self) -> bool {
        self.net_payable < Decimal::ZERO
    }

    /// Returns true if a warning with `code` was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_payout() -> PayoutBreakdown {
        PayoutBreakdown {
            paid_days: 27,
            earned_basic: dec("27000.00"),
            total_allowances: dec("5000"),
            gross_salary: dec("32000.00"),
            total_deductions: dec("1800"),
            net_payable: dec("30200.00"),
            warnings: vec![],
        }
    }

    #[test]
    fn test_suspect_only_for_clamped_attendance() {
        let mut payout = sample_payout();
        assert!(!payout.is_suspect());

        payout.warnings.push(PayoutWarning {
            code: NEGATIVE_NET_PAY.to_string(),
            message: "net below zero".to_string(),
            severity: "high".to_string(),
        });
        assert!(!payout.is_suspect());

        payout.warnings.push(PayoutWarning {
            code: PAID_DAYS_EXCEED_MONTH.to_string(),
            message: "clamped".to_string(),
            severity: "high".to_string(),
        });
        assert!(payout.is_suspect());
    }

    #[test]
    fn test_is_negative() {
        let mut payout = sample_payout();
        assert!(!payout.is_negative());
        payout.net_payable = dec("-0.01");
        assert!(payout.is_negative());
    }

    #[test]
    fn test_amounts_serialize_as_strings() {
        let json = serde_json::to_string(&sample_payout()).unwrap();
        assert!(json.contains("\"earned_basic\":\"27000.00\""));
        assert!(json.contains("\"net_payable\":\"30200.00\""));
        assert!(json.contains("\"paid_days\":27"));
    }
}
