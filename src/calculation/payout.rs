//! Monthly payout calculation.
//!
//! This module turns a [`SalaryProfile`] and an [`AttendanceSummary`] into a
//! [`PayoutBreakdown`]. Only the basic salary is prorated by attendance;
//! allowances and deductions apply in full every month.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AttendanceSummary, NEGATIVE_NET_PAY, PAID_DAYS_EXCEED_MONTH, PayoutBreakdown, PayoutWarning,
    SalaryProfile,
};

/// Decimal places of the currency's minor unit.
pub const CURRENCY_MINOR_UNIT_DP: u32 = 2;

/// Rounds a monetary amount to the minor unit, half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_to_minor_unit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     round_to_minor_unit(Decimal::from_str("10.005").unwrap()),
///     Decimal::from_str("10.01").unwrap()
/// );
/// ```
pub fn round_to_minor_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the payout for one staff member and month.
///
/// The calculation is pure: identical inputs always produce identical output.
///
/// 1. `paid_days = present_days + leave_days`
/// 2. `earned_basic = basic_salary × paid_days / total_days_in_month`, rounded
///    half-up to the minor unit; zero when the month has no days
/// 3. `total_allowances` and `total_deductions` are plain sums
/// 4. `gross_salary = earned_basic + total_allowances`
/// 5. `net_payable = gross_salary − total_deductions`, which may be negative
///
/// If `paid_days` exceeds the days in the month the ratio is clamped to 1 and
/// the payout carries a `PAID_DAYS_EXCEED_MONTH` warning. A negative net
/// payable carries a `NEGATIVE_NET_PAY` warning and is left as computed.
///
/// The arithmetic cannot overflow for a profile that passes
/// [`SalaryProfile::validate`], which caps every amount at
/// [`MAX_SALARY_AMOUNT`](crate::models::MAX_SALARY_AMOUNT).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payout;
/// use payroll_engine::models::{AttendanceSummary, PayComponent, SalaryProfile};
/// use rust_decimal::Decimal;
///
/// let profile = SalaryProfile {
///     basic_salary: Decimal::from(30000),
///     allowances: vec![PayComponent::new("HRA", Decimal::from(5000))],
///     deductions: vec![PayComponent::new("PF", Decimal::from(1800))],
/// };
/// let attendance = AttendanceSummary::new(30, 25, 3, 2);
///
/// let payout = calculate_payout(&profile, &attendance);
/// assert_eq!(payout.earned_basic, Decimal::from(27000));
/// assert_eq!(payout.gross_salary, Decimal::from(32000));
/// assert_eq!(payout.net_payable, Decimal::from(30200));
/// ```
pub fn calculate_payout(profile: &SalaryProfile, attendance: &AttendanceSummary) -> PayoutBreakdown {
    let mut warnings = Vec::new();
    let total_days = attendance.total_days_in_month;
    let mut paid_days = attendance.paid_days();

    if paid_days > total_days {
        warnings.push(PayoutWarning {
            code: PAID_DAYS_EXCEED_MONTH.to_string(),
            message: format!(
                "{} paid days recorded in a {}-day month; basic salary capped at 100%",
                paid_days, total_days
            ),
            severity: "high".to_string(),
        });
        paid_days = total_days;
    }

    let earned_basic = if total_days == 0 {
        Decimal::ZERO
    } else {
        round_to_minor_unit(
            profile.basic_salary * Decimal::from(paid_days) / Decimal::from(total_days),
        )
    };

    let total_allowances = profile.total_allowances();
    let total_deductions = profile.total_deductions();
    let gross_salary = earned_basic + total_allowances;
    let net_payable = gross_salary - total_deductions;

    if net_payable < Decimal::ZERO {
        warnings.push(PayoutWarning {
            code: NEGATIVE_NET_PAY.to_string(),
            message: format!(
                "Deductions {} exceed gross salary {}",
                total_deductions.normalize(),
                gross_salary.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    PayoutBreakdown {
        paid_days,
        earned_basic,
        total_allowances,
        gross_salary,
        total_deductions,
        net_payable,
        warnings,
    }
}
