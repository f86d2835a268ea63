//! Salary profile model.
//!
//! This module defines the [`SalaryProfile`] declared by HR for each staff
//! member and the [`PayComponent`] entries used for allowances and deductions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest monthly amount accepted for any salary field (10^15).
///
/// Keeps `basic_salary × 31` and the component sums well inside `Decimal`'s
/// range, so payout arithmetic cannot overflow for a validated profile.
pub const MAX_SALARY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A named monetary component of a salary structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// The display name (e.g., "HRA", "PF").
    pub name: String,
    /// The monthly amount.
    pub amount: Decimal,
}

impl PayComponent {
    /// Creates a new pay component.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// The declared pay structure for one staff member.
///
/// Allowances and deductions keep the order HR entered them in.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayComponent, SalaryProfile};
/// use rust_decimal::Decimal;
///
/// let profile = SalaryProfile {
///     basic_salary: Decimal::from(30000),
///     allowances: vec![PayComponent::new("HRA", Decimal::from(5000))],
///     deductions: vec![PayComponent::new("PF", Decimal::from(1800))],
/// };
/// assert!(profile.validate().is_ok());
/// assert_eq!(profile.total_allowances(), Decimal::from(5000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProfile {
    /// Monthly basic salary before proration.
    pub basic_salary: Decimal,
    /// Allowances paid in full every month.
    #[serde(default)]
    pub allowances: Vec<PayComponent>,
    /// Deductions applied in full every month.
    #[serde(default)]
    pub deductions: Vec<PayComponent>,
}

impl SalaryProfile {
    /// Sum of all allowance amounts.
    pub fn total_allowances(&self) -> Decimal {
        self.allowances.iter().map(|c| c.amount).sum()
    }

    /// Sum of all deduction amounts.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().map(|c| c.amount).sum()
    }

    /// Checks that every amount is between zero and [`MAX_SALARY_AMOUNT`] and
    /// every component is named.
    pub fn validate(&self) -> EngineResult<()> {
        if self.basic_salary < Decimal::ZERO {
            return Err(EngineError::InvalidSalaryProfile {
                field: "basic_salary".to_string(),
                message: format!("must not be negative, got {}", self.basic_salary),
            });
        }
        if self.basic_salary > MAX_SALARY_AMOUNT {
            return Err(EngineError::InvalidSalaryProfile {
                field: "basic_salary".to_string(),
                message: format!("must not exceed {}, got {}", MAX_SALARY_AMOUNT, self.basic_salary),
            });
        }

        let groups = [
            ("allowances", &self.allowances),
            ("deductions", &self.deductions),
        ];
        for (group, components) in groups {
            for (index, component) in components.iter().enumerate() {
                if component.name.trim().is_empty() {
                    return Err(EngineError::InvalidSalaryProfile {
                        field: format!("{}[{}].name", group, index),
                        message: "must not be blank".to_string(),
                    });
                }
                if component.amount < Decimal::ZERO {
                    return Err(EngineError::InvalidSalaryProfile {
                        field: format!("{}[{}].amount", group, index),
                        message: format!(
                            "'{}' must not be negative, got {}",
                            component.name, component.amount
                        ),
                    });
                }
                if component.amount > MAX_SALARY_AMOUNT {
                    return Err(EngineError::InvalidSalaryProfile {
                        field: format!("{}[{}].amount", group, index),
                        message: format!(
                            "'{}' must not exceed {}, got {}",
                            component.name, MAX_SALARY_AMOUNT, component.amount
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_profile() -> SalaryProfile {
        SalaryProfile {
            basic_salary: dec("30000"),
            allowances: vec![
                PayComponent::new("HRA", dec("5000")),
                PayComponent::new("Transport", dec("1200.50")),
            ],
            deductions: vec![PayComponent::new("PF", dec("1800"))],
        }
    }

    #[test]
    fn test_totals_sum_components() {
        let profile = sample_profile();
        assert_eq!(profile.total_allowances(), dec("6200.50"));
        assert_eq!(profile.total_deductions(), dec("1800"));
    }

    #[test]
    fn test_empty_components_total_zero() {
        let profile = SalaryProfile {
            basic_salary: dec("1000"),
            allowances: vec![],
            deductions: vec![],
        };
        assert_eq!(profile.total_allowances(), Decimal::ZERO);
        assert_eq!(profile.total_deductions(), Decimal::ZERO);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_basic() {
        let mut profile = sample_profile();
        profile.basic_salary = dec("-1");

        match profile.validate() {
            Err(EngineError::InvalidSalaryProfile { field, .. }) => {
                assert_eq!(field, "basic_salary");
            }
            other => panic!("Expected InvalidSalaryProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unbounded_basic() {
        let mut profile = sample_profile();
        profile.basic_salary = Decimal::MAX;

        match profile.validate() {
            Err(EngineError::InvalidSalaryProfile { field, message }) => {
                assert_eq!(field, "basic_salary");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidSalaryProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_allowance_above_limit() {
        let mut profile = sample_profile();
        profile.allowances.push(PayComponent::new("Bonus", Decimal::MAX));

        match profile.validate() {
            Err(EngineError::InvalidSalaryProfile { field, .. }) => {
                assert_eq!(field, "allowances[2].amount");
            }
            other => panic!("Expected InvalidSalaryProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_max_salary_amount_is_ten_to_the_fifteen() {
        assert_eq!(MAX_SALARY_AMOUNT, dec("1000000000000000"));

        let mut profile = sample_profile();
        profile.basic_salary = MAX_SALARY_AMOUNT;
        profile.deductions[0].amount = MAX_SALARY_AMOUNT;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_deduction() {
        let mut profile = sample_profile();
        profile.deductions.push(PayComponent::new("Loan", dec("-50")));

        match profile.validate() {
            Err(EngineError::InvalidSalaryProfile { field, message }) => {
                assert_eq!(field, "deductions[1].amount");
                assert!(message.contains("Loan"));
            }
            other => panic!("Expected InvalidSalaryProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_component_name() {
        let mut profile = sample_profile();
        profile.allowances[0].name = "  ".to_string();

        match profile.validate() {
            Err(EngineError::InvalidSalaryProfile { field, .. }) => {
                assert_eq!(field, "allowances[0].name");
            }
            other => panic!("Expected InvalidSalaryProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_profile_with_missing_lists() {
        let json = r#"{ "basic_salary": "25000.00" }"#;
        let profile: SalaryProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.basic_salary, dec("25000.00"));
        assert!(profile.allowances.is_empty());
        assert!(profile.deductions.is_empty());
    }

    #[test]
    fn test_component_order_is_preserved() {
        let json = r#"{
            "basic_salary": "100",
            "allowances": [
                { "name": "Zeta", "amount": "1" },
                { "name": "Alpha", "amount": "2" }
            ]
        }"#;
        let profile: SalaryProfile = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = profile.allowances.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }
}
