//! Calendar month model.
//!
//! A [`PayrollMonth`] is the unit a payroll run is generated for. It is always
//! a valid calendar year-month and renders as `YYYY-MM` on the wire.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A validated calendar year-month.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
/// use chrono::NaiveDate;
///
/// let month: PayrollMonth = "2024-02".parse().unwrap();
/// assert_eq!(month.days_in_month(), 29);
/// assert!(month.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert_eq!(month.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollMonth {
    first_day: NaiveDate,
}

impl PayrollMonth {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| EngineError::InvalidMonth {
                input: format!("{:04}-{:02}", year, month),
                message: "not a valid calendar month".to_string(),
            })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day + chrono::Days::new(u64::from(self.days_in_month()) - 1)
    }

    /// Number of calendar days in the month (28 to 31).
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = (self.year(), self.month());
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match next {
            Some(next) => (next - self.first_day).num_days() as u32,
            // Only reachable at chrono's maximum year; December has 31 days.
            None => 31,
        }
    }

    /// Returns true if `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Returns true if this month starts after the month containing `date`.
    pub fn is_after(&self, date: NaiveDate) -> bool {
        *self > Self::of(date)
    }

    /// Iterates over every date of the month in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let first_day = self.first_day;
        (0..self.days_in_month()).map(move |offset| first_day + chrono::Days::new(u64::from(offset)))
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for PayrollMonth {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidMonth {
            input: input.to_string(),
            message: message.to_string(),
        };

        let (year, month) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected format YYYY-MM"))?;

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid("expected format YYYY-MM"));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| invalid("year must be a four-digit number"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| invalid("month must be a two-digit number"))?;

        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 01 and 12"));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| invalid("not a valid calendar month"))
    }
}

impl TryFrom<String> for PayrollMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayrollMonth> for String {
    fn from(month: PayrollMonth) -> Self {
        month.to_string()
    }
}
