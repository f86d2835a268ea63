//! Payroll generation for the payroll engine.
//!
//! This module contains the [`PayrollRunner`], which batches payout
//! calculations across a school's staff and persists each batch as a
//! payroll run, and the read operations over stored runs.

mod runner;

pub use runner::{PayrollRunner, parse_payroll_month};
