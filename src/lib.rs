//! Payroll Engine for School Administration
//!
//! This crate generates monthly payroll for schools: it prorates each staff
//! member's basic salary by paid attendance, adds allowances, subtracts
//! deductions, and records the batch as an append-only payroll run.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;
