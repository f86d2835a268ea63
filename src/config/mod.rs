//! Configuration loading and management for the payroll engine.
//!
//! This module loads engine and server settings from a YAML file, including
//! the policy for staff with no attendance records and the size of the
//! payroll worker pool.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Workers: {}", config.engine().max_concurrent_fetches);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{EngineSettings, MissingAttendancePolicy, PayrollConfig, ServerSettings};
