//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineSettings, PayrollConfig, ServerSettings};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml    # Engine and server settings
/// ```
///
/// Every key is optional; missing keys take their defaults.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Policy: {:?}", loader.engine().missing_attendance_policy);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from `payroll.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or out-of-range values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&path_str, &content)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(origin: &str, content: &str) -> EngineResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(origin, &config)?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    fn validate(origin: &str, config: &PayrollConfig) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: message.to_string(),
        };

        if config.engine.max_concurrent_fetches == 0 {
            return Err(invalid("engine.max_concurrent_fetches must be at least 1"));
        }
        if config.engine.fetch_timeout_ms == 0 {
            return Err(invalid("engine.fetch_timeout_ms must be at least 1"));
        }
        if config.server.bind_address.trim().is_empty() {
            return Err(invalid("server.bind_address must not be empty"));
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll generation settings.
    pub fn engine(&self) -> &EngineSettings {
        &self.config.engine
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.config.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissingAttendancePolicy;
    use std::time::Duration;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.engine().missing_attendance_policy,
            MissingAttendancePolicy::Present
        );
        assert_eq!(loader.engine().max_concurrent_fetches, 8);
        assert_eq!(loader.engine().fetch_timeout(), Duration::from_millis(5000));
        assert_eq!(loader.server().bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let loader = ConfigLoader::from_yaml_str(
            "inline",
            "engine:\n  missing_attendance_policy: require_complete\n",
        )
        .unwrap();

        assert_eq!(
            loader.engine().missing_attendance_policy,
            MissingAttendancePolicy::RequireComplete
        );
        assert_eq!(loader.engine().max_concurrent_fetches, 8);
        assert_eq!(loader.server(), &ServerSettings::default());
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let result = ConfigLoader::from_yaml_str(
            "inline",
            "engine:\n  missing_attendance_policy: optimistic\n",
        );
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        match ConfigLoader::from_yaml_str("inline", "engine:\n  max_concurrent_fetches: 0\n") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(message.contains("max_concurrent_fetches"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = ConfigLoader::from_yaml_str("inline", "engine:\n  fetch_timeout_ms: 0\n");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
