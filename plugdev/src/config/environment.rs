//! Environment variable handling for configuration overrides.
//!
//! `PLUGDEV_*` variables override values read from the config file.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Lower bound of the dev-server port range.
pub const PORT_MIN_ENV: &str = "PLUGDEV_PORT_MIN";
/// Upper bound of the dev-server port range.
pub const PORT_MAX_ENV: &str = "PLUGDEV_PORT_MAX";
/// Directory backing the persistent store.
pub const STORAGE_DIR_ENV: &str = "PLUGDEV_STORAGE_DIR";
/// Random draws allowed before port allocation gives up.
pub const MAX_PORT_ATTEMPTS_ENV: &str = "PLUGDEV_MAX_PORT_ATTEMPTS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use plugdev::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PLUGDEV_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(STORAGE_DIR_ENV).filter(|d| !d.is_empty()) {
            config.storage_dir = Some(PathBuf::from(dir));
        }

        let mut ports = config.ports.clone().unwrap_or_default();
        let mut modified = false;

        if let Some(min) = lookup(PORT_MIN_ENV) {
            ports.min = Self::parse_port(PORT_MIN_ENV, &min)?;
            modified = true;
        }

        if let Some(max) = lookup(PORT_MAX_ENV) {
            ports.max = Self::parse_port(PORT_MAX_ENV, &max)?;
            modified = true;
        }

        if modified {
            config.ports = Some(ports);
        }

        if let Some(attempts) = lookup(MAX_PORT_ATTEMPTS_ENV) {
            config.max_port_attempts =
                Some(attempts.trim().parse().map_err(|_| Error::Validation {
                    field: MAX_PORT_ATTEMPTS_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        Ok(())
    }

    fn parse_port(field: &str, value: &str) -> Result<u16> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid port number: '{value}'"),
        })
    }
}
