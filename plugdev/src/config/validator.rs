//! Configuration validation.

use std::path::{Component, Path};

use crate::config::schema::{Config, PortConfig};
use crate::error::{Error, Result};
use crate::port::Port;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use plugdev::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref ports) = config.ports {
            Self::validate_port_config(ports)?;
        }

        if config.max_port_attempts == Some(0) {
            return Err(Error::Validation {
                field: "max_port_attempts".into(),
                message: "max_port_attempts must be > 0".into(),
            });
        }

        if let Some(ref dir) = config.storage_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "storage_dir".into(),
                    message: "storage_dir cannot be empty".into(),
                });
            }
        }

        if let Some(ref layouts) = config.project_structure {
            for (project_type, dir) in layouts {
                Self::validate_layout(project_type, Path::new(dir))?;
            }
        }

        Ok(())
    }

    fn validate_port_config(config: &PortConfig) -> Result<()> {
        Port::try_from(config.min).map_err(|_| Error::Validation {
            field: "ports.min".into(),
            message: format!("Invalid port number: {}", config.min),
        })?;

        Port::try_from(config.max).map_err(|_| Error::Validation {
            field: "ports.max".into(),
            message: format!("Invalid port number: {}", config.max),
        })?;

        if config.max < config.min {
            return Err(Error::Validation {
                field: "ports".into(),
                message: "max must be >= min".into(),
            });
        }

        Ok(())
    }

    /// A layout directory must be a non-empty relative path that stays inside
    /// the project.
    fn validate_layout(project_type: &str, dir: &Path) -> Result<()> {
        let field = format!("project_structure.{project_type}");

        if project_type.trim().is_empty() {
            return Err(Error::Validation {
                field: "project_structure".into(),
                message: "project type names cannot be empty".into(),
            });
        }

        if dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field,
                message: "directory cannot be empty".into(),
            });
        }

        if dir
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::Validation {
                field,
                message: format!(
                    "directory must be relative to the project root: {}",
                    dir.display()
                ),
            });
        }

        Ok(())
    }
}
