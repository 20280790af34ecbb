//! Configuration schema definitions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::project::ProjectStructure;
use crate::{Port, PortRange};

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered; unset fields
/// fall back to built-in defaults through the accessor methods.
///
/// # Examples
///
/// ```
/// use plugdev::config::{Config, PortConfig};
///
/// let config = Config {
///     ports: Some(PortConfig { min: 3000, max: 3999 }),
///     ..Default::default()
/// };
/// assert_eq!(config.port_range().unwrap().len(), 1000);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory backing the persistent store.
    pub storage_dir: Option<PathBuf>,

    /// Dev-server port range.
    pub ports: Option<PortConfig>,

    /// Random draws allowed before port allocation gives up.
    pub max_port_attempts: Option<u32>,

    /// Extra or replacement project type layouts.
    pub project_structure: Option<BTreeMap<String, String>>,
}

impl Config {
    /// The configured port range, or the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured bounds do not form a valid range.
    pub fn port_range(&self) -> Result<PortRange> {
        let ports = self.ports.clone().unwrap_or_default();
        PortRange::new(Port::try_from(ports.min)?, Port::try_from(ports.max)?)
    }

    /// The built-in layout table with any configured overrides applied.
    #[must_use]
    pub fn project_structure(&self) -> ProjectStructure {
        let structure = ProjectStructure::default();
        match &self.project_structure {
            Some(overrides) => structure.with_overrides(overrides.clone()),
            None => structure,
        }
    }
}

/// Dev-server port range configuration (inclusive).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PortConfig {
    /// Lowest port to hand out.
    pub min: u16,

    /// Highest port to hand out.
    pub max: u16,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            min: 8000,
            max: 9000,
        }
    }
}
