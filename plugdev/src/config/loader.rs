//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::store::resolve_data_dir;

/// Name of the user configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use plugdev::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("{config:?}");
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the user config file for the given data directory override.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved.
    pub fn user_config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        Ok(resolve_data_dir(data_dir)?.join(CONFIG_FILE_NAME))
    }

    /// Load `<data dir>/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let path = Self::user_config_path(data_dir)?;
        if !path.exists() {
            log::debug!("no user config at {}", path.display());
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }
}
