//! Utility functions for CLI operations.
//!
//! Configuration loading, data directory and store resolution, and display
//! helpers shared by the commands.

use crate::error::CliError;
use plugdev::config::{Config, ConfigBuilder};
use plugdev::store::{resolve_data_dir, resolve_storage_dir};
use plugdev::{LazyStore, Logger};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Logger configured from the verbosity flags.
    pub logger: Logger,
}

/// Load layered configuration.
///
/// The config file is read from the data directory (`--data-dir` when
/// given), then `PLUGDEV_*` variables are applied.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data directory from global options.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Create the lazily opened store for this invocation.
///
/// Nothing touches the disk until a command first asks for the store.
pub fn lazy_store(global: &GlobalOptions, config: &Config) -> Result<LazyStore, CliError> {
    let dir = resolve_storage_dir(global.data_dir.as_deref(), config.storage_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    global
        .logger
        .debug(&format!("store directory: {}", dir.display()));
    Ok(LazyStore::new(dir))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
