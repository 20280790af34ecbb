//! Where the store and other per-user data live on disk.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PLUGDEV_DATA_DIR";

const STORAGE_SUBDIR: &str = "storage";

/// Returns the default data directory, `~/.plugdev`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".plugdev"))
}

/// Resolves the data directory.
///
/// The resolution order is:
/// 1. `explicit`, when given (e.g. a `--data-dir` flag)
/// 2. `$PLUGDEV_DATA_DIR`
/// 3. `~/.plugdev`
///
/// # Errors
///
/// Returns an error if neither override is set and the home directory cannot
/// be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// Resolves the store directory.
///
/// The resolution order is:
/// 1. `<explicit data dir>/storage`
/// 2. `$PLUGDEV_DATA_DIR/storage`
/// 3. `configured` (the `storage_dir` config value)
/// 4. `~/.plugdev/storage`
///
/// # Errors
///
/// Returns an error if nothing is set and the home directory cannot be
/// determined.
pub fn resolve_storage_dir(data_dir: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    let overridden = data_dir.is_some() || std::env::var_os(DATA_DIR_ENV).is_some();
    match configured {
        Some(dir) if !overridden => Ok(dir.to_path_buf()),
        _ => Ok(resolve_data_dir(data_dir)?.join(STORAGE_SUBDIR)),
    }
}
