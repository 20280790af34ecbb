//! Path normalization functions.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// Handles `~` and `~/path`; `~user` is rejected. Paths that do not start
/// with `~` are returned unchanged.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the path
/// uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use plugdev::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(expand_tilde(Path::new("/absolute")).unwrap(), Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {}
        Some(Component::Normal(first)) if first.to_string_lossy().starts_with('~') => {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
            });
        }
        _ => return Ok(path.to_path_buf()),
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;
    Ok(home.join(components.as_path()))
}

/// Fold `.` and `..` components out of a path.
///
/// `..` at the root stays at the root, the same way shells and most build
/// tools treat `/..`.
///
/// # Examples
///
/// ```
/// use plugdev::path::resolve_components;
/// use std::path::Path;
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), Path::new("/a/c"));
/// assert_eq!(resolve_components(Path::new("/../x")), Path::new("/x"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !result.has_root() {
                    result.push(component);
                }
            }
            Component::Normal(part) => {
                result.push(part);
                depth += 1;
            }
        }
    }

    result
}

/// Normalize a path to absolute form.
///
/// 1. Expands `~`
/// 2. Joins relative paths onto the current directory
/// 3. Folds `.` and `..`
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```
/// use plugdev::path::normalize;
/// use std::path::Path;
///
/// assert_eq!(normalize(Path::new("/a/./b/../c")).unwrap(), Path::new("/a/c"));
/// assert!(normalize(Path::new("src")).unwrap().is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    Ok(resolve_components(&absolute))
}
