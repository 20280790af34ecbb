//! Reader for `plugin.properties` files.
//!
//! The format is one `key = value` pair per line:
//!
//! ```text
//! # comment
//! type = app
//! app_id = com.example.app;anything after a semicolon is dropped
//! ```
//!
//! Blank lines and lines starting with `#` (after optional whitespace) are
//! skipped. Each remaining line is split at its first `=`, key and value are
//! trimmed, and the value is cut at its first `;`. A line without `=` makes
//! the whole file malformed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Parsed key/value pairs of a properties file.
///
/// Later duplicates of a key overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use plugdev::properties::parse_properties;
///
/// let props = parse_properties("app_id = com.example.app;comment\n").unwrap();
/// assert_eq!(props.get("app_id"), Some("com.example.app"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no pairs were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inserts or replaces a pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

/// Parses properties text.
///
/// # Errors
///
/// Returns [`Error::MalformedProperties`] (with an empty path) for the first
/// line that has no `=`.
pub fn parse_properties(text: &str) -> Result<Properties> {
    parse_with_origin(text, Path::new(""))
}

/// Reads and parses a properties file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and
/// [`Error::MalformedProperties`] if a line has no `=`.
pub async fn read_properties(path: impl AsRef<Path>) -> Result<Properties> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    parse_with_origin(&text, path)
}

/// Reads the `app_id` of a properties file.
///
/// # Errors
///
/// Propagates errors from [`read_properties`].
pub async fn app_id(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(read_properties(path).await?.get("app_id").map(str::to_owned))
}

/// Reads the project `type` of a properties file.
///
/// # Errors
///
/// Propagates errors from [`read_properties`].
pub async fn app_type(path: impl AsRef<Path>) -> Result<Option<String>> {
    Ok(read_properties(path).await?.get("type").map(str::to_owned))
}

fn parse_with_origin(text: &str, origin: &Path) -> Result<Properties> {
    let mut props = Properties::default();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| Error::MalformedProperties {
                path: PathBuf::from(origin),
                line: index + 1,
            })?;

        let value = value.split(';').next().unwrap_or_default();
        props.insert(key.trim(), value.trim());
    }

    Ok(props)
}
