//! Small helpers used around the dev server and packaging commands.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::logging::Logger;
use crate::path::normalize;

/// Longest accepted package name.
const MAX_PACKAGE_NAME_LEN: usize = 20;

/// Checks that `name` is usable as a package name: 1 to 20 characters, each
/// an ASCII letter, digit or underscore.
///
/// An invalid name is reported through `logger` under the
/// `validate_package_name` category.
///
/// # Examples
///
/// ```
/// use plugdev::util::validate_package_name;
/// use plugdev::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Quiet);
/// assert!(validate_package_name("my_app2", &logger));
/// assert!(!validate_package_name("my app", &logger));
/// ```
pub fn validate_package_name(name: &str, logger: &Logger) -> bool {
    let valid = (1..=MAX_PACKAGE_NAME_LEN).contains(&name.chars().count())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
        logger.category("validate_package_name").error(&format!(
            "\"{name}\" is not a valid package name: use at most \
             {MAX_PACKAGE_NAME_LEN} letters, digits or underscores"
        ));
    }
    valid
}

/// Maps a project directory to its mirror location under `temp_path`.
///
/// The project path is made absolute, its root (and drive prefix on
/// Windows) is dropped, and the rest is appended to `temp_path`, so
/// `/home/me/demo` becomes `<temp_path>/home/me/demo`.
///
/// # Errors
///
/// Returns an error if `project_path` cannot be made absolute.
///
/// # Examples
///
/// ```
/// use plugdev::util::map_to_temp_path;
/// use std::path::Path;
///
/// let mapped = map_to_temp_path(Path::new("/tmp/build"), Path::new("/home/me/demo")).unwrap();
/// assert_eq!(mapped, Path::new("/tmp/build/home/me/demo"));
/// ```
pub fn map_to_temp_path(temp_path: &Path, project_path: &Path) -> Result<PathBuf> {
    let absolute = normalize(project_path)?;
    let relative: PathBuf = absolute
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    Ok(temp_path.join(relative))
}

/// An inclusive byte range within a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte offset.
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// A parsed range always covers at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Parses a single-range HTTP `Range` header against a resource of `size`
/// bytes.
///
/// Accepted forms are `bytes=start-end`, `bytes=start-` and `bytes=-suffix`.
/// A suffix longer than the resource starts at byte 0. Multiple ranges,
/// unparsable numbers, `start > end` and `end > size` yield `None`.
///
/// # Examples
///
/// ```
/// use plugdev::util::{parse_byte_range, ByteRange};
///
/// assert_eq!(parse_byte_range("bytes=0-99", 1000), Some(ByteRange { start: 0, end: 99 }));
/// assert_eq!(parse_byte_range("bytes=900-", 1000), Some(ByteRange { start: 900, end: 999 }));
/// assert_eq!(parse_byte_range("bytes=-100", 1000), Some(ByteRange { start: 900, end: 999 }));
/// assert_eq!(parse_byte_range("bytes=0-1,5-6", 1000), None);
/// ```
#[must_use]
pub fn parse_byte_range(header: &str, size: u64) -> Option<ByteRange> {
    if header.contains(',') {
        return None;
    }

    let spec = header.trim().strip_prefix("bytes=").unwrap_or(header.trim());
    let mut parts = spec.splitn(2, '-');
    let start = parts.next().and_then(parse_offset);
    let end = parts.next().and_then(parse_offset);

    // Open-ended forms need a last byte; an empty resource has none.
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, size.checked_sub(1)?),
        (None, Some(suffix)) => (size.saturating_sub(suffix), size.checked_sub(1)?),
        (None, None) => return None,
    };

    if start > end || end > size {
        return None;
    }
    Some(ByteRange { start, end })
}

fn parse_offset(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}
