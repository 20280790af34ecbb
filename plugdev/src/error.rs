//! Error types for the plugdev library.
//!
//! Every fallible operation in the crate returns [`Result`], built on a single
//! `thiserror` enum so callers can match on the failure class.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a plugdev error.
///
/// # Examples
///
/// ```
/// use plugdev::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the plugdev library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid port number was provided.
    #[error("invalid port {value}: {reason}")]
    InvalidPort {
        /// The invalid port value.
        value: u16,
        /// The reason the port is invalid.
        reason: String,
    },

    /// An invalid port range was specified.
    #[error("invalid port range {min}-{max}: {reason}")]
    InvalidPortRange {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
        /// The reason the range is invalid.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A properties file contains a line that is neither blank, a comment,
    /// nor a `key = value` pair.
    #[error("malformed properties file {}: line {line} has no '='", path.display())]
    MalformedProperties {
        /// The properties file.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
    },

    /// Probing a port failed for a reason other than the port being in use.
    #[error("probe failed for port {port}: {source}")]
    ProbeFailed {
        /// The port that was being probed.
        port: u16,
        /// The underlying bind error.
        #[source]
        source: std::io::Error,
    },

    /// Every candidate drawn from the range was taken.
    #[error("port range {min}-{max} exhausted after {attempts} attempt(s)")]
    PortExhausted {
        /// Lower bound of the range.
        min: u16,
        /// Upper bound of the range.
        max: u16,
        /// Number of random candidates probed.
        attempts: u32,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::port::InvalidPortError> for Error {
    fn from(err: crate::port::InvalidPortError) -> Self {
        Self::InvalidPort {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if the error came from a bind probe rather than from contention.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdev::Error;
    ///
    /// let err = Error::ProbeFailed {
    ///     port: 80,
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_probe_failure());
    /// ```
    #[must_use]
    pub fn is_probe_failure(&self) -> bool {
        matches!(self, Self::ProbeFailed { .. })
    }
}
