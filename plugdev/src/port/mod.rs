//! Port types and dev-server port allocation.
//!
//! [`Port`] and [`PortRange`] are the validated value types; the
//! [`allocator`] module picks a free port, remembering the last choice in the
//! persistent store, and [`probe`] decides whether a port is currently bound.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod allocator;
pub mod probe;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use allocator::{AllocationOptions, PortAllocator, SERVER_PORT_KEY};
pub use probe::{MockPortProbe, PortProbe, ProbeOutcome, TcpPortProbe};

/// A valid network port number (1-65535).
///
/// # Examples
///
/// ```
/// use plugdev::Port;
///
/// let port = Port::try_from(8080).unwrap();
/// assert_eq!(port.value(), 8080);
/// assert!(Port::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(u16);

impl Port {
    /// The minimum valid port number.
    pub const MIN: u16 = 1;

    /// The maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Returns the underlying port number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses a port persisted as text.
    ///
    /// Leading and trailing whitespace is ignored. Anything that is not a
    /// number in `1..=65535` yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdev::Port;
    ///
    /// assert_eq!(Port::parse_stored(" 8123\n").map(Port::value), Some(8123));
    /// assert_eq!(Port::parse_stored("abc"), None);
    /// assert_eq!(Port::parse_stored("0"), None);
    /// ```
    #[must_use]
    pub fn parse_stored(text: &str) -> Option<Self> {
        text.trim()
            .parse::<u16>()
            .ok()
            .and_then(|value| Self::try_from(value).ok())
    }
}

impl TryFrom<u16> for Port {
    type Error = InvalidPortError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidPortError {
                value,
                reason: "port 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid port numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPortError {
    /// The invalid port value.
    pub value: u16,
    /// The reason the port is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid port {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPortError {}

/// An inclusive range of ports.
///
/// # Examples
///
/// ```
/// use plugdev::{Port, PortRange};
///
/// let range = PortRange::new(
///     Port::try_from(5000).unwrap(),
///     Port::try_from(5010).unwrap(),
/// ).unwrap();
/// assert_eq!(range.len(), 11);
/// assert!(range.contains(Port::try_from(5010).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    min: Port,
    max: Port,
}

impl PortRange {
    /// Creates a new port range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPortRange`] if `max` is less than `min`.
    pub fn new(min: Port, max: Port) -> Result<Self> {
        if max < min {
            return Err(Error::InvalidPortRange {
                min: i64::from(min.value()),
                max: i64::from(max.value()),
                reason: "max must be greater than or equal to min".into(),
            });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from caller-supplied numeric bounds.
    ///
    /// `min` is rounded up and `max` rounded down before validation, so
    /// `from_bounds(999.5, 1000.9)` is the single port 1000.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPortRange`] if either bound is not finite,
    /// falls outside `1..=65535` after rounding, or the rounded range is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdev::PortRange;
    ///
    /// let range = PortRange::from_bounds(999.5, 1000.9).unwrap();
    /// assert_eq!(range.min().value(), 1000);
    /// assert_eq!(range.max().value(), 1000);
    ///
    /// assert!(PortRange::from_bounds(10.2, 10.8).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_bounds(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidPortRange {
                min: 0,
                max: 0,
                reason: "bounds must be finite numbers".into(),
            });
        }

        let (low, high) = (min.ceil(), max.floor());
        let invalid = |reason: &str| Error::InvalidPortRange {
            min: low as i64,
            max: high as i64,
            reason: reason.into(),
        };

        let valid = f64::from(Port::MIN)..=f64::from(Port::MAX);
        if !valid.contains(&low) || !valid.contains(&high) {
            return Err(invalid("bounds must lie within 1-65535"));
        }
        if high < low {
            return Err(invalid("range is empty after rounding"));
        }

        Ok(Self {
            min: Port(low as u16),
            max: Port(high as u16),
        })
    }

    /// Returns the minimum port in the range.
    #[must_use]
    pub const fn min(&self) -> Port {
        self.min
    }

    /// Returns the maximum port in the range.
    #[must_use]
    pub const fn max(&self) -> Port {
        self.max
    }

    /// Returns `true` if the range contains the given port.
    #[must_use]
    pub const fn contains(&self, port: Port) -> bool {
        port.value() >= self.min.value() && port.value() <= self.max.value()
    }

    /// Returns the number of ports in the range.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.max.value() as u32 - self.min.value() as u32 + 1
    }

    /// A valid range always holds at least one port.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
