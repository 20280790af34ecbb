#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # plugdev
//!
//! Development-time helpers for plugin projects.
//!
//! This library finds the root of the plugin project that owns a file, picks
//! a dev-server port and remembers it between runs, and keeps that state in a
//! small directory-backed store.
//!
//! ## Core Types
//!
//! - [`ProjectResolver`] and [`Resolution`]: Project root discovery and layout validation
//! - [`PortAllocator`], [`Port`] and [`PortRange`]: Dev-server port allocation
//! - [`Store`] and [`LazyStore`]: Persistent key/value storage
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use plugdev::{Port, PortRange};
//!
//! let port = Port::try_from(8080).unwrap();
//! assert_eq!(port.value(), 8080);
//!
//! let range = PortRange::from_bounds(5000.2, 5010.9).unwrap();
//! assert_eq!(range.min().value(), 5001);
//! assert_eq!(range.len(), 10);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod port;
pub mod project;
pub mod properties;
pub mod store;
pub mod util;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use port::{AllocationOptions, Port, PortAllocator, PortRange};
pub use project::{resolve_project_info, ProjectInfo, ProjectResolver, Resolution};
pub use store::{LazyStore, Store};
