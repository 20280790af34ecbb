//! Configuration for plugdev.
//!
//! Settings come from, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. The user config file, `<data dir>/config.yaml` (`~/.plugdev/config.yaml`
//!    unless the data directory is overridden)
//! 3. Environment variables (`PLUGDEV_PORT_MIN`, `PLUGDEV_PORT_MAX`,
//!    `PLUGDEV_STORAGE_DIR`, `PLUGDEV_MAX_PORT_ATTEMPTS`)
//! 4. Programmatic overrides via [`ConfigBuilder::with_config`]
//!
//! A complete config file looks like:
//!
//! ```yaml
//! storage_dir: /var/cache/plugdev
//! ports:
//!   min: 8000
//!   max: 9000
//! max_port_attempts: 200
//! project_structure:
//!   app: src/app
//!   service: src/service
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{Config, PortConfig};
pub use validator::ConfigValidator;
