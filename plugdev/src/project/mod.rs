//! Project root discovery for plugin projects.
//!
//! A project root is the directory that owns a `plugin.properties` file,
//! either directly or as `config/plugin.properties`. Starting from any file
//! inside a project, [`ProjectResolver`] walks up the directory tree to find
//! that root, reads the properties, and checks that the declared project
//! `type` matches the directory layout on disk.
//!
//! # Examples
//!
//! ```no_run
//! use plugdev::project::{ProjectResolver, ProjectStructure, Resolution};
//!
//! # async fn run() -> plugdev::Result<()> {
//! let resolver = ProjectResolver::new(ProjectStructure::default());
//!
//! match resolver.resolve("src/app/pages/index.js").await? {
//!     Resolution::Valid(info) => println!("project at {}", info.project().display()),
//!     Resolution::InvalidLayout(info) => {
//!         println!("{} does not match its declared type", info.project().display());
//!     }
//!     Resolution::NotFound => println!("not inside a plugin project"),
//! }
//! # Ok(())
//! # }
//! ```

mod info;
mod resolver;
mod structure;

pub use info::{ProjectInfo, Resolution, RESERVED_KEYS};
pub use resolver::{ProjectResolver, CONFIG_DIR, CONFIG_FILE};
pub use structure::ProjectStructure;

use std::path::Path;

use crate::error::Result;

/// Resolves the project owning `file_path` against the built-in layouts.
///
/// Shorthand for `ProjectResolver::new(ProjectStructure::default()).resolve(file_path)`.
///
/// # Errors
///
/// See [`ProjectResolver::resolve`].
pub async fn resolve_project_info(file_path: impl AsRef<Path>) -> Result<Resolution> {
    ProjectResolver::new(ProjectStructure::default())
        .resolve(file_path)
        .await
}
