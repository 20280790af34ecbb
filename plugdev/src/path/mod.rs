//! Lexical path handling.
//!
//! Paths handed to plugdev are made absolute without touching the
//! filesystem: `~` is expanded, relative paths are joined onto the current
//! directory, and `.`/`..` components are folded away. Symlinks are left as
//! written.

pub mod normalize;

pub use normalize::{expand_tilde, normalize, resolve_components};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
