//! Persistent key/value storage backed by a directory on disk.
//!
//! The store keeps one file per key. It is used to remember small bits of
//! state between runs, such as the last dev-server port handed out.
//!
//! [`LazyStore`] is the handle the rest of the crate passes around: it does no
//! I/O until first use, then creates the directory once and shares the same
//! [`Store`] with every caller.
//!
//! # Examples
//!
//! ```no_run
//! use plugdev::store::LazyStore;
//!
//! # async fn run() -> plugdev::Result<()> {
//! let lazy = LazyStore::new("/tmp/plugdev/storage");
//! let store = lazy.get().await?;
//!
//! store.set("server-port", "8123").await?;
//! assert_eq!(store.get("server-port").await?.as_deref(), Some("8123"));
//! # Ok(())
//! # }
//! ```

mod disk;
mod lazy;
mod location;

pub use disk::Store;
pub use lazy::LazyStore;
pub use location::{default_data_dir, resolve_data_dir, resolve_storage_dir, DATA_DIR_ENV};
