//! Memoized, shared store handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::Result;

use super::Store;

/// A store that is opened on first use and then shared.
///
/// Construct one `LazyStore` at startup and hand it (or an `Arc` of it) to
/// every consumer. The first [`get`](Self::get) creates the directory;
/// callers that race with it wait on the same initialization and receive the
/// same [`Store`]. If initialization fails, the error is returned and the
/// next call tries again.
///
/// # Examples
///
/// ```
/// use plugdev::store::LazyStore;
/// use std::sync::Arc;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let temp = tempfile::tempdir().unwrap();
/// let lazy = LazyStore::new(temp.path().join("storage"));
///
/// let (a, b) = tokio::join!(lazy.get(), lazy.get());
/// assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
/// # });
/// ```
#[derive(Debug)]
pub struct LazyStore {
    dir: PathBuf,
    store: OnceCell<Arc<Store>>,
}

impl LazyStore {
    /// Creates a handle for a store rooted at `dir`. No I/O happens here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            store: OnceCell::new(),
        }
    }

    /// The directory the store lives in (or will live in).
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns `true` once the store has been opened.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    /// Opens the store on first call and returns the shared instance.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the store directory cannot be created.
    pub async fn get(&self) -> Result<Arc<Store>> {
        let store = self
            .store
            .get_or_try_init(|| async { Store::open(&self.dir).await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_new_does_no_io() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("storage");

        let lazy = LazyStore::new(&dir);
        assert!(!dir.exists());
        assert!(!lazy.is_initialized());
        assert_eq!(lazy.dir(), dir);

        lazy.get().await.unwrap();
        assert!(dir.is_dir());
        assert!(lazy.is_initialized());
    }

    #[tokio::test]
    async fn test_repeated_get_returns_same_store() {
        let temp = TempDir::new().unwrap();
        let lazy = LazyStore::new(temp.path().join("storage"));

        let first = lazy.get().await.unwrap();
        let second = lazy.get().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use_shares_one_store() {
        let temp = TempDir::new().unwrap();
        let lazy = Arc::new(LazyStore::new(temp.path().join("deep").join("storage")));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                tokio::spawn(async move { lazy.get().await.unwrap() })
            })
            .collect();

        let mut stores = Vec::new();
        for handle in handles {
            stores.push(handle.await.unwrap());
        }

        for store in &stores[1..] {
            assert!(Arc::ptr_eq(&stores[0], store));
        }
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "file in the way").unwrap();

        let lazy = LazyStore::new(blocker.join("storage"));
        assert!(lazy.get().await.is_err());
        assert!(!lazy.is_initialized());

        std::fs::remove_file(&blocker).unwrap();
        lazy.get().await.unwrap();
        assert!(lazy.is_initialized());
    }
}
