//! Directory-backed key/value store.

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

/// A key/value store persisted as one file per key.
///
/// Keys are percent-encoded into file names so any UTF-8 key maps to a
/// single file inside the store directory. Values are stored verbatim.
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    write_seq: AtomicU64,
}

impl Store {
    /// Opens a store rooted at `dir`, creating the directory (and any missing
    /// parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        log::debug!("opened store at {}", dir.display());

        Ok(Self {
            dir,
            write_seq: AtomicU64::new(0),
        })
    }

    /// The directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the value file exists but
    /// cannot be read.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The value is written to a temporary file in the store directory and
    /// renamed over the key file, so readers never see a partial value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the write fails.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let tmp = self
            .dir
            .join(format!(".{}.{}.{seq}.tmp", encode_key(key), std::process::id()));

        tokio::fs::write(&tmp, value).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// Deletes `key`. Returns `true` if a value was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the file cannot be removed.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(Error::Validation {
                field: "key".into(),
                message: "store keys must be non-empty".into(),
            });
        }
        Ok(self.dir.join(encode_key(key)))
    }
}

/// Percent-encodes every byte outside `[A-Za-z0-9_-]`.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
