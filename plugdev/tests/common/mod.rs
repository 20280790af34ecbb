//! Common test utilities for integration tests.
//!
//! Fixture builders for plugin project trees and temporary stores.

use std::fs;
use std::net::{Ipv4Addr, TcpListener};
use std::path::{Path, PathBuf};

use plugdev::project::{CONFIG_DIR, CONFIG_FILE};
use plugdev::Store;
use tempfile::TempDir;

/// Builder for a plugin project laid out on disk.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_property("type", "app")
///     .with_dir("src/app")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ProjectFixture {
    properties: Vec<(String, String)>,
    dirs: Vec<PathBuf>,
    in_config_dir: bool,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates a fixture with no properties and no directories.
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
            dirs: Vec::new(),
            in_config_dir: false,
        }
    }

    /// Adds a `key = value` line to `plugin.properties`.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.push((key.to_string(), value.to_string()));
        self
    }

    /// Creates `dir` (relative to the project root).
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Writes the properties file as `config/plugin.properties`.
    pub fn in_config_dir(mut self) -> Self {
        self.in_config_dir = true;
        self
    }

    /// Writes the tree and returns it.
    pub fn build(self) -> ProjectTree {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().to_path_buf();

        let config_dir = if self.in_config_dir {
            root.join("config")
        } else {
            root.clone()
        };
        fs::create_dir_all(&config_dir).expect("create config dir");

        let text: String = self
            .properties
            .iter()
            .map(|(k, v)| format!("{k} = {v}\n"))
            .collect();
        fs::write(config_dir.join("plugin.properties"), text).expect("write properties");

        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir)).expect("create project dir");
        }

        ProjectTree { _temp: temp, root }
    }
}

/// A project tree on disk, removed when dropped.
#[allow(dead_code)]
pub struct ProjectTree {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl ProjectTree {
    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Opens a store in a fresh temporary directory.
#[allow(dead_code)]
pub async fn temp_store() -> (TempDir, Store) {
    let temp = TempDir::new().expect("create temp dir");
    let store = Store::open(temp.path().join("storage"))
        .await
        .expect("open store");
    (temp, store)
}

/// Holds a port open on the unspecified IPv4 address.
///
/// Returns the listener and its OS-assigned port.
#[allow(dead_code)]
pub fn occupy_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    (listener, port)
}

/// Finds a port that is currently free.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    let (listener, port) = occupy_port();
    drop(listener);
    port
}

/// Returns `true` if `dir` or any ancestor holds a properties file, either
/// directly or under the config subdirectory.
#[allow(dead_code)]
pub fn marker_above(dir: &Path) -> bool {
    dir.ancestors().any(|ancestor| {
        ancestor.join(CONFIG_FILE).exists() || ancestor.join(CONFIG_DIR).join(CONFIG_FILE).exists()
    })
}
