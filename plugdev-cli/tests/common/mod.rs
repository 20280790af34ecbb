//! Common test utilities for CLI integration tests.
//!
//! - Test environment setup with temporary directories
//! - Command builders with an isolated data directory
//! - Plugin project fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const ISOLATED_VARS: &[&str] = &[
    "PLUGDEV_DATA_DIR",
    "PLUGDEV_PORT_MIN",
    "PLUGDEV_PORT_MAX",
    "PLUGDEV_STORAGE_DIR",
    "PLUGDEV_MAX_PORT_ATTEMPTS",
    "PLUGDEV_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the plugdev data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; plugdev creates what it needs.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("plugdev-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with no flags and no inherited `PLUGDEV_*` variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("plugdev").expect("Failed to find plugdev binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file (creating parents) and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a project under `name` with the given properties text and
    /// layout directories. Returns the project root.
    pub fn create_project(&self, name: &str, properties: &str, dirs: &[&str]) -> PathBuf {
        let root = self.create_dir(name);
        std::fs::write(root.join("plugin.properties"), properties)
            .expect("Failed to write plugin.properties");
        for dir in dirs {
            std::fs::create_dir_all(root.join(dir)).expect("Failed to create layout dir");
        }
        root
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, yaml: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Run `plugdev port` with extra args and return the allocated port.
    ///
    /// # Panics
    /// Panics if the command fails or doesn't print a port.
    pub fn allocate(&self, args: &[&str]) -> u16 {
        let output = self
            .command()
            .arg("port")
            .args(args)
            .output()
            .expect("Failed to run port command");

        assert!(
            output.status.success(),
            "port failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        parse_port(&stdout)
    }

    /// Path of the file holding the remembered port.
    pub fn cached_port_file(&self) -> PathBuf {
        self.data_dir.join("storage").join("server-port")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a port number from command output.
#[allow(dead_code)]
pub fn parse_port(output: &str) -> u16 {
    output
        .trim()
        .parse()
        .expect("Output is not a valid port number")
}

/// Ask the OS for a port that is free right now.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    std::net::TcpListener::bind(("0.0.0.0", 0))
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .expect("Failed to find a free port")
}
