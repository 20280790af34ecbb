//! Discovered project metadata.

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::properties::Properties;

/// Property keys dropped from the serialized form of [`ProjectInfo`].
///
/// `project` and `config_file` are the discovered paths and `status` is the
/// resolution outcome reports put next to them; a properties file cannot
/// override any of them.
pub const RESERVED_KEYS: &[&str] = &["project", "config_file", "status"];

/// A project found by walking up from a file.
///
/// Holds the project root, the properties file it came from, and every
/// pair read from that file. Serializes as one flat map: the two paths first,
/// then every property whose key is not in [`RESERVED_KEYS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    project: PathBuf,
    config_file: PathBuf,
    properties: Properties,
}

impl ProjectInfo {
    /// Builds project info from a root directory, the file it was read from
    /// and its parsed properties.
    #[must_use]
    pub fn new(project: PathBuf, config_file: PathBuf, properties: Properties) -> Self {
        Self {
            project,
            config_file,
            properties,
        }
    }

    /// The project root directory.
    #[must_use]
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// The properties file that identified the project.
    #[must_use]
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// The declared project type (`type` key).
    #[must_use]
    pub fn project_type(&self) -> Option<&str> {
        self.properties.get("type")
    }

    /// The declared front-end framework (`frame` key).
    #[must_use]
    pub fn frame(&self) -> Option<&str> {
        self.properties.get("frame")
    }

    /// The application id (`app_id` key).
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        self.properties.get("app_id")
    }

    /// Any property by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// All properties read from the file.
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl Serialize for ProjectInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("project", &self.project)?;
        map.serialize_entry("config_file", &self.config_file)?;
        for (key, value) in self.properties.iter() {
            if !RESERVED_KEYS.contains(&key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Outcome of resolving a project from a file path.
///
/// `NotFound` and `InvalidLayout` are deliberately different: the first
/// means there is no project at all, the second that a properties file was
/// found but the project does not look like its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A properties file was found and the layout checks out.
    Valid(ProjectInfo),
    /// A properties file was found but the declared type's directory is
    /// missing and no override applies.
    InvalidLayout(ProjectInfo),
    /// The input was unusable or no properties file exists up to the root.
    NotFound,
}

impl Resolution {
    /// Returns `true` for [`Resolution::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for [`Resolution::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The discovered info, valid or not.
    #[must_use]
    pub const fn info(&self) -> Option<&ProjectInfo> {
        match self {
            Self::Valid(info) | Self::InvalidLayout(info) => Some(info),
            Self::NotFound => None,
        }
    }

    /// The info only if the project is valid.
    #[must_use]
    pub fn into_valid(self) -> Option<ProjectInfo> {
        match self {
            Self::Valid(info) => Some(info),
            Self::InvalidLayout(_) | Self::NotFound => None,
        }
    }
}
