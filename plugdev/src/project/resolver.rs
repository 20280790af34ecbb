//! Upward search for the project properties file.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logging::Logger;
use crate::path::normalize;
use crate::properties::read_properties;

use super::{ProjectInfo, ProjectStructure, Resolution};

/// Name of the file marking a project root.
pub const CONFIG_FILE: &str = "plugin.properties";

/// Subdirectory that may hold [`CONFIG_FILE`] instead of the root itself.
pub const CONFIG_DIR: &str = "config";

/// `frame` value that exempts a project from the layout check.
const LAYOUT_EXEMPT_FRAME: &str = "vue";

/// Resolves the project that owns a file.
///
/// # Examples
///
/// ```
/// use plugdev::project::{ProjectResolver, ProjectStructure};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let temp = tempfile::tempdir().unwrap();
/// let root = temp.path();
/// std::fs::write(root.join("plugin.properties"), "type = app\n").unwrap();
/// std::fs::create_dir_all(root.join("src/app/pages")).unwrap();
///
/// let resolver = ProjectResolver::new(ProjectStructure::default());
/// let resolution = resolver.resolve(root.join("src/app/pages/index.js")).await.unwrap();
///
/// let info = resolution.into_valid().unwrap();
/// assert_eq!(info.project(), root);
/// assert_eq!(info.project_type(), Some("app"));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct ProjectResolver {
    structure: ProjectStructure,
    logger: Logger,
}

impl ProjectResolver {
    /// Create a resolver that validates layouts against `structure`.
    #[must_use]
    pub fn new(structure: ProjectStructure) -> Self {
        Self {
            structure,
            logger: Logger::default(),
        }
    }

    /// Use `logger` for warnings about unusable input.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The layout table used for validation.
    #[must_use]
    pub fn structure(&self) -> &ProjectStructure {
        &self.structure
    }

    /// Resolve the project owning `file_path`.
    ///
    /// The path is made absolute, then every directory from the path itself
    /// up to the filesystem root is checked for `plugin.properties` and then
    /// `config/plugin.properties`. The first hit is parsed and validated.
    ///
    /// An empty path is not an error: a warning is logged and
    /// [`Resolution::NotFound`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be made absolute (e.g. `~user` syntax)
    /// - A discovered properties file cannot be read
    /// - A discovered properties file is malformed
    pub async fn resolve(&self, file_path: impl AsRef<Path>) -> Result<Resolution> {
        let file_path = file_path.as_ref();
        if file_path.as_os_str().is_empty() {
            self.logger
                .category("fetch_project_root")
                .warn("\"\" is not a valid file path");
            return Ok(Resolution::NotFound);
        }

        let start = normalize(file_path)?;
        let Some(info) = self.find_project(&start).await? else {
            log::debug!("no {CONFIG_FILE} above {}", start.display());
            return Ok(Resolution::NotFound);
        };

        if self.layout_matches(&info).await {
            Ok(Resolution::Valid(info))
        } else {
            log::debug!(
                "{} declares type {:?} but its layout does not match",
                info.project().display(),
                info.project_type()
            );
            Ok(Resolution::InvalidLayout(info))
        }
    }

    /// Walk up from `start` (an absolute path) to the first directory that
    /// holds a properties file, and parse it. No layout validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub async fn find_project(&self, start: &Path) -> Result<Option<ProjectInfo>> {
        let mut current = start.to_path_buf();

        loop {
            if let Some(config_file) = locate_config(&current).await {
                let properties = read_properties(&config_file).await?;
                return Ok(Some(ProjectInfo::new(current, config_file, properties)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    async fn layout_matches(&self, info: &ProjectInfo) -> bool {
        if info.frame() == Some(LAYOUT_EXEMPT_FRAME) {
            return true;
        }

        let Some(expected) = info
            .project_type()
            .and_then(|project_type| self.structure.expected_dir(project_type))
        else {
            return false;
        };

        is_dir(&info.project().join(expected)).await
    }
}

/// Returns the properties file for `dir`, preferring the root-level one.
async fn locate_config(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        dir.join(CONFIG_FILE),
        dir.join(CONFIG_DIR).join(CONFIG_FILE),
    ];

    for candidate in candidates {
        if is_file(&candidate).await {
            return Some(candidate);
        }
    }
    None
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_file())
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_dir())
}
