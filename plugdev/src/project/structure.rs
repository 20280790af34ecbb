//! Project type to source layout table.

use std::collections::BTreeMap;
use std::path::Path;

/// Maps a project type to the relative directory that must exist in a
/// project of that type.
///
/// # Examples
///
/// ```
/// use plugdev::project::ProjectStructure;
/// use std::path::Path;
///
/// let structure = ProjectStructure::default();
/// assert_eq!(structure.expected_dir("app"), Some(Path::new("src/app")));
/// assert_eq!(structure.expected_dir("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    layouts: BTreeMap<String, String>,
}

impl ProjectStructure {
    /// A table with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            layouts: BTreeMap::new(),
        }
    }

    /// Adds or replaces the layout for `project_type`.
    #[must_use]
    pub fn with_layout(mut self, project_type: impl Into<String>, dir: impl Into<String>) -> Self {
        self.layouts.insert(project_type.into(), dir.into());
        self
    }

    /// Merges `overrides` into the table; entries in `overrides` win.
    #[must_use]
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.layouts
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The expected source directory for `project_type`, relative to the
    /// project root.
    #[must_use]
    pub fn expected_dir(&self, project_type: &str) -> Option<&Path> {
        self.layouts.get(project_type).map(Path::new)
    }

    /// Iterates the known types in name order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }
}

impl Default for ProjectStructure {
    fn default() -> Self {
        Self::empty()
            .with_layout("app", "src/app")
            .with_layout("component", "src/component")
            .with_layout("plugin", "src/plugin")
            .with_layout("widget", "src/widget")
    }
}
