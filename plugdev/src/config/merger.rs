//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers.
///
/// Scalar fields are replaced by the higher layer when set. Layout tables
/// are combined key by key so a layer can add one project type without
/// restating the rest.
///
/// # Examples
///
/// ```
/// use plugdev::config::{Config, ConfigMerger};
///
/// let low = Config { max_port_attempts: Some(10), ..Default::default() };
/// let high = Config { max_port_attempts: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_port_attempts, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: Vec<Config>) -> Config {
        let mut result = Config::default();
        for layer in &layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge `source` into `target`, `source` winning.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.storage_dir.is_some() {
            target.storage_dir.clone_from(&source.storage_dir);
        }

        if source.ports.is_some() {
            target.ports.clone_from(&source.ports);
        }

        if source.max_port_attempts.is_some() {
            target.max_port_attempts = source.max_port_attempts;
        }

        if let Some(ref layouts) = source.project_structure {
            target
                .project_structure
                .get_or_insert_with(Default::default)
                .extend(layouts.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}
