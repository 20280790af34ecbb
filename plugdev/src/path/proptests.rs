//! Property-based tests for lexical path normalization.

use super::normalize::{normalize, resolve_components};
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        path.extend(parts);
        path
    })
}

/// A path mixing plain names with `.` and `..`.
fn dotted_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            3 => component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| {
        let mut path = PathBuf::from("/");
        path.extend(parts);
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn normalized_paths_have_no_dot_components(path in dotted_path_strategy()) {
        let normalized = normalize(&path).unwrap();
        prop_assert!(normalized.is_absolute());
        prop_assert!(normalized
            .components()
            .all(|c| matches!(c, Component::RootDir | Component::Normal(_))));
    }

    #[test]
    fn normalize_is_idempotent(path in dotted_path_strategy()) {
        let once = normalize(&path).unwrap();
        let twice = normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clean_absolute_paths_are_unchanged(path in absolute_path_strategy()) {
        prop_assert_eq!(resolve_components(&path), path);
    }

    #[test]
    fn child_then_parent_cancels(path in absolute_path_strategy(), child in component_strategy()) {
        let detour = path.join(&child).join("..");
        prop_assert_eq!(normalize(&detour).unwrap(), path);
    }

    #[test]
    fn never_climbs_above_root(depth in 0usize..10) {
        let mut path = PathBuf::from("/");
        for _ in 0..depth {
            path.push("..");
        }
        prop_assert_eq!(normalize(&path).unwrap(), Path::new("/"));
    }
}
