//! Property-based tests for repository selection.
//!
//! These tests use proptest to generate random manifests and verify that
//! the selection invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{select_repos, MANIFEST_REPO};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn repo_path() -> impl Strategy<Value = String> {
        "[a-z]{1,6}(/[a-z]{1,6}){0,2}"
    }

    fn manifest() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(repo_path(), 0..20)
    }

    proptest! {
        /// Property: the manifest repository is always selected, and first
        #[test]
        fn manifest_repo_always_first(aosp in manifest(), custom in manifest()) {
            let selected = select_repos(&aosp, &custom);
            prop_assert_eq!(selected[0].as_str(), MANIFEST_REPO);
        }

        /// Property: every other selected path is in both manifests
        #[test]
        fn selection_is_an_intersection(aosp in manifest(), custom in manifest()) {
            let selected = select_repos(&aosp, &custom);
            for path in selected.iter().skip(1) {
                prop_assert!(aosp.contains(path), "{} not upstream", path);
                prop_assert!(custom.contains(path), "{} not tracked", path);
            }
        }

        /// Property: every path in both manifests is selected
        #[test]
        fn selection_is_complete(aosp in manifest(), custom in manifest()) {
            let selected = select_repos(&aosp, &custom);
            for path in custom.iter().filter(|p| aosp.contains(*p)) {
                prop_assert!(selected.contains(path));
            }
        }

        /// Property: no path is selected twice
        #[test]
        fn selection_has_no_duplicates(aosp in manifest(), custom in manifest()) {
            let selected = select_repos(&aosp, &custom);
            let unique: HashSet<&String> = selected.iter().collect();
            prop_assert_eq!(unique.len(), selected.len());
        }

        /// Property: selection keeps the custom manifest's order
        #[test]
        fn selection_preserves_custom_order(aosp in manifest(), custom in manifest()) {
            let selected = select_repos(&aosp, &custom);
            let positions: Vec<usize> = selected
                .iter()
                .skip(1)
                .map(|path| custom.iter().position(|c| c == path).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
