//! Property tests for change detection and category markers.

use std::path::PathBuf;

use proptest::prelude::*;

use deploypack::domain::services::{ChangeMatcher, ManifestBuilder, SourceMarkers};
use deploypack::{Category, ChangeSet, ChangeStatus, MatchPolicy};

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9]{0,7}").unwrap()
}

fn change_path() -> impl Strategy<Value = String> {
    let dir = proptest::sample::select(vec!["", "src/", "jcl/", "a/b/"]);
    let ext = proptest::sample::select(vec![".jcl", ".ctl", ".prc", ".cbl", ".cpy", ""]);
    (dir, stem(), ext).prop_map(|(dir, stem, ext)| format!("{}{}{}", dir, stem, ext))
}

fn change_set() -> impl Strategy<Value = ChangeSet> {
    proptest::collection::vec(change_path(), 0..12).prop_map(|paths| ChangeSet::new("c0ffee", paths))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Under the substring policy a stem is changed exactly when
    /// some path contains it.
    #[test]
    fn property_substring_status(stem in stem(), changes in change_set()) {
        let artifact = PathBuf::from(format!("/load/{}.so", stem));
        let expected = if changes.iter().any(|p| p.contains(stem.as_str())) {
            ChangeStatus::Changed
        } else {
            ChangeStatus::Unchanged
        };
        prop_assert_eq!(
            ChangeMatcher::new(MatchPolicy::Substring).status_for(&artifact, &changes),
            expected
        );
    }

    /// PROPERTY: Exact matches are always substring matches too.
    #[test]
    fn property_exact_implies_substring(stem in stem(), changes in change_set()) {
        let artifact = PathBuf::from(format!("/load/{}.so", stem));
        if ChangeMatcher::new(MatchPolicy::Exact).status_for(&artifact, &changes).is_changed() {
            prop_assert!(ChangeMatcher::new(MatchPolicy::Substring)
                .status_for(&artifact, &changes)
                .is_changed());
        }
    }

    /// PROPERTY: Every path carrying the JCL marker yields one JCL entry, and
    /// no JCL entry comes from a path without it.
    #[test]
    fn property_jcl_entries_follow_marker(changes in change_set()) {
        let manifest = ManifestBuilder::default().build(&[], &[], &changes);

        let expected: Vec<&str> = changes.iter().filter(|p| p.contains(".jcl")).collect();
        let actual: Vec<String> = manifest
            .by_category(Category::Jcl)
            .map(|e| e.source_path().to_string_lossy().into_owned())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Source entries are grouped JCL, control cards, procedures.
    #[test]
    fn property_source_entries_grouped(changes in change_set()) {
        let manifest = ManifestBuilder::new(
            ChangeMatcher::new(MatchPolicy::Exact),
            SourceMarkers::default(),
        )
        .build(&[], &[], &changes);

        let rank = |c: Category| match c {
            Category::Jcl => 0,
            Category::ControlCard => 1,
            Category::Proc => 2,
            _ => 3,
        };
        let ranks: Vec<u8> = manifest.entries().iter().map(|e| rank(e.category())).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(manifest
            .entries()
            .iter()
            .all(|e| e.status() == ChangeStatus::Changed));
    }
}
