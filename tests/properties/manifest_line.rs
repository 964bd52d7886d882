//! Property tests for the manifest line format.

use std::path::Path;

use proptest::prelude::*;

use deploypack::domain::entities::{Manifest, ManifestEntry};
use deploypack::{Category, ChangeStatus};

fn manifest_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::MANIFEST_ORDER.to_vec())
}

fn status() -> impl Strategy<Value = ChangeStatus> {
    prop_oneof![Just(ChangeStatus::Changed), Just(ChangeStatus::Unchanged)]
}

/// Display names may contain the separator but never a status segment
fn display_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.#@$][A-Za-z0-9_.#@$-]{0,22}[A-Za-z0-9_.#@$]")
        .unwrap()
        .prop_filter("no status segment", |s| {
            !s.split("--").any(|part| part == "Changed" || part == "Unchanged")
        })
}

/// Paths may contain the separator but no surrounding whitespace
fn source_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_./-]{0,40}[A-Za-z0-9_.]")
        .unwrap()
        .prop_filter("no leading dash", |s| !s.starts_with('-'))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A rendered line parses back to the same entry.
    #[test]
    fn property_line_round_trips(
        category in manifest_category(),
        name in display_name(),
        status in status(),
        path in source_path(),
    ) {
        let entry = ManifestEntry::new(category, name, status, path);
        let parsed = ManifestEntry::parse_line(&entry.to_line()).unwrap();
        prop_assert_eq!(parsed, Some(entry));
    }

    /// PROPERTY: Every rendered line ends with a space and a newline.
    #[test]
    fn property_line_has_trailing_space(
        category in manifest_category(),
        name in display_name(),
        status in status(),
        path in source_path(),
    ) {
        let line = ManifestEntry::new(category, name, status, path).to_line();
        prop_assert!(line.ends_with(" \n"));
        prop_assert_eq!(line.matches('\n').count(), 1);
    }

    /// PROPERTY: Line parsing never panics on arbitrary input.
    #[test]
    fn property_parse_line_never_panics(s in "(?s).{0,256}") {
        let _ = ManifestEntry::parse_line(&s);
    }

    /// PROPERTY: Manifest parsing never panics and reports a 1-based line.
    #[test]
    fn property_manifest_errors_have_line_numbers(s in "(?s).{0,512}") {
        if let Err(deploypack::PackError::ManifestParse { line, .. }) =
            Manifest::parse(&s, Path::new("m.txt"))
        {
            prop_assert!(line >= 1);
            prop_assert!(line <= s.lines().count());
        }
    }
}
