//! Property tests for manifest and archive names.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use deploypack::domain::services::naming;
use deploypack::ArchiveFormat;

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9.]{1,12}").unwrap()
}

fn format() -> impl Strategy<Value = ArchiveFormat> {
    prop_oneof![
        Just(ArchiveFormat::Zip),
        Just(ArchiveFormat::Tar),
        Just(ArchiveFormat::TarGz)
    ]
}

proptest! {
    /// PROPERTY: The archive name is the manifest name with `build` for
    /// `manifest` and the archive extension for `.txt`.
    #[test]
    fn property_archive_name_mirrors_manifest(
        version in version(),
        at in timestamp(),
        format in format(),
    ) {
        let manifest = naming::manifest_file_name(&version, at);
        let archive = naming::archive_name_for_manifest(&manifest, format);
        let expected = format!(
            "build_{}_{}.{}",
            version,
            naming::format_timestamp(at),
            format.extension()
        );
        prop_assert_eq!(archive, expected);
    }

    /// PROPERTY: Timestamps are always 19 characters, second precision.
    #[test]
    fn property_timestamp_width(at in timestamp()) {
        prop_assert_eq!(naming::format_timestamp(at).len(), 19);
    }
}
