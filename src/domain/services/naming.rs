//! File naming for manifests and archives

use chrono::NaiveDateTime;

use crate::domain::value_objects::ArchiveFormat;

/// Second-precision timestamp embedded in generated names
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

const MANIFEST_PREFIX: &str = "manifest";
const MANIFEST_EXTENSION: &str = ".txt";
const BUILD_PREFIX: &str = "build";
const SYSTEM_PREFIX: &str = "system";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `manifest_<version>_<timestamp>.txt`
pub fn manifest_file_name(version: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}{}",
        MANIFEST_PREFIX,
        version,
        format_timestamp(at),
        MANIFEST_EXTENSION
    )
}

/// Archive name for an application package: the manifest name with the
/// `manifest` token replaced by `build` and `.txt` by the archive extension.
///
/// Only the file name is rewritten; directories are never touched.
pub fn archive_name_for_manifest(manifest_name: &str, format: ArchiveFormat) -> String {
    let stem = manifest_name
        .strip_suffix(MANIFEST_EXTENSION)
        .unwrap_or(manifest_name);
    let renamed = match stem.strip_prefix(MANIFEST_PREFIX) {
        Some(rest) => format!("{}{}", BUILD_PREFIX, rest),
        None => stem.replacen(MANIFEST_PREFIX, BUILD_PREFIX, 1),
    };
    format!("{}.{}", renamed, format.extension())
}

/// `system_<version>_<timestamp>.<ext>`
pub fn system_archive_name(version: &str, at: NaiveDateTime, format: ArchiveFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        SYSTEM_PREFIX,
        version,
        format_timestamp(at),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn manifest_name_embeds_version_and_timestamp() {
        assert_eq!(
            manifest_file_name("Init", at()),
            "manifest_Init_2024-01-01-10-00-00.txt"
        );
    }

    #[test]
    fn archive_name_replaces_manifest_token_and_extension() {
        let name = "manifest_Init_2024-01-01-10-00-00.txt";
        assert_eq!(
            archive_name_for_manifest(name, ArchiveFormat::Tar),
            "build_Init_2024-01-01-10-00-00.tar"
        );
        assert_eq!(
            archive_name_for_manifest(name, ArchiveFormat::Zip),
            "build_Init_2024-01-01-10-00-00.zip"
        );
    }

    #[test]
    fn archive_name_only_replaces_leading_token() {
        assert_eq!(
            archive_name_for_manifest("manifest_manifest-fix_2024.txt", ArchiveFormat::TarGz),
            "build_manifest-fix_2024.tar.gz"
        );
    }

    #[test]
    fn system_archive_name_format() {
        assert_eq!(
            system_archive_name("2.1", at(), ArchiveFormat::Tar),
            "system_2.1_2024-01-01-10-00-00.tar"
        );
    }
}
