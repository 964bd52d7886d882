//! Manifest entity - the categorised listing that drives package assembly
//!
//! One entry per line, four fields joined by `--`, a trailing space, then a
//! newline:
//!
//! ```text
//! Load--FOO.so--Changed--/build/load/FOO.so
//! JCL--FOO.jcl--Changed--src/FOO.jcl
//! ```
//!
//! Fields are located around the status field, so a display name or a source
//! path that itself contains `--` still parses. A display name may not contain
//! a whole `Changed` or `Unchanged` segment, and may not end in `-`.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Category, ChangeStatus};
use crate::error::{PackError, PackResult};

/// Field separator
pub const FIELD_SEPARATOR: &str = "--";

/// One manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    category: Category,
    display_name: String,
    status: ChangeStatus,
    source_path: PathBuf,
}

impl ManifestEntry {
    pub fn new(
        category: Category,
        display_name: impl Into<String>,
        status: ChangeStatus,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            category,
            display_name: display_name.into(),
            status,
            source_path: source_path.into(),
        }
    }

    /// Entry for a repository source file. Presence in the change set implies
    /// the file changed.
    pub fn changed_source(category: Category, path: &str) -> Self {
        let display_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Self::new(category, display_name, ChangeStatus::Changed, path)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// File name used inside the package directory
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    /// Absolute for load artifacts, repository-relative for source artifacts
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Render as a manifest line, including the trailing space and newline
    pub fn to_line(&self) -> String {
        format!(
            "{tag}{sep}{name}{sep}{status}{sep}{path} \n",
            tag = self.category.tag(),
            sep = FIELD_SEPARATOR,
            name = self.display_name,
            status = self.status,
            path = self.source_path.display(),
        )
    }

    /// Parse one manifest line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<ManifestEntry>, String> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 4 {
            return Err(format!(
                "expected 4 fields separated by '{}'",
                FIELD_SEPARATOR
            ));
        }

        let tag = fields[0];
        let category =
            Category::from_tag(tag).ok_or_else(|| format!("unknown category tag '{}'", tag))?;

        // First status token that leaves a name before it and a path after it
        let Some((at, status)) = (2..fields.len() - 1)
            .find_map(|i| fields[i].parse::<ChangeStatus>().ok().map(|status| (i, status)))
        else {
            return Err(format!("unknown status '{}'", fields[2]));
        };

        let name = fields[1..at].join(FIELD_SEPARATOR);
        let path = fields[at + 1..].join(FIELD_SEPARATOR);
        let path = path.trim();
        if name.is_empty() {
            return Err("empty display name".to_string());
        }
        if path.is_empty() {
            return Err("empty source path".to_string());
        }

        Ok(Some(ManifestEntry::new(category, name, status, path)))
    }
}

/// Ordered manifest entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ManifestEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Render the whole manifest file
    pub fn render(&self) -> String {
        self.entries.iter().map(ManifestEntry::to_line).collect()
    }

    /// Parse manifest content; `file` is only used in error messages
    pub fn parse(content: &str, file: &Path) -> PackResult<Manifest> {
        let mut manifest = Manifest::new();
        for (index, line) in content.lines().enumerate() {
            match ManifestEntry::parse_line(line) {
                Ok(Some(entry)) => manifest.push(entry),
                Ok(None) => {}
                Err(message) => {
                    return Err(PackError::ManifestParse {
                        file: file.to_path_buf(),
                        line: index + 1,
                        message,
                    })
                }
            }
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_entry_line_format() {
        let entry = ManifestEntry::new(
            Category::Load,
            "FOO.so",
            ChangeStatus::Changed,
            "/build/load/FOO.so",
        );
        assert_eq!(entry.to_line(), "Load--FOO.so--Changed--/build/load/FOO.so \n");
    }

    #[test]
    fn source_entry_uses_base_name() {
        let entry = ManifestEntry::changed_source(Category::Jcl, "src/jcl/FOO.jcl");
        assert_eq!(entry.display_name(), "FOO.jcl");
        assert_eq!(entry.status(), ChangeStatus::Changed);
        assert_eq!(entry.to_line(), "JCL--FOO.jcl--Changed--src/jcl/FOO.jcl \n");
    }

    #[test]
    fn parse_line_trims_trailing_space() {
        let entry = ManifestEntry::parse_line("CTLCRD--BAR.ctl--Changed--src/BAR.ctl \n")
            .unwrap()
            .unwrap();
        assert_eq!(entry.category(), Category::ControlCard);
        assert_eq!(entry.display_name(), "BAR.ctl");
        assert_eq!(entry.source_path(), Path::new("src/BAR.ctl"));
    }

    #[test]
    fn parse_line_keeps_separator_inside_path() {
        let entry = ManifestEntry::parse_line("MOD--X.mod--Unchanged--/opt/a--b/X.mod ")
            .unwrap()
            .unwrap();
        assert_eq!(entry.source_path(), Path::new("/opt/a--b/X.mod"));
        assert_eq!(entry.status(), ChangeStatus::Unchanged);
    }

    #[test]
    fn parse_line_keeps_separator_inside_name() {
        let entry = ManifestEntry::parse_line("JCL--FOO--V2.jcl--Changed--src/FOO--V2.jcl ")
            .unwrap()
            .unwrap();
        assert_eq!(entry.display_name(), "FOO--V2.jcl");
        assert_eq!(entry.status(), ChangeStatus::Changed);
        assert_eq!(entry.source_path(), Path::new("src/FOO--V2.jcl"));
    }

    #[test]
    fn separator_in_load_name_round_trips() {
        let entry = ManifestEntry::new(
            Category::Load,
            "A--B.so",
            ChangeStatus::Unchanged,
            "/l/A--B.so",
        );
        assert_eq!(ManifestEntry::parse_line(&entry.to_line()), Ok(Some(entry)));
    }

    #[test]
    fn parse_line_rejects_missing_status() {
        let err = ManifestEntry::parse_line("Load--A--B.so--/l/A--B.so ").unwrap_err();
        assert!(err.contains("unknown status 'B.so'"), "{err}");
    }

    #[test]
    fn parse_line_rejects_unknown_tag() {
        let err = ManifestEntry::parse_line("CICS--A.rdt--Changed--CICS/A.rdt").unwrap_err();
        assert!(err.contains("CICS"));
    }

    #[test]
    fn parse_line_rejects_short_lines() {
        assert!(ManifestEntry::parse_line("Load--FOO.so--Changed").is_err());
    }

    #[test]
    fn parse_skips_blank_lines_and_reports_line_numbers() {
        let content = "Load--A.so--Changed--/l/A.so \n\nPROC--P.prc--Maybe--p/P.prc \n";
        let err = Manifest::parse(content, Path::new("m.txt")).unwrap_err();
        match err {
            PackError::ManifestParse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_then_parse_preserves_order() {
        let manifest = Manifest::from_entries(vec![
            ManifestEntry::new(Category::Load, "A.so", ChangeStatus::Unchanged, "/l/A.so"),
            ManifestEntry::changed_source(Category::Jcl, "j/A.jcl"),
            ManifestEntry::changed_source(Category::Proc, "p/A.prc"),
        ]);
        let parsed = Manifest::parse(&manifest.render(), Path::new("m.txt")).unwrap();
        assert_eq!(parsed, manifest);
        assert_eq!(parsed.count(Category::Jcl), 1);
    }
}
