use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::detector::detect_source_kind;
use crate::models::SourceKind;

/// A recognized file under the repository root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub kind: SourceKind,
    pub path: PathBuf,
    /// Path relative to the root, as shown in provenance tags.
    pub relative: String,
}

impl SourceFile {
    /// Provenance tag, e.g. `"HTML: _layouts/default.html"`.
    pub fn location(&self) -> String {
        format!("{}: {}", self.kind.label(), self.relative)
    }
}

/// Recursively list every recognized file under `root` in lexical path order.
///
/// Directories whose name is in `exclude_dirs` are not descended into, and
/// files in `skip_files` (the tool's own artifacts) are left out. Entries the
/// walker cannot read are logged and skipped.
pub fn discover(root: &Path, exclude_dirs: &[String], skip_files: &[PathBuf]) -> Vec<SourceFile> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable path: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() || skip_files.iter().any(|p| p == entry.path()) {
            continue;
        }

        let Some(kind) = detect_source_kind(entry.path()) else {
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .display()
            .to_string();

        files.push(SourceFile {
            kind,
            path: entry.into_path(),
            relative,
        });
    }

    files
}

fn is_excluded(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.iter().any(|d| d == name))
}
