//! File system scanner for USFM documents.
//!
//! Recursively scans directories for `.usfm` and `.sfm` files, in any
//! letter case.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::config::ProjectConfig;

/// Extensions recognised as USFM, compared case-insensitively.
pub const USFM_EXTENSIONS: &[&str] = &["usfm", "sfm"];

/// Result of scanning for USFM files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Discovered files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Files skipped by an exclude pattern.
    pub excluded: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one, keeping paths sorted and unique.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.files.sort();
        self.files.dedup();
        self.excluded += other.excluded;
    }
}

/// Whether `path` has a USFM extension.
pub fn is_usfm_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            USFM_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Scan a directory tree for USFM files.
pub fn scan_directory(root: &Path, config: &ProjectConfig) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        debug!(root = %root.display(), "source directory does not exist");
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_usfm_file(path) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if config.is_excluded(relative) {
            result.excluded += 1;
            continue;
        }
        result.files.push(path.to_path_buf());
    }

    result.files.sort();
    result
}

/// Scan each source directory, relative to `base_path` unless absolute.
pub fn scan_sources(sources: &[String], base_path: &Path, config: &ProjectConfig) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };
        result.merge(scan_directory(&source_path, config));
    }

    result
}
