//! USFM file discovery.
//!
//! Finds the documents to verify under a project directory, either by
//! scanning the whole tree or following the `sources` of a
//! `usfm-verify.yaml` config.
//!
//! # Example
//!
//! ```ignore
//! use usfm_verify::discovery::discover;
//!
//! let result = discover("./my-translation")?;
//! println!("Found {} books", result.scan.total());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::ProjectConfig;
pub use scanner::{is_usfm_file, scan_directory, scan_sources, ScanResult, USFM_EXTENSIONS};

/// The name of the project config file.
pub const CONFIG_FILENAME: &str = "usfm-verify.yaml";

/// Result of discovering USFM files.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded config (default if no usfm-verify.yaml was found).
    pub config: ProjectConfig,

    pub has_config: bool,

    pub scan: ScanResult,
}

/// Load `usfm-verify.yaml` from `dir`, if present.
pub fn load_config(dir: &Path) -> Result<Option<ProjectConfig>> {
    let path = dir.join(CONFIG_FILENAME);
    if path.is_file() {
        ProjectConfig::load(&path).map(Some)
    } else {
        Ok(None)
    }
}

/// Discover USFM files in a project directory, honouring its config.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (config, has_config) = match load_config(&root)? {
        Some(config) => (config, true),
        None => (ProjectConfig::default(), false),
    };

    let scan = scan_sources(&config.effective_sources(), &root, &config);

    Ok(DiscoveryResult {
        root,
        config,
        has_config,
        scan,
    })
}

/// Discover USFM files from explicit paths.
///
/// Directories are scanned recursively with `config`'s excludes; files are
/// taken as given, whatever their extension.
pub fn discover_paths(paths: &[PathBuf], config: ProjectConfig) -> Result<DiscoveryResult> {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &config));
        } else if path.is_file() {
            scan.merge(ScanResult {
                files: vec![path.clone()],
                excluded: 0,
            });
        }
    }

    let root = match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from("."),
    };

    Ok(DiscoveryResult {
        root,
        config,
        has_config: false,
        scan,
    })
}
