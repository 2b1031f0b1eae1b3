//! Project configuration (usfm-verify.yaml) parsing.
//!
//! The config names where the USFM files live and sets default
//! verification options. Command-line flags override every field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UsfmError};
use crate::verify::{UsfmVersion, VerifyOptions};

/// Project configuration loaded from usfm-verify.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directories to scan for USFM files, relative to the config.
    /// Defaults to the config's own directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Language of the translation, e.g. `sw` or `fr`.
    pub language_code: Option<String>,

    pub usfm_version: Option<UsfmVersion>,

    pub suppress_empty_verses: bool,

    pub warn_ascii_titles: bool,

    /// Skip the raw `\c`/`\v` spacing checks.
    pub skip_marker_checks: bool,

    /// Write `issues.txt` next to the verified files.
    pub issues_file: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            sources: vec![],
            excludes: vec![],
            language_code: None,
            usfm_version: None,
            suppress_empty_verses: false,
            warn_ascii_titles: false,
            skip_marker_checks: false,
            issues_file: true,
        }
    }
}

impl ProjectConfig {
    /// Load config from a usfm-verify.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| UsfmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| UsfmError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check usfm-verify.yaml syntax".to_string()),
        })
    }

    /// Verification options this config asks for.
    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions {
            language_code: self.language_code.clone(),
            usfm_version: self.usfm_version.unwrap_or_default(),
            suppress_empty_verses: self.suppress_empty_verses,
            warn_ascii_titles: self.warn_ascii_titles,
            skip_marker_checks: self.skip_marker_checks,
        }
    }

    /// Whether any exclude pattern matches `path`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path, pattern))
    }

    /// Source directories, defaulting to the project root.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Minimal glob matching: `**/dir/*`, `*.ext`, `dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{dir}/")) || path.contains(&format!("/{dir}/")),
            None => path.contains(rest),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*').filter(|_| !pattern.contains('/')) {
        return path.ends_with(suffix);
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{dir}/")) || path.contains(&format!("/{dir}/"));
    }

    path.contains(pattern)
}
