//! Line-at-a-time reporting to stderr and the issues log.

use std::fs::{self, File};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, UsfmError};

use super::{Diagnostic, Reporter};

/// Name of the issues log written next to the verified files.
pub const ISSUES_FILENAME: &str = "issues.txt";

/// A previous issues log is kept under this name the first time it is replaced.
pub const OLDEST_ISSUES_FILENAME: &str = "issues-oldest.txt";

/// Writes every diagnostic as one line to each sink, flushing after each line.
pub struct StreamReporter {
    sinks: Vec<Box<dyn Write + Send>>,
    issues_path: Option<PathBuf>,
    errors: usize,
    warnings: usize,
}

impl Default for StreamReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamReporter {
    /// A reporter with no sinks; add them with the `with_*` methods.
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            issues_path: None,
            errors: 0,
            warnings: 0,
        }
    }

    /// A reporter writing to stderr.
    pub fn stderr() -> Self {
        Self::new().with_writer(io::stderr())
    }

    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sinks.push(Box::new(writer));
        self
    }

    /// Also write to `issues.txt` in `dir`, rotating an existing log.
    pub fn with_issues_file(mut self, dir: &Path) -> Result<Self> {
        let path = dir.join(ISSUES_FILENAME);
        if path.exists() {
            let oldest = dir.join(OLDEST_ISSUES_FILENAME);
            if !oldest.exists() {
                fs::rename(&path, &oldest).map_err(|e| UsfmError::Io {
                    path: path.clone(),
                    message: format!("Failed to rotate issues file: {}", e),
                })?;
                debug!(path = %oldest.display(), "kept previous issues file");
            }
        }
        let file = File::create(&path).map_err(|e| UsfmError::Io {
            path: path.clone(),
            message: format!("Failed to create issues file: {}", e),
        })?;
        self.sinks.push(Box::new(LineWriter::new(file)));
        self.issues_path = Some(path);
        Ok(self)
    }

    /// Path of the issues log, if one is being written.
    pub fn issues_path(&self) -> Option<&Path> {
        self.issues_path.as_deref()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Number of diagnostics reported so far.
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    fn write_line(sink: &mut (dyn Write + Send), diagnostic: &Diagnostic) {
        let line = format!("{diagnostic}\n");
        let written = sink.write_all(line.as_bytes()).and_then(|_| sink.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to write diagnostic");
            let placeholder = match &diagnostic.locator {
                Some(locator) => format!("{locator} - (unprintable message)\n"),
                None => "(unprintable message)\n".to_string(),
            };
            let _ = sink
                .write_all(placeholder.as_bytes())
                .and_then(|_| sink.flush());
        }
    }
}

impl Reporter for StreamReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        } else {
            self.warnings += 1;
        }
        for sink in &mut self.sinks {
            Self::write_line(sink.as_mut(), &diagnostic);
        }
    }
}
