//! Diagnostic reporting.
//!
//! The verifier hands every diagnostic to a [`Reporter`]. A
//! [`BatchReporter`] keeps them in memory; a [`StreamReporter`] writes each
//! one as a line as soon as it arrives.

pub mod codes;
mod diagnostic;
mod stream;

pub use diagnostic::{Diagnostic, Locator, Reference, Severity};
pub use stream::{StreamReporter, ISSUES_FILENAME, OLDEST_ISSUES_FILENAME};

/// Receives diagnostics in the order they are produced.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Collects diagnostics without performing any I/O.
#[derive(Debug, Clone, Default)]
pub struct BatchReporter {
    diagnostics: Vec<Diagnostic>,
}

impl BatchReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Count errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Count warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }

    /// Count diagnostics of any severity.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Messages in line form, in report order.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Take the collected diagnostics, in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for BatchReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Totals for a verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents checked.
    pub files: usize,
    /// Documents with at least one diagnostic.
    pub files_with_issues: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's diagnostics.
    pub fn record<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
        self.files += 1;
        let mut any = false;
        for diagnostic in diagnostics {
            any = true;
            if diagnostic.is_error() {
                self.errors += 1;
            } else {
                self.warnings += 1;
            }
        }
        if any {
            self.files_with_issues += 1;
        }
    }

    /// Check if any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if nothing at all was reported.
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}
