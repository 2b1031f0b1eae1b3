//! Diagnostic types for verification results.

use std::fmt;

use serde::Serialize;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A scripture reference: `GEN`, `GEN 1`, or `GEN 1:3`.
///
/// The verse is kept as text so that ranges such as `3-4` can be located.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Reference {
    pub book: String,
    pub chapter: Option<u32>,
    pub verse: Option<String>,
}

impl Reference {
    pub fn book(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: None,
            verse: None,
        }
    }

    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: None,
        }
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: impl ToString) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: Some(verse.to_string()),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.book)?;
        if let Some(chapter) = self.chapter {
            write!(f, " {chapter}")?;
            if let Some(verse) = &self.verse {
                write!(f, ":{verse}")?;
            }
        }
        Ok(())
    }
}

/// Where a diagnostic points: a scripture reference or a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locator {
    Reference(Reference),
    File(String),
}

impl From<Reference> for Locator {
    fn from(reference: Reference) -> Self {
        Locator::Reference(reference)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Reference(reference) => reference.fmt(f),
            Locator::File(path) => f.write_str(path),
        }
    }
}

/// A single verification diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "usfm::verse::empty").
    pub code: &'static str,
    /// What the diagnostic points at.
    pub locator: Option<Locator>,
    /// Human-readable message.
    pub message: String,
    /// Optional help text.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            locator: None,
            message: message.into(),
            help: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            locator: None,
            message: message.into(),
            help: None,
        }
    }

    /// Attach a locator.
    pub fn at(mut self, locator: impl Into<Locator>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Point at a file.
    pub fn in_file(self, path: impl Into<String>) -> Self {
        self.at(Locator::File(path.into()))
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The reference this diagnostic points at, if any.
    pub fn reference(&self) -> Option<&Reference> {
        match &self.locator {
            Some(Locator::Reference(reference)) => Some(reference),
            _ => None,
        }
    }
}

/// Line form: `<locator> - <message>`, or the bare message.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locator {
            Some(locator) => {
                let locator = locator.to_string();
                if locator.is_empty() {
                    f.write_str(&self.message)
                } else {
                    write!(f, "{locator} - {}", self.message)
                }
            }
            None => f.write_str(&self.message),
        }
    }
}
