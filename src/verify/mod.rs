//! Chapter and verse structure verification.
//!
//! A [`Verifier`] consumes one book's tokens in order and reports every
//! structural problem it finds to a [`Reporter`]. It never fails on bad
//! content; only I/O and tokenizer failures are errors.
//!
//! # Example
//!
//! ```
//! use usfm_verify::report::BatchReporter;
//! use usfm_verify::verify::{Verifier, VerifyOptions};
//!
//! let mut verifier = Verifier::new(VerifyOptions::default());
//! let mut batch = BatchReporter::new();
//! verifier
//!     .verify_str("\\id 2JN\n\\c 1\n\\p\n\\v 1 \\v 2 text", "64-2JN.usfm", Some("2JN"), &mut batch)
//!     .unwrap();
//! assert!(batch.lines().contains(&"2JN 1:1 - Empty verse".to_string()));
//! ```

mod markers;
mod state;
mod translation;
mod variants;

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::books;
use crate::error::{Result, UsfmError};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::report::{codes, BatchReporter, Diagnostic, Reference, Reporter};

pub use markers::check_markers;
pub use state::{NoteSpan, SharedIds, VerificationState};
pub use translation::untranslated_word;
pub use variants::{is_optional_verse, is_verse_count_exception};

/// USFM major version the documents are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UsfmVersion {
    #[default]
    V2,
    V3,
}

impl UsfmVersion {
    /// Parse `2`, `2.0`, `3`, `3.1`, ...; any major version of 3 or more is V3.
    pub fn parse(text: &str) -> Option<Self> {
        let major: u32 = text.trim().split('.').next()?.parse().ok()?;
        Some(if major >= 3 {
            UsfmVersion::V3
        } else {
            UsfmVersion::V2
        })
    }
}

impl FromStr for UsfmVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported USFM version '{s}'"))
    }
}

impl<'de> Deserialize<'de> for UsfmVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(text) => text,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Options controlling which checks run.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Document language; enables the untranslated-header heuristic when not English.
    pub language_code: Option<String>,
    /// USFM 3 documents are not flagged for empty verses or unknown markers.
    pub usfm_version: UsfmVersion,
    pub suppress_empty_verses: bool,
    /// Warn when `\mt` is plain ASCII (likely untranslated in non-Latin scripts).
    pub warn_ascii_titles: bool,
    /// Skip the raw `\c`/`\v` spacing checks.
    pub skip_marker_checks: bool,
}

enum VerseProblem {
    Invalid,
    Range,
}

/// Widest `\v a-b` range accepted; no chapter comes close.
const MAX_VERSE_RANGE: u32 = 200;

fn parse_verses(value: &str) -> std::result::Result<RangeInclusive<u32>, VerseProblem> {
    match value.split_once('-') {
        Some((first, last)) => {
            let (Ok(first), Ok(last)) = (first.parse::<u32>(), last.parse::<u32>()) else {
                return Err(VerseProblem::Range);
            };
            if first > last || last - first >= MAX_VERSE_RANGE {
                return Err(VerseProblem::Range);
            }
            Ok(first..=last)
        }
        None => value
            .parse::<u32>()
            .map(|verse| verse..=verse)
            .map_err(|_| VerseProblem::Invalid),
    }
}

fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

fn non_empty(token: &Token) -> Option<String> {
    Some(token.value().to_string()).filter(|value| !value.is_empty())
}

/// Walks one book at a time, reporting structural problems.
#[derive(Debug, Clone)]
pub struct Verifier {
    options: VerifyOptions,
    state: VerificationState,
}

impl Verifier {
    pub fn new(options: VerifyOptions) -> Self {
        Self::with_shared_ids(options, SharedIds::new())
    }

    /// A verifier that detects duplicate book ids across everyone sharing `ids`.
    pub fn with_shared_ids(options: VerifyOptions, ids: SharedIds) -> Self {
        Self {
            options,
            state: VerificationState::new(ids),
        }
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Forget everything, including ids and references seen in earlier books.
    pub fn reset(&mut self) {
        self.state.reset_all();
    }

    /// Read and verify one USFM file. The book code is taken from the file name.
    pub fn verify_file(&mut self, path: &Path, out: &mut dyn Reporter) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| UsfmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read USFM file: {}", e),
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let code = books::code_from_path(path);
        if code.is_none() {
            warn!(file = %path.display(), "no book code in file name");
        }
        self.verify_str(&source, &file_name, code, out)
    }

    /// Verify one book held in memory.
    pub fn verify_str(
        &mut self,
        source: &str,
        file_name: &str,
        book_code: Option<&str>,
        out: &mut dyn Reporter,
    ) -> Result<()> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        self.state.begin_file(file_name, book_code);

        if !self.options.skip_marker_checks {
            for diagnostic in check_markers(source, book_code.unwrap_or(file_name)) {
                self.emit(out, diagnostic);
            }
        }

        let stream = tokenize(source).map_err(|source| UsfmError::Tokenize {
            file: file_name.to_string(),
            source,
        })?;
        debug!(file = file_name, tokens = stream.len(), "verifying book");
        self.take_all(stream.tokens(), out);
        Ok(())
    }

    /// Verify an already tokenized book. The raw marker checks do not run.
    pub fn verify_tokens(
        &mut self,
        tokens: &[Token],
        file_name: &str,
        book_code: Option<&str>,
        out: &mut dyn Reporter,
    ) {
        self.state.begin_file(file_name, book_code);
        self.take_all(tokens, out);
    }

    fn take_all(&mut self, tokens: &[Token], out: &mut dyn Reporter) {
        for token in tokens {
            self.take(token, out);
        }
        self.finish(out);
    }

    fn usfm3(&self) -> bool {
        self.options.usfm_version == UsfmVersion::V3
            || self.state.usfm_version.as_deref().and_then(UsfmVersion::parse)
                == Some(UsfmVersion::V3)
    }

    fn emit(&mut self, out: &mut dyn Reporter, diagnostic: Diagnostic) {
        if let Some(reference) = diagnostic.reference() {
            self.state.reported_refs.insert(reference.clone());
        }
        out.report(diagnostic);
    }

    fn error_here(&mut self, out: &mut dyn Reporter, code: &'static str, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(code, message).at(self.state.reference.clone());
        self.emit(out, diagnostic);
    }

    fn warning_here(&mut self, out: &mut dyn Reporter, code: &'static str, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(code, message).at(self.state.reference.clone());
        self.emit(out, diagnostic);
    }

    /// Process one token.
    pub fn take(&mut self, token: &Token, out: &mut dyn Reporter) {
        use TokenKind::*;

        let kind = token.kind;
        self.state.has_content = true;

        let after_milestone = std::mem::take(&mut self.state.in_attributes);
        if after_milestone && kind == Text && token.value().starts_with('|') {
            return;
        }

        if kind.is_footnote() {
            self.state.add_text();
        }
        if self.state.needs_verse_text && kind != Text && !kind.is_text_carrying() && !kind.is_milestone() {
            self.empty_verse(out);
        }

        match kind {
            Id => self.take_id(token, out),
            Ide => self.state.ide = non_empty(token),
            Usfm => self.state.usfm_version = non_empty(token),
            H => {
                self.state.heading = non_empty(token);
                self.check_translation(out, "h", token.value());
            }
            Toc(Some(1)) => {
                self.state.toc1 = non_empty(token);
                self.check_translation(out, "toc1", token.value());
            }
            Toc(Some(2)) => {
                self.state.toc2 = non_empty(token);
                self.check_translation(out, "toc2", token.value());
            }
            Toc(Some(3)) => self.state.toc3 = non_empty(token),
            Mt(None) | Mt(Some(1)) => self.take_main_title(token, out),
            Cl => {
                self.state.add_chapter_label(token.value());
                self.check_translation(out, "cl", token.value());
            }
            C => self.take_chapter(token, out),
            V => self.take_verse(token, out),
            P | Pc | Pi(_) | Nb => {
                self.state.add_paragraph();
                self.state.last_structural = Some(kind);
            }
            Q(_) => {
                self.state.add_quote();
                self.state.last_structural = Some(kind);
            }
            M | Mi => self.state.add_margin(),
            S(_) => {
                if let Some(previous) = self.state.last_structural.take() {
                    self.warning_here(
                        out,
                        codes::MARKER_USELESS,
                        format!("Useless {previous} before {kind} marker"),
                    );
                }
            }
            Text => self.take_text(out),
            FootnoteStart => self.open_note(NoteSpan::Footnote, out),
            EndnoteStart => self.open_note(NoteSpan::Endnote, out),
            CrossRefStart => self.open_note(NoteSpan::CrossReference, out),
            FootnoteEnd => self.close_note(NoteSpan::Footnote, out),
            EndnoteEnd => self.close_note(NoteSpan::Endnote, out),
            CrossRefEnd => self.close_note(NoteSpan::CrossReference, out),
            MilestoneStart => {
                self.state.open_milestones.push(token.value().to_string());
                self.state.in_attributes = true;
            }
            MilestoneEnd => {
                self.close_milestone(token.value(), out);
                self.state.in_attributes = true;
            }
            Milestone => self.state.in_attributes = true,
            Escape => self.error_here(out, codes::MARKER_ESCAPE, "Nearby uncommon or invalid marker"),
            Unknown => self.take_unknown(token, out),
            _ => {}
        }

        if matches!(kind, Id | H | Toc(_) | Mt(_) | Cl | C | V | Text) {
            self.state.last_structural = None;
        }
        if !kind.is_milestone() {
            self.state.last_kind = Some(kind);
            self.state.last_token = Some(token.describe());
        }
    }

    fn empty_verse(&mut self, out: &mut dyn Reporter) {
        self.state.needs_verse_text = false;
        let book = self.state.book_name();
        if self.options.suppress_empty_verses
            || self.usfm3()
            || is_optional_verse(&book, self.state.chapter, self.state.verse)
        {
            return;
        }
        self.error_here(out, codes::VERSE_EMPTY, "Empty verse");
    }

    fn take_id(&mut self, token: &Token, out: &mut dyn Reporter) {
        let value = token.value();
        let code = value.split(' ').next().unwrap_or_default();

        if code.chars().count() < 3 {
            self.error_here(out, codes::ID_INVALID, format!("Invalid ID: '{value}'"));
            return;
        }
        if !books::is_known_code(code) {
            self.error_here(
                out,
                codes::ID_UNKNOWN_CODE,
                format!("Invalid Code '{code}' in ID: '{value}'"),
            );
            return;
        }
        if !self.state.seen_ids.register(code) {
            self.error_here(out, codes::ID_DUPLICATE, format!("Duplicate ID: '{value}'"));
        }
        self.state.add_id(code);
    }

    fn check_translation(&mut self, out: &mut dyn Reporter, marker: &str, text: &str) {
        if let Some(word) = untranslated_word(text, self.options.language_code.as_deref()) {
            self.warning_here(
                out,
                codes::HEADER_UNTRANSLATED,
                format!("Token '\\{marker}' has possible untranslated word '{word}'"),
            );
        }
    }

    fn take_main_title(&mut self, token: &Token, out: &mut dyn Reporter) {
        let marker = token.kind.marker_name().unwrap_or_default();
        let value = token.value();
        self.state.main_title = non_empty(token);
        self.check_translation(out, &marker, value);
        if self.options.warn_ascii_titles && !value.is_empty() && value.is_ascii() {
            self.warning_here(
                out,
                codes::HEADER_ASCII_TITLE,
                format!("\\{marker} token has ASCII value '{value}'"),
            );
        }
    }

    fn take_chapter(&mut self, token: &Token, out: &mut dyn Reporter) {
        self.check_verse_count(out);
        self.close_open_note(out);

        let value = token.value();
        let Ok(chapter) = value.parse::<u32>() else {
            self.error_here(
                out,
                codes::CHAPTER_INVALID,
                format!("Invalid chapter number: '{value}'"),
            );
            return;
        };
        self.state.add_chapter(chapter);

        if self.state.current_id.is_none() {
            self.error_here(out, codes::CHAPTER_MISSING_ID, "Missing ID before chapter");
        }

        let last = self.state.last_chapter;
        if chapter < last {
            self.error_here(out, codes::CHAPTER_OUT_OF_ORDER, "Chapter out of order");
        } else if chapter == last {
            self.error_here(out, codes::CHAPTER_DUPLICATE, "Duplicate chapter");
        } else if chapter > last + 1 {
            let message = if chapter > last + 2 {
                "Missing chapters between this and"
            } else {
                "Missing chapter between this and"
            };
            let diagnostic = Diagnostic::error(
                codes::CHAPTER_MISSING,
                format!("{message}: {}", self.state.reference),
            )
            .at(self.state.last_reference.clone());
            self.emit(out, diagnostic);
        }

        if let Some(book) = self.state.current_id.as_deref().and_then(books::lookup) {
            let count = book.chapter_count();
            if chapter > count {
                self.error_here(
                    out,
                    codes::CHAPTER_OUT_OF_RANGE,
                    format!("Chapter number exceeds the {count} chapters of {}", book.code),
                );
            }
        }
    }

    fn take_verse(&mut self, token: &Token, out: &mut dyn Reporter) {
        self.close_open_note(out);

        let value = token.value();
        match parse_verses(value) {
            Ok(verses) => {
                for verse in verses {
                    self.add_verse(verse, out);
                }
            }
            Err(VerseProblem::Invalid) => self.error_here(
                out,
                codes::VERSE_INVALID,
                format!("Invalid verse number: '{value}'"),
            ),
            Err(VerseProblem::Range) => self.error_here(
                out,
                codes::VERSE_RANGE,
                format!("Problem in verse range: '{value}'"),
            ),
        }
    }

    fn add_verse(&mut self, verse: u32, out: &mut dyn Reporter) {
        self.state.add_verse(verse);

        if self.state.last_verse == 0 {
            if self.state.current_id.is_none() && self.state.chapter == 0 {
                self.error_here(out, codes::VERSE_MISSING_ID, "Missing ID before verse");
            }
            if self.state.chapter == 0 {
                self.error_here(out, codes::VERSE_MISSING_CHAPTER, "Missing chapter tag");
            }
            if self.state.paragraph_count == 0
                && self.state.quote_count == 0
                && self.state.margin_count == 0
            {
                self.error_here(
                    out,
                    codes::VERSE_MISSING_PARAGRAPH,
                    "Missing paragraph marker (\\p), margin (\\m) or quote (\\q) before verse text",
                );
            }
        }

        let last = self.state.last_verse;
        let reference = self.state.reference.clone();
        let last_reference = self.state.last_reference.clone();
        if verse < last {
            if self.state.add_error(&last_reference) {
                self.error_here(
                    out,
                    codes::VERSE_OUT_OF_ORDER,
                    format!("Verse out of order: after {last_reference}"),
                );
                self.state.add_error(&reference);
            }
        } else if verse == last {
            self.error_here(out, codes::VERSE_DUPLICATE, "Duplicated verse");
        } else {
            match verse - last {
                1 => {}
                2 => {
                    let book = self.state.book_name();
                    if !is_optional_verse(&book, self.state.chapter, verse - 1) {
                        self.missing_verses(out, "Missing verse between this and", last, verse);
                    }
                }
                _ => self.missing_verses(out, "Missing verses between this and", last, verse),
            }
        }
    }

    fn missing_verses(&mut self, out: &mut dyn Reporter, message: &str, last: u32, verse: u32) {
        let last_reference = self.state.last_reference.clone();
        if !self.state.add_error(&last_reference) {
            return;
        }
        let already_flagged = (last + 1..verse)
            .map(|v| self.state.verse_reference(v))
            .all(|gap| self.state.reported_refs.contains(&gap));
        if already_flagged {
            return;
        }
        let diagnostic = Diagnostic::error(
            codes::VERSE_MISSING,
            format!("{message}: {}", self.state.reference),
        )
        .at(last_reference);
        self.emit(out, diagnostic);
    }

    fn take_text(&mut self, out: &mut dyn Reporter) {
        let carried = self.state.last_kind.is_some_and(|kind| kind.is_text_carrying());
        if !self.state.text_ok_here && !carried {
            let help = match &self.state.last_token {
                Some(previous) => format!("Preceding token was '{previous}'"),
                None => "No preceding token".to_string(),
            };
            let diagnostic = Diagnostic::error(
                codes::TEXT_ORPHAN,
                "Missing verse marker or extra text nearby",
            )
            .at(self.state.reference.clone())
            .with_help(help);
            self.emit(out, diagnostic);
        }
        self.state.add_text();
    }

    fn take_unknown(&mut self, token: &Token, out: &mut dyn Reporter) {
        let name = token.value();
        let malformed_number = name
            .strip_prefix(['c', 'v'])
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()));
        if malformed_number {
            return;
        }
        if name == "p" {
            self.error_here(out, codes::MARKER_ORPHAN_PARAGRAPH, "Orphan paragraph marker follows");
        } else if !self.usfm3() {
            self.error_here(
                out,
                codes::MARKER_UNKNOWN,
                format!("Unknown USFM token: '\\{name}'"),
            );
        }
    }

    fn open_note(&mut self, span: NoteSpan, out: &mut dyn Reporter) {
        if let Some(open) = self.state.open_note {
            self.error_here(
                out,
                codes::NOTE_UNCLOSED,
                format!("{} inside unclosed {}", span.title(), open.label()),
            );
        }
        self.state.open_note = Some(span);
    }

    fn close_note(&mut self, span: NoteSpan, out: &mut dyn Reporter) {
        if self.state.open_note == Some(span) {
            self.state.open_note = None;
        } else {
            self.error_here(
                out,
                codes::NOTE_UNMATCHED_END,
                format!("{} end without start", span.title()),
            );
        }
    }

    fn close_open_note(&mut self, out: &mut dyn Reporter) {
        if let Some(open) = self.state.open_note.take() {
            self.error_here(out, codes::NOTE_UNCLOSED, format!("Unclosed {}", open.label()));
        }
    }

    fn close_milestone(&mut self, name: &str, out: &mut dyn Reporter) {
        match self.state.open_milestones.iter().rposition(|open| open == name) {
            Some(index) => {
                self.state.open_milestones.remove(index);
            }
            None => self.error_here(
                out,
                codes::MILESTONE_UNMATCHED_END,
                format!("Unmatched milestone end: '\\{name}-e'"),
            ),
        }
    }

    fn check_verse_count(&mut self, out: &mut dyn Reporter) {
        let Some(id) = self.state.current_id.clone() else {
            return;
        };
        let (chapter, verse) = (self.state.chapter, self.state.verse);
        if chapter == 0 {
            return;
        }
        let Some(expected) = books::verse_count(&id, chapter) else {
            return;
        };
        if verse != expected && !is_verse_count_exception(&id, chapter, verse) {
            self.error_here(out, codes::VERSE_COUNT, format!("Should have {expected} verses"));
        }
    }

    fn check_chapter_count(&mut self, out: &mut dyn Reporter) {
        let Some(id) = self.state.current_id.clone() else {
            return;
        };
        let Some(book) = books::lookup(&id) else {
            return;
        };
        for chapter in 1..=book.chapter_count() {
            if !self.state.chapters_seen.contains(&chapter) {
                let diagnostic = Diagnostic::error(codes::CHAPTER_MISSING, "Missing chapter")
                    .at(Reference::chapter(id.as_str(), chapter));
                self.emit(out, diagnostic);
            }
        }
    }

    fn check_identification(&mut self, out: &mut dyn Reporter) {
        let book = self
            .state
            .book_code
            .clone()
            .or_else(|| self.state.current_id.clone())
            .unwrap_or_else(|| self.state.file_name.clone());
        let here = Reference::book(book.as_str());
        let mut found = Vec::new();

        match (&self.state.current_id, &self.state.book_code) {
            (None, _) => found.push(Diagnostic::error(codes::ID_MISSING, "Missing \\id tag")),
            (Some(id), Some(code)) if id != code => found.push(
                Diagnostic::error(
                    codes::ID_MISMATCH,
                    format!("Found '{id}' in \\id tag, which does not match code '{code}' found in filename"),
                )
                .at(Reference::book(id.as_str())),
            ),
            _ => {}
        }
        if self.state.ide.is_none() {
            found.push(Diagnostic::error(codes::HEADER_MISSING, "Missing \\ide tag"));
        }
        match &self.state.heading {
            Some(heading) if is_all_caps(heading) => found.push(Diagnostic::warning(
                codes::HEADER_UPPERCASE,
                format!("\\h '{heading}' shouldn't be UPPERCASE"),
            )),
            Some(_) => {}
            None => found.push(Diagnostic::error(codes::HEADER_MISSING, "Missing \\h tag")),
        }
        for (field, name) in [
            (&self.state.toc1, "toc1"),
            (&self.state.toc2, "toc2"),
            (&self.state.toc3, "toc3"),
        ] {
            if field.is_none() {
                found.push(Diagnostic::error(
                    codes::HEADER_MISSING,
                    format!("Missing \\{name} tag"),
                ));
            }
        }
        if self.state.main_title.is_none() && !books::is_non_chapter(&book) {
            found.push(Diagnostic::error(codes::HEADER_MISSING, "Missing \\mt or \\mt1 tag"));
        }

        for diagnostic in found {
            let diagnostic = match diagnostic.locator {
                Some(_) => diagnostic,
                None => diagnostic.at(here.clone()),
            };
            self.emit(out, diagnostic);
        }
    }

    /// End-of-book checks. Called automatically by the `verify_*` methods.
    pub fn finish(&mut self, out: &mut dyn Reporter) {
        if self.state.needs_verse_text {
            self.empty_verse(out);
        }
        self.close_open_note(out);
        for name in std::mem::take(&mut self.state.open_milestones) {
            self.error_here(
                out,
                codes::MILESTONE_UNCLOSED,
                format!("Unclosed milestone: '\\{name}-s'"),
            );
        }

        let non_chapter = self
            .state
            .book_code
            .as_deref()
            .or(self.state.current_id.as_deref())
            .is_some_and(books::is_non_chapter);
        if self.state.current_id.is_none() || (self.state.chapter == 0 && !non_chapter) {
            let mut diagnostic = Diagnostic::error(codes::FILE_EMPTY, "File may be empty")
                .in_file(self.state.file_name.as_str());
            if !self.state.has_content {
                diagnostic = diagnostic.with_help("The file contains no USFM markers or text");
            }
            self.emit(out, diagnostic);
        }

        self.check_identification(out);
        self.check_verse_count(out);
        self.check_chapter_count(out);
    }
}

/// Verify one book held in memory with a fresh verifier, collecting diagnostics.
pub fn verify_contents(
    source: &str,
    file_name: &str,
    book_code: Option<&str>,
    options: VerifyOptions,
) -> Result<Vec<Diagnostic>> {
    let mut batch = BatchReporter::new();
    Verifier::new(options).verify_str(source, file_name, book_code, &mut batch)?;
    Ok(batch.into_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER_2JN: &str =
        "\\id 2JN\n\\ide UTF-8\n\\h 2 John\n\\toc1 Second John\n\\toc2 2 John\n\\toc3 2jn\n\\mt 2 John\n";

    fn verses(range: std::ops::RangeInclusive<u32>) -> String {
        range.map(|v| format!("\\v {v} text\n")).collect()
    }

    fn run_with(source: &str, book: Option<&str>, options: VerifyOptions) -> Vec<Diagnostic> {
        verify_contents(source, "test.usfm", book, options).unwrap()
    }

    fn lines(source: &str) -> Vec<String> {
        run_with(source, Some("2JN"), VerifyOptions::default())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn with_code(diagnostics: &[Diagnostic], code: &str) -> Vec<String> {
        diagnostics
            .iter()
            .filter(|d| d.code == code)
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_clean_book() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}", verses(1..=13));
        assert_eq!(lines(&source), Vec::<String>::new());
    }

    #[test]
    fn test_missing_verses() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 a\n\\v 2 b\n\\v 5 c\n{}", verses(6..=13));
        assert_eq!(
            lines(&source),
            vec!["2JN 1:2 - Missing verses between this and: 2JN 1:5"]
        );
    }

    #[test]
    fn test_missing_single_verse() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 a\n\\v 3 c\n{}", verses(4..=13));
        assert_eq!(
            lines(&source),
            vec!["2JN 1:1 - Missing verse between this and: 2JN 1:3"]
        );
    }

    #[test]
    fn test_optional_verse_gap_not_reported() {
        let source = format!("\\id MRK\n\\c 9\n\\p\n{}\\v 45 b\n", verses(1..=43));
        let found = run_with(&source, Some("MRK"), VerifyOptions::default());
        assert!(with_code(&found, codes::VERSE_MISSING).is_empty());
    }

    #[test]
    fn test_duplicate_verse() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\v 13 again\n", verses(1..=13));
        assert_eq!(lines(&source), vec!["2JN 1:13 - Duplicated verse"]);
    }

    #[test]
    fn test_verse_range_expands() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\v 3-4 both\n{}", verses(1..=2), verses(5..=13));
        assert_eq!(lines(&source), Vec::<String>::new());
    }

    #[test]
    fn test_bad_range() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\v 4-3 x\n", verses(1..=13));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::VERSE_RANGE),
            vec!["2JN 1:13 - Problem in verse range: '4-3'"]
        );
    }

    #[test]
    fn test_bare_toc_is_not_unknown() {
        let source = format!("{HEADER_2JN}\\toc Second John\n\\c 1\n\\p\n{}", verses(1..=13));
        assert_eq!(lines(&source), Vec::<String>::new());
    }

    #[test]
    fn test_oversized_range_rejected() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\v 14-4294967295 x\n\\v 20-300 y\n", verses(1..=13));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::VERSE_RANGE),
            vec![
                "2JN 1:13 - Problem in verse range: '14-4294967295'",
                "2JN 1:13 - Problem in verse range: '20-300'",
            ]
        );
    }

    #[test]
    fn test_verse_numbers_near_u32_max() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 4294967294 a\n\\v 4294967295 b\n");
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::VERSE_MISSING),
            vec!["2JN 1 - Missing verses between this and: 2JN 1:4294967294"]
        );
        assert_eq!(with_code(&found, codes::VERSE_DUPLICATE), Vec::<String>::new());
    }

    #[test]
    fn test_empty_verse() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 \\v 2 text\n{}", verses(3..=13));
        assert_eq!(lines(&source), vec!["2JN 1:1 - Empty verse"]);
    }

    #[test]
    fn test_empty_verse_suppressed() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 \\v 2 text\n{}", verses(3..=13));
        for options in [
            VerifyOptions { suppress_empty_verses: true, ..Default::default() },
            VerifyOptions { usfm_version: UsfmVersion::V3, ..Default::default() },
        ] {
            let found = run_with(&source, Some("2JN"), options);
            assert!(with_code(&found, codes::VERSE_EMPTY).is_empty());
        }
    }

    #[test]
    fn test_footnote_satisfies_verse_text() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 \\f + \\ft note\\f*\n{}", verses(2..=13));
        assert_eq!(lines(&source), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_empty_verse() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\v 13\n", verses(1..=12));
        assert_eq!(lines(&source), vec!["2JN 1:13 - Empty verse"]);
    }

    #[test]
    fn test_chapter_out_of_order_once() {
        let source = "\\id RUT\n\\c 1\n\\c 2\n\\c 1\n";
        let found = run_with(source, Some("RUT"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::CHAPTER_OUT_OF_ORDER),
            vec!["RUT 1 - Chapter out of order"]
        );
    }

    #[test]
    fn test_missing_chapters() {
        let source = "\\id RUT\n\\c 1\n\\p\n\\v 1 a\n\\c 4\n";
        let found = run_with(source, Some("RUT"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::CHAPTER_MISSING),
            vec![
                "RUT 1:1 - Missing chapters between this and: RUT 4",
                "RUT 2 - Missing chapter",
                "RUT 3 - Missing chapter",
            ]
        );
    }

    #[test]
    fn test_chapter_beyond_book() {
        let source = "\\id 2JN\n\\c 1\n\\c 2\n";
        let found = run_with(source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::CHAPTER_OUT_OF_RANGE),
            vec!["2JN 2 - Chapter number exceeds the 1 chapters of 2JN"]
        );
    }

    #[test]
    fn test_verse_count() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}", verses(1..=12));
        assert_eq!(lines(&source), vec!["2JN 1:12 - Should have 13 verses"]);
    }

    #[test]
    fn test_verse_count_exception() {
        let source = format!("\\id 3JN\n\\c 1\n\\p\n{}", verses(1..=15));
        let found = run_with(&source, Some("3JN"), VerifyOptions::default());
        assert!(with_code(&found, codes::VERSE_COUNT).is_empty());
    }

    #[test]
    fn test_orphan_text_help() {
        let source = format!("{HEADER_2JN}\\c 1\nstray\n\\p\n{}", verses(1..=13));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "2JN 1 - Missing verse marker or extra text nearby");
        assert_eq!(found[0].help.as_deref(), Some("Preceding token was '\\c'"));
    }

    #[test]
    fn test_unknown_markers() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\zz odd\n", verses(1..=13));
        assert_eq!(lines(&source), vec!["2JN 1:13 - Unknown USFM token: '\\zz'"]);

        let options = VerifyOptions { usfm_version: UsfmVersion::V3, ..Default::default() };
        let found = run_with(&source, Some("2JN"), options);
        assert!(found.is_empty());
    }

    #[test]
    fn test_declared_usfm3_tolerates_unknown_markers() {
        let source = format!("\\id 2JN\n\\usfm 3.0\n{}\\c 1\n\\p\n{}\\zz odd\n", &HEADER_2JN[8..], verses(1..=13));
        assert!(lines(&source).is_empty());
    }

    #[test]
    fn test_orphan_paragraph() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}\\p\\v 13 b\n", verses(1..=12));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::MARKER_ORPHAN_PARAGRAPH),
            vec!["2JN 1:12 - Orphan paragraph marker follows"]
        );
    }

    #[test]
    fn test_identification_checks() {
        let found = run_with("\\id 2JN\n\\h 2 JOHN\n\\c 1\n\\p\n\\v 1 a\n", Some("3JN"), VerifyOptions::default());
        let all: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert!(all.contains(&"2JN - Found '2JN' in \\id tag, which does not match code '3JN' found in filename".to_string()));
        assert!(all.contains(&"3JN - Missing \\ide tag".to_string()));
        assert!(all.contains(&"3JN - \\h '2 JOHN' shouldn't be UPPERCASE".to_string()));
        assert!(all.contains(&"3JN - Missing \\toc1 tag".to_string()));
        assert!(all.contains(&"3JN - Missing \\mt or \\mt1 tag".to_string()));
    }

    #[test]
    fn test_empty_file() {
        let found = run_with("", Some("2JN"), VerifyOptions::default());
        assert_eq!(found[0].to_string(), "test.usfm - File may be empty");
        assert_eq!(with_code(&found, codes::ID_MISSING), vec!["2JN - Missing \\id tag"]);
    }

    #[test]
    fn test_front_matter_needs_no_chapters() {
        let source = "\\id FRT\n\\ide UTF-8\n\\h Front\n\\toc1 Front\n\\toc2 Front\n\\toc3 frt\n\\p Preface\n";
        let found = run_with(source, Some("FRT"), VerifyOptions::default());
        assert!(with_code(&found, codes::FILE_EMPTY).is_empty());
        assert!(with_code(&found, codes::HEADER_MISSING).is_empty());
    }

    #[test]
    fn test_invalid_and_unknown_ids() {
        let found = run_with("\\id GE\n", None, VerifyOptions::default());
        assert_eq!(with_code(&found, codes::ID_INVALID), vec!["Invalid ID: 'GE'"]);

        let found = run_with("\\id XYZ stuff\n", None, VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::ID_UNKNOWN_CODE),
            vec!["Invalid Code 'XYZ' in ID: 'XYZ stuff'"]
        );
    }

    #[test]
    fn test_duplicate_ids_shared_between_verifiers() {
        let ids = SharedIds::new();
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n{}", verses(1..=13));

        let mut first = BatchReporter::new();
        Verifier::with_shared_ids(VerifyOptions::default(), ids.clone())
            .verify_str(&source, "a.usfm", Some("2JN"), &mut first)
            .unwrap();
        let mut second = BatchReporter::new();
        Verifier::with_shared_ids(VerifyOptions::default(), ids)
            .verify_str(&source, "b.usfm", Some("2JN"), &mut second)
            .unwrap();

        assert!(first.is_empty());
        assert_eq!(second.lines(), vec!["2JN - Duplicate ID: '2JN'"]);

        let mut independent = BatchReporter::new();
        Verifier::new(VerifyOptions::default())
            .verify_str(&source, "c.usfm", Some("2JN"), &mut independent)
            .unwrap();
        assert!(independent.is_empty());
    }

    #[test]
    fn test_fresh_verifiers_agree() {
        let source = format!("{HEADER_2JN}\\c 1\n\\v 1 \\v 3 x\n\\zz\n");
        let a = run_with(&source, Some("2JN"), VerifyOptions::default());
        let b = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_useless_paragraph_before_section() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\s5\n\\p\n{}", verses(1..=13));
        assert_eq!(lines(&source), vec!["2JN 1 - Useless \\p before \\s5 marker"]);
    }

    #[test]
    fn test_unclosed_and_unmatched_notes() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 a \\f + \\ft note\n{}\\x*\n", verses(2..=13));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::NOTE_UNCLOSED),
            vec!["2JN 1:1 - Unclosed footnote"]
        );
        assert_eq!(
            with_code(&found, codes::NOTE_UNMATCHED_END),
            vec!["2JN 1:13 - Cross reference end without start"]
        );
    }

    #[test]
    fn test_note_inside_open_note() {
        let source = format!("{HEADER_2JN}\\c 1\n\\p\n\\v 1 a \\f + \\ft n \\x - \\xt b\\x* c\n{}", verses(2..=13));
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            with_code(&found, codes::NOTE_UNCLOSED),
            vec!["2JN 1:1 - Cross reference inside unclosed footnote"]
        );
    }

    #[test]
    fn test_milestones() {
        let source = format!(
            "{HEADER_2JN}\\c 1\n\\p\n\\v 1 \\zaln-s |x-strong=\"G1\"\\*\\w a\\w*\\zaln-e\\*\n\\qt-s |who=\"x\"\\*\n{}\\k-e\\*\n",
            verses(2..=13)
        );
        let found = run_with(&source, Some("2JN"), VerifyOptions::default());
        assert_eq!(
            found.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "2JN 1:13 - Unmatched milestone end: '\\k-e'",
                "2JN 1:13 - Unclosed milestone: '\\qt-s'",
            ]
        );
    }

    #[test]
    fn test_translation_heuristic() {
        let source = "\\id 2JN\n\\h 2 John\n\\toc1 Waraka wa Pili wa Yohana\n\\mt 2 Yohana\n";
        let options = VerifyOptions { language_code: Some("sw".into()), ..Default::default() };
        let found = run_with(source, Some("2JN"), options);
        assert_eq!(
            with_code(&found, codes::HEADER_UNTRANSLATED),
            vec!["2JN - Token '\\h' has possible untranslated word 'John'"]
        );
    }

    #[test]
    fn test_usfm_version_parsing() {
        assert_eq!(UsfmVersion::parse("2.0"), Some(UsfmVersion::V2));
        assert_eq!(UsfmVersion::parse("3"), Some(UsfmVersion::V3));
        assert_eq!(UsfmVersion::parse("3.1"), Some(UsfmVersion::V3));
        assert_eq!(UsfmVersion::parse("three"), None);
        let parsed: UsfmVersion = serde_yaml::from_str("3.0").unwrap();
        assert_eq!(parsed, UsfmVersion::V3);
        let parsed: UsfmVersion = serde_yaml::from_str("\"2.0\"").unwrap();
        assert_eq!(parsed, UsfmVersion::V2);
    }
}
