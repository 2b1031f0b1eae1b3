//! Per-run verification state.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use crate::lexer::TokenKind;
use crate::report::Reference;

/// Book ids seen across a run, shareable between verifiers and threads.
#[derive(Debug, Clone, Default)]
pub struct SharedIds(Arc<Mutex<HashSet<String>>>);

impl SharedIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`; returns `false` if it had been recorded before.
    pub fn register(&self, id: &str) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// An open footnote, endnote, or cross reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSpan {
    Footnote,
    Endnote,
    CrossReference,
}

impl NoteSpan {
    pub fn label(self) -> &'static str {
        match self {
            NoteSpan::Footnote => "footnote",
            NoteSpan::Endnote => "endnote",
            NoteSpan::CrossReference => "cross reference",
        }
    }

    /// The label with its first letter capitalized.
    pub fn title(self) -> &'static str {
        match self {
            NoteSpan::Footnote => "Footnote",
            NoteSpan::Endnote => "Endnote",
            NoteSpan::CrossReference => "Cross reference",
        }
    }
}

/// Everything the verifier tracks while walking one book.
#[derive(Debug, Clone, Default)]
pub struct VerificationState {
    // Run-scoped
    pub seen_ids: SharedIds,
    /// References whose gap or out-of-order diagnostic has fired.
    pub already_reported: HashSet<Reference>,
    /// Every reference a diagnostic has pointed at.
    pub reported_refs: HashSet<Reference>,

    // Book-scoped
    pub file_name: String,
    pub book_code: Option<String>,
    pub current_id: Option<String>,
    pub ide: Option<String>,
    pub usfm_version: Option<String>,
    pub heading: Option<String>,
    pub toc1: Option<String>,
    pub toc2: Option<String>,
    pub toc3: Option<String>,
    pub main_title: Option<String>,
    pub master_chapter_label: Option<String>,
    pub chapter_label: Option<String>,
    pub chapter: u32,
    pub last_chapter: u32,
    pub verse: u32,
    pub last_verse: u32,
    pub chapters_seen: BTreeSet<u32>,
    pub paragraph_count: u32,
    pub margin_count: u32,
    pub quote_count: u32,
    pub needs_verse_text: bool,
    pub text_ok_here: bool,
    pub reference: Reference,
    pub last_reference: Reference,
    pub open_note: Option<NoteSpan>,
    pub open_milestones: Vec<String>,
    pub in_attributes: bool,
    pub last_kind: Option<TokenKind>,
    pub last_token: Option<String>,
    pub last_structural: Option<TokenKind>,
    pub has_content: bool,
}

impl VerificationState {
    pub fn new(seen_ids: SharedIds) -> Self {
        Self {
            seen_ids,
            ..Self::default()
        }
    }

    /// Clear the run-scoped sets and the current book.
    pub fn reset_all(&mut self) {
        self.seen_ids.clear();
        self.already_reported.clear();
        self.reported_refs.clear();
        self.reset_book();
    }

    /// Clear everything that describes the current book.
    pub fn reset_book(&mut self) {
        *self = Self {
            seen_ids: self.seen_ids.clone(),
            already_reported: std::mem::take(&mut self.already_reported),
            reported_refs: std::mem::take(&mut self.reported_refs),
            ..Self::default()
        };
    }

    /// Start a new file whose name suggests `book_code`.
    pub fn begin_file(&mut self, file_name: &str, book_code: Option<&str>) {
        self.reset_book();
        self.file_name = file_name.to_string();
        self.book_code = book_code.map(str::to_string);
        self.reference = Reference::book(self.book_name());
    }

    /// The id from `\id`, falling back to the file-name book code.
    pub fn book_name(&self) -> String {
        self.current_id
            .clone()
            .or_else(|| self.book_code.clone())
            .unwrap_or_default()
    }

    /// Adopt a new book id, clearing the previous book.
    pub fn add_id(&mut self, id: &str) {
        let file_name = std::mem::take(&mut self.file_name);
        let book_code = self.book_code.take();
        let previous = std::mem::take(&mut self.reference);
        self.reset_book();
        self.file_name = file_name;
        self.book_code = book_code;
        self.current_id = Some(id.to_string());
        self.last_reference = previous;
        self.reference = Reference::book(id);
    }

    pub fn add_chapter(&mut self, chapter: u32) {
        self.last_chapter = self.chapter;
        self.chapter = chapter;
        self.chapters_seen.insert(chapter);
        self.verse = 0;
        self.last_verse = 0;
        self.paragraph_count = 0;
        self.margin_count = 0;
        self.quote_count = 0;
        self.needs_verse_text = false;
        self.text_ok_here = false;
        self.last_reference = std::mem::take(&mut self.reference);
        self.reference = Reference::chapter(self.book_name(), chapter);
    }

    pub fn add_verse(&mut self, verse: u32) {
        self.last_verse = self.verse;
        self.verse = verse;
        self.needs_verse_text = true;
        self.text_ok_here = true;
        self.last_reference = std::mem::take(&mut self.reference);
        self.reference = Reference::verse(self.book_name(), self.chapter, verse);
    }

    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
        self.text_ok_here = true;
    }

    pub fn add_margin(&mut self) {
        self.margin_count += 1;
        self.text_ok_here = true;
    }

    pub fn add_quote(&mut self) {
        self.quote_count += 1;
        self.text_ok_here = true;
    }

    pub fn add_text(&mut self) {
        self.needs_verse_text = false;
        self.text_ok_here = true;
    }

    pub fn add_chapter_label(&mut self, label: &str) {
        if self.chapter == 0 {
            self.master_chapter_label = Some(label.to_string());
        } else {
            self.chapter_label = Some(label.to_string());
        }
    }

    /// Mark `reference` as reported; returns `false` if it already was.
    pub fn add_error(&mut self, reference: &Reference) -> bool {
        self.already_reported.insert(reference.clone())
    }

    /// Reference for verse `verse` of the current chapter.
    pub fn verse_reference(&self, verse: u32) -> Reference {
        Reference::verse(self.book_name(), self.chapter, verse)
    }
}
