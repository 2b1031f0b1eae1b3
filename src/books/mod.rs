//! Book and verse reference table.
//!
//! Static chapter and verse counts for every canonical book, keyed by the
//! three-letter USFM book code, plus the lexicon of English book-name words
//! used to spot untranslated header text.

mod table;

use std::path::Path;

use once_cell::sync::Lazy;

/// Codes of books that carry no chapters (front matter, back matter, glossaries).
pub const NON_CHAPTER_BOOK_CODES: &[&str] = &["FRT", "BAK", "OTH", "INT", "CNC", "GLO", "TDX", "NDX"];

/// Reference data for one canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    /// Three-letter USFM code, e.g. `GEN`.
    pub code: &'static str,
    /// English book name.
    pub en_name: &'static str,
    /// Two-digit USFM book number as used in file names (`01`, `41`, ...).
    pub usfm_number: &'static str,
    /// Position in canon order, starting at 1.
    pub sort: u16,
    /// Verse count for each chapter; the chapter count is its length.
    pub verses: &'static [u16],
}

impl BookInfo {
    /// Number of chapters in the book.
    pub fn chapter_count(&self) -> u32 {
        self.verses.len() as u32
    }

    /// Number of verses in a 1-based chapter, or `None` past the last chapter.
    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.verses.get(chapter as usize - 1).map(|&n| u32::from(n))
    }

    /// Total verse count across all chapters.
    pub fn total_verses(&self) -> u32 {
        self.verses.iter().map(|&n| u32::from(n)).sum()
    }
}

/// All canonical books in canon order.
pub fn all() -> &'static [BookInfo] {
    table::BOOKS
}

/// Look up a book by its three-letter code (case-sensitive, upper case).
pub fn lookup(code: &str) -> Option<&'static BookInfo> {
    table::BOOKS.iter().find(|book| book.code == code)
}

/// Whether `code` names a book without chapters.
pub fn is_non_chapter(code: &str) -> bool {
    NON_CHAPTER_BOOK_CODES.contains(&code)
}

/// Whether `code` is a canonical or non-chapter book code.
pub fn is_known_code(code: &str) -> bool {
    lookup(code).is_some() || is_non_chapter(code)
}

/// Number of chapters in a book; 0 for unknown codes.
pub fn chapter_count(code: &str) -> u32 {
    lookup(code).map(BookInfo::chapter_count).unwrap_or(0)
}

/// Verse count for a chapter of a book, if both exist.
pub fn verse_count(code: &str, chapter: u32) -> Option<u32> {
    lookup(code).and_then(|book| book.verse_count(chapter))
}

static ENGLISH_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut words: Vec<String> = table::BOOKS
        .iter()
        .flat_map(|book| book.en_name.split(' '))
        .filter(|word| !word.is_empty() && !word.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_lowercase)
        .collect();
    words.sort();
    words.dedup();
    words
});

/// Sorted, lowercased words of every English book name, numerals excluded.
pub fn english_words() -> &'static [String] {
    &ENGLISH_WORDS
}

/// Whether a lowercased word appears in an English book name.
pub fn is_english_word(word: &str) -> bool {
    ENGLISH_WORDS
        .binary_search_by(|candidate| candidate.as_str().cmp(word))
        .is_ok()
}

/// Detect the book code in a file name such as `01-GEN.usfm` or `en_ulb_41-MAT.sfm`.
pub fn code_from_path(path: &Path) -> Option<&'static str> {
    let stem = path.file_stem()?.to_str()?;
    stem.split(|c: char| matches!(c, '-' | '_' | '.' | ' '))
        .find_map(|part| {
            let upper = part.to_ascii_uppercase();
            table::BOOKS
                .iter()
                .map(|book| book.code)
                .chain(NON_CHAPTER_BOOK_CODES.iter().copied())
                .find(|code| *code == upper)
        })
}
