//! Manuscript variants.
//!
//! Some verses are absent from the manuscripts many translations follow, so
//! a gap at one of these is not reported. Two chapters also legitimately end
//! one verse past the table count.

/// Verses that may be omitted without a "missing verse" report.
const OPTIONAL_VERSES: &[(&str, u32, u32)] = &[
    ("MAT", 17, 21),
    ("MAT", 18, 11),
    ("MAT", 23, 14),
    ("MRK", 7, 16),
    ("MRK", 9, 44),
    ("MRK", 9, 46),
    ("MRK", 11, 26),
    ("MRK", 15, 28),
    ("LUK", 17, 36),
    ("LUK", 23, 17),
    ("JHN", 5, 4),
    ("ACT", 8, 37),
    ("ACT", 15, 34),
    ("ACT", 24, 7),
    ("ACT", 28, 29),
    ("ROM", 16, 24),
];

/// Final verses accepted beyond the table's verse count.
const VERSE_COUNT_EXCEPTIONS: &[(&str, u32, u32)] = &[("REV", 12, 18), ("3JN", 1, 15)];

/// Whether `book chapter:verse` is absent from some manuscripts.
pub fn is_optional_verse(book: &str, chapter: u32, verse: u32) -> bool {
    OPTIONAL_VERSES.contains(&(book, chapter, verse))
}

/// Whether a chapter ending at `verse` is acceptable despite the table count.
pub fn is_verse_count_exception(book: &str, chapter: u32, verse: u32) -> bool {
    VERSE_COUNT_EXCEPTIONS.contains(&(book, chapter, verse))
}
