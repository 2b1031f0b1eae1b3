//! Machine-readable diagnostic codes.

pub const CHAPTER_FORMAT: &str = "usfm::markers::chapter-format";
pub const VERSE_FORMAT: &str = "usfm::markers::verse-format";
pub const LEADING_ZERO: &str = "usfm::markers::leading-zero";

pub const ID_INVALID: &str = "usfm::id::invalid";
pub const ID_DUPLICATE: &str = "usfm::id::duplicate";
pub const ID_UNKNOWN_CODE: &str = "usfm::id::unknown-code";
pub const ID_MISMATCH: &str = "usfm::id::mismatch";
pub const ID_MISSING: &str = "usfm::id::missing";

pub const HEADER_MISSING: &str = "usfm::header::missing";
pub const HEADER_UPPERCASE: &str = "usfm::header::uppercase";
pub const HEADER_ASCII_TITLE: &str = "usfm::header::ascii-title";
pub const HEADER_UNTRANSLATED: &str = "usfm::header::untranslated";

pub const CHAPTER_INVALID: &str = "usfm::chapter::invalid";
pub const CHAPTER_MISSING_ID: &str = "usfm::chapter::missing-id";
pub const CHAPTER_OUT_OF_ORDER: &str = "usfm::chapter::out-of-order";
pub const CHAPTER_DUPLICATE: &str = "usfm::chapter::duplicate";
pub const CHAPTER_MISSING: &str = "usfm::chapter::missing";
pub const CHAPTER_OUT_OF_RANGE: &str = "usfm::chapter::out-of-range";

pub const VERSE_INVALID: &str = "usfm::verse::invalid";
pub const VERSE_RANGE: &str = "usfm::verse::range";
pub const VERSE_MISSING_ID: &str = "usfm::verse::missing-id";
pub const VERSE_MISSING_CHAPTER: &str = "usfm::verse::missing-chapter";
pub const VERSE_MISSING_PARAGRAPH: &str = "usfm::verse::missing-paragraph";
pub const VERSE_OUT_OF_ORDER: &str = "usfm::verse::out-of-order";
pub const VERSE_DUPLICATE: &str = "usfm::verse::duplicate";
pub const VERSE_MISSING: &str = "usfm::verse::missing";
pub const VERSE_EMPTY: &str = "usfm::verse::empty";
pub const VERSE_COUNT: &str = "usfm::verse::count";

pub const TEXT_ORPHAN: &str = "usfm::text::orphan";
pub const MARKER_UNKNOWN: &str = "usfm::marker::unknown";
pub const MARKER_ORPHAN_PARAGRAPH: &str = "usfm::marker::orphan-paragraph";
pub const MARKER_ESCAPE: &str = "usfm::marker::escape";
pub const MARKER_USELESS: &str = "usfm::marker::useless";

pub const NOTE_UNCLOSED: &str = "usfm::note::unclosed";
pub const NOTE_UNMATCHED_END: &str = "usfm::note::unmatched-end";

pub const MILESTONE_UNCLOSED: &str = "usfm::milestone::unclosed";
pub const MILESTONE_UNMATCHED_END: &str = "usfm::milestone::unmatched-end";

pub const FILE_EMPTY: &str = "usfm::file::empty";
pub const FILE_TOKENIZE: &str = "usfm::file::tokenize";
pub const FILE_IO: &str = "usfm::file::io";
