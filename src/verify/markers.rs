//! Raw chapter and verse marker checks.
//!
//! These run over the document text before tokenization and catch spacing
//! problems that the tokenizer would otherwise silently fold into unknown
//! markers: `\c1`, `\v 5text`, `text\v 6`, and similar.

use crate::report::{codes, Diagnostic, Reference};

const CHAPTER_MARKER: &str = "\\c";
const VERSE_MARKER: &str = "\\v";

const SPACE: [char; 2] = [' ', '\u{a0}'];
const WHITE_SPACE: [char; 5] = [' ', '\u{a0}', '\r', '\n', '\t'];
const EXAMPLE_CHARS: usize = 8;

/// Check every `\c` and `\v` marker in `text` for book `book`.
pub fn check_markers(text: &str, book: &str) -> Vec<Diagnostic> {
    let mut scan = Scan {
        text,
        book,
        out: Vec::new(),
    };

    let mut pos = 0;
    let mut last_chapter = 1;
    for (start, marker) in text.match_indices(CHAPTER_MARKER) {
        let mut end = start + marker.len();
        let next = char_at(text, end);
        if next.is_some_and(|c| c.is_ascii_lowercase()) {
            continue;
        }
        let has_space = next.is_some_and(|c| SPACE.contains(&c));
        if let (true, Some(c)) = (has_space, next) {
            end += c.len_utf8();
        }
        let newline_before = start == 0 || matches!(char_before(text, start), Some('\n' | '\r'));

        let number = scan.number(end, last_chapter);
        if number.digits.is_empty() {
            scan.chapter_error("Invalid chapter number format", start, last_chapter);
            continue;
        }
        if !has_space {
            scan.chapter_error("Missing space before chapter number", start, last_chapter);
        } else if !number.white_after {
            scan.chapter_error("Missing new line after chapter number", start, last_chapter);
        } else if !newline_before {
            scan.chapter_error(
                "Missing new line before chapter marker",
                back(text, start, 4),
                last_chapter,
            );
        }
        scan.check_chapter(last_chapter, pos, start);
        last_chapter = number.digits.parse().unwrap_or(0);
        pos = end;
    }
    scan.check_chapter(last_chapter, pos, text.len());

    scan.out
}

struct Number {
    digits: String,
    next: Option<char>,
    end: usize,
    white_after: bool,
}

struct Scan<'t> {
    text: &'t str,
    book: &'t str,
    out: Vec<Diagnostic>,
}

impl Scan<'_> {
    fn example(&self, pos: usize) -> String {
        self.text
            .get(pos..)
            .unwrap_or_default()
            .chars()
            .take(EXAMPLE_CHARS)
            .collect()
    }

    fn chapter_error(&mut self, message: &str, pos: usize, chapter: u32) {
        let message = format!("{message}: '{}'", self.example(pos));
        self.out.push(
            Diagnostic::error(codes::CHAPTER_FORMAT, message)
                .at(Reference::chapter(self.book, chapter)),
        );
    }

    fn verse_error(&mut self, message: &str, pos: usize, chapter: u32, verse: &str) {
        let message = format!("{message}: '{}'", self.example(pos));
        self.out.push(
            Diagnostic::error(codes::VERSE_FORMAT, message)
                .at(Reference::verse(self.book, chapter, verse)),
        );
    }

    /// Read a run of ASCII digits starting at `pos`.
    fn number(&mut self, pos: usize, chapter: u32) -> Number {
        let rest = self.text.get(pos..).unwrap_or_default();
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.starts_with('0') {
            let message = format!(
                "Leading zero in chapter or verse number: '{}'",
                self.example(pos)
            );
            self.out.push(
                Diagnostic::warning(codes::LEADING_ZERO, message)
                    .at(Reference::chapter(self.book, chapter)),
            );
        }
        let next = rest[digits.len()..].chars().next();
        Number {
            end: pos + digits.len(),
            white_after: next.map_or(true, |c| WHITE_SPACE.contains(&c)),
            next,
            digits,
        }
    }

    /// A verse number or `a-b` range starting at `pos`, with whether
    /// whitespace follows it.
    fn verse_range(&mut self, pos: usize, chapter: u32) -> Option<(String, bool)> {
        let first = self.number(pos, chapter);
        if first.digits.is_empty() {
            return None;
        }
        if first.next != Some('-') {
            return Some((first.digits, first.white_after));
        }
        let second = self.number(first.end + 1, chapter);
        if second.digits.is_empty() {
            return None;
        }
        Some((
            format!("{}-{}", first.digits, second.digits),
            second.white_after,
        ))
    }

    fn check_chapter(&mut self, chapter: u32, start: usize, end: usize) {
        let text = self.text;
        let region = text.get(start..end).unwrap_or_default();
        let mut last_range = "1".to_string();

        for (offset, found) in region.match_indices(VERSE_MARKER) {
            let marker = start + offset;
            let mut after = marker + found.len();
            let next = char_at(text, after);
            if next.is_some_and(|c| c.is_ascii_lowercase()) {
                continue;
            }
            let has_space = next.is_some_and(|c| SPACE.contains(&c));
            if let (true, Some(c)) = (has_space, next) {
                after += c.len_utf8();
            }
            let space_before = marker == 0
                || char_before(text, marker).is_some_and(|c| WHITE_SPACE.contains(&c));

            match self.verse_range(after, chapter) {
                Some((range, white_after)) => {
                    if !has_space {
                        self.verse_error("Missing space before verse number", marker, chapter, &range);
                    } else if !white_after {
                        self.verse_error("Missing space after verse number", marker, chapter, &range);
                    } else if !space_before {
                        self.verse_error(
                            "Missing space before verse marker",
                            back(text, marker, 1),
                            chapter,
                            &range,
                        );
                    }
                    last_range = range;
                }
                None => {
                    let previous = last_range.clone();
                    self.verse_error("Invalid verse number", marker, chapter, &previous);
                }
            }
        }
    }
}

fn char_at(text: &str, index: usize) -> Option<char> {
    text.get(index..)?.chars().next()
}

fn char_before(text: &str, index: usize) -> Option<char> {
    text.get(..index)?.chars().next_back()
}

/// Byte index `n` characters before `index`, clamped to the start.
fn back(text: &str, index: usize, n: usize) -> usize {
    text.get(..index)
        .and_then(|before| before.char_indices().rev().nth(n.saturating_sub(1)))
        .map_or(0, |(i, _)| i)
}
