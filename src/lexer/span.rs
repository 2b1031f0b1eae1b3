//! Source location tracking for tokens and tokenizer errors.

use std::fmt;
use std::ops::Range;

/// A location in source text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of file
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to a Location (line/column).
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];

    let mut line = 1;
    let mut line_start = 0;
    let bytes = before.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let ends_line = b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
        if ends_line {
            line += 1;
            line_start = i + 1;
        }
    }
    let column = before[line_start..].chars().count() as u32 + 1;

    Location { offset, line, column }
}

/// Up to `max_chars` characters of `source` starting at the byte range start,
/// cut at the end of the line.
pub fn excerpt(source: &str, range: Range<usize>, max_chars: usize) -> String {
    let start = range.start.min(source.len());
    source
        .get(start..)
        .unwrap_or_default()
        .chars()
        .take_while(|c| *c != '\n' && *c != '\r')
        .take(max_chars)
        .collect()
}
