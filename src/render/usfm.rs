//! Canonical USFM output.
//!
//! Paragraph-level markers (identification, headings, chapters, verses,
//! paragraphs, poetry, lists, table rows) each start a new line; every other
//! marker is written in place. Tokenizing the output again yields the same
//! kinds and values.

use crate::lexer::{Token, TokenKind};

use super::TokenVisitor;

/// Re-serializes a token sequence into USFM text.
#[derive(Debug, Default)]
pub struct UsfmWriter {
    out: String,
    /// A separator is owed before the next text or inline marker.
    pending_space: bool,
    /// The last thing written was an end marker.
    after_end: bool,
}

impl UsfmWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(mut self) -> String {
        self.end_line();
        self.out
    }

    fn end_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn marker(&mut self, token: &Token) {
        let kind = token.kind;
        if kind.is_block() {
            self.end_line();
        } else if self.pending_space && !kind.is_end() && kind != TokenKind::MilestoneClose {
            self.out.push(' ');
        }

        self.out.push_str(&token.describe());
        self.after_end = kind.is_end() || kind == TokenKind::MilestoneClose;
        self.pending_space = !self.after_end
            && !matches!(kind, TokenKind::Milestone | TokenKind::MilestoneEnd);

        if let Some(value) = token.value.as_deref().filter(|_| carries_value(kind)) {
            self.out.push(' ');
            self.out.push_str(value);
        }
    }

    fn text(&mut self, token: &Token) {
        let text = token.value();
        let separate = self.pending_space
            || (self.after_end && text.starts_with(char::is_alphanumeric));
        if separate && !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push(' ');
        }
        self.out.push_str(text);
        // Text runs keep their own trailing whitespace.
        self.pending_space = false;
        self.after_end = false;
    }
}

/// Whether the token's value is written after its marker.
fn carries_value(kind: TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::Unknown
            | TokenKind::Milestone
            | TokenKind::MilestoneStart
            | TokenKind::MilestoneEnd
            | TokenKind::Text
    )
}

impl TokenVisitor for UsfmWriter {
    fn visit_identification(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_heading(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_introduction(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_chapter(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_verse(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_paragraph(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_list(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_poetry(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_footnote(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_cross_reference(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_character_style(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_table(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_milestone(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_escape(&mut self, token: &Token) {
        self.marker(token);
    }

    fn visit_text(&mut self, token: &Token) {
        self.text(token);
    }

    fn visit_unknown(&mut self, token: &Token) {
        self.marker(token);
    }

    fn finish(&mut self) {
        self.end_line();
    }
}

/// Serialize `tokens` as canonical USFM.
pub fn write_usfm<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut writer = UsfmWriter::new();
    super::walk(tokens, &mut writer);
    writer.into_string()
}
