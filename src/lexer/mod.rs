//! USFM tokenizer.
//!
//! Tokenization runs in two steps: a `logos` lexer splits the source into
//! raw [`Lexeme`]s, then an assembler looks marker names up in the marker
//! table and attaches payloads (phrases, numbers, note callers).
//!
//! Every byte of the normalized source belongs to exactly one token:
//! whitespace is folded into the span of the token before it, and leading
//! whitespace into the first token.
//!
//! # Example
//!
//! ```
//! use usfm_verify::lexer::{tokenize, TokenKind};
//!
//! let stream = tokenize("\\c 1\n\\p\n\\v 1 In the beginning").unwrap();
//! let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::C, TokenKind::P, TokenKind::V, TokenKind::Text]);
//! ```

mod lexeme;
pub mod marker;
pub mod span;
mod token;

use std::ops::Range;

use tracing::debug;

pub use crate::error::TokenizeError;
pub use lexeme::Lexeme;
pub use span::{offset_to_location, Location};
pub use token::{CharStyle, CrossRefField, Family, NoteField, Payload, Token, TokenKind};

/// The tokens of one document together with the normalized source they index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// The normalized source the token spans refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the document produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The exact source slice covered by a token.
    pub fn raw(&self, token: &Token) -> &str {
        self.source.get(token.span.clone()).unwrap_or_default()
    }

    /// Line and column where a token starts.
    pub fn location(&self, token: &Token) -> Location {
        offset_to_location(&self.source, token.span.start)
    }

    /// Take the tokens, dropping the source.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Replace no-break spaces with plain spaces.
pub fn normalize(source: &str) -> String {
    source.replace('\u{a0}', " ")
}

/// Tokenize a USFM document.
///
/// Content problems never fail here: unregistered or malformed markers come
/// back as [`TokenKind::Unknown`] tokens. An error means the input could not
/// be split into lexemes at all.
pub fn tokenize(source: &str) -> Result<TokenStream, TokenizeError> {
    let source = normalize(source);
    let lexemes = lexeme::lex(&source)?;
    let mut tokens = Assembler::new(&source, &lexemes).run();
    cover(&mut tokens, source.len());

    debug!(lexemes = lexemes.len(), tokens = tokens.len(), "tokenized document");
    Ok(TokenStream { source, tokens })
}

/// Stretch spans so they tile the whole input.
fn cover(tokens: &mut [Token], len: usize) {
    if tokens.is_empty() {
        return;
    }
    tokens[0].span.start = 0;
    for i in 1..tokens.len() {
        let next_start = tokens[i].span.start;
        tokens[i - 1].span.end = next_start;
    }
    if let Some(last) = tokens.last_mut() {
        last.span.end = len;
    }
}

struct Assembler<'s> {
    source: &'s str,
    lexemes: &'s [(Lexeme, Range<usize>)],
    pos: usize,
    tokens: Vec<Token>,
}

impl<'s> Assembler<'s> {
    fn new(source: &'s str, lexemes: &'s [(Lexeme, Range<usize>)]) -> Self {
        Self {
            source,
            lexemes,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some((lexeme, span)) = self.lexemes.get(self.pos).cloned() {
            self.pos += 1;
            match lexeme {
                Lexeme::Space | Lexeme::Newline => {}
                Lexeme::Text => {
                    let text = self.slice(&span).to_string();
                    self.push(TokenKind::Text, Some(text), span);
                }
                Lexeme::Backslash => self.push(TokenKind::Escape, None, span),
                Lexeme::Close => self.push(TokenKind::MilestoneClose, None, span),
                Lexeme::Marker => self.marker(span),
            }
        }
        self.tokens
    }

    fn slice(&self, span: &Range<usize>) -> &'s str {
        self.source.get(span.clone()).unwrap_or_default()
    }

    fn push(&mut self, kind: TokenKind, value: Option<String>, span: Range<usize>) {
        self.tokens.push(Token::new(kind, value, span));
    }

    fn peek_kind(&self, index: usize) -> Option<Lexeme> {
        self.lexemes.get(index).map(|(lexeme, _)| *lexeme)
    }

    /// Index of the first non-space lexeme at or after `pos` on the same line.
    fn skip_spaces(&self) -> usize {
        let mut index = self.pos;
        while self.peek_kind(index) == Some(Lexeme::Space) {
            index += 1;
        }
        index
    }

    fn marker(&mut self, span: Range<usize>) {
        let name = &self.slice(&span)[1..];
        let is_end = name.ends_with('*');
        let glued = matches!(
            self.peek_kind(self.pos),
            Some(Lexeme::Marker | Lexeme::Close | Lexeme::Backslash)
        );

        if !is_end {
            if let Some((kind, base)) = marker::milestone(name) {
                self.push(kind, Some(base.to_string()), span);
                return;
            }
        }

        let Some(kind) = marker::lookup(name) else {
            let kind = if !is_end && self.peek_kind(self.pos) == Some(Lexeme::Close) {
                TokenKind::Milestone
            } else {
                TokenKind::Unknown
            };
            self.push(kind, Some(name.to_string()), span);
            return;
        };

        if is_end {
            self.push(kind, None, span);
            return;
        }
        if glued {
            self.push(TokenKind::Unknown, Some(name.to_string()), span);
            return;
        }

        match kind.payload() {
            Payload::None => self.push(kind, None, span),
            Payload::Phrase => self.phrase(kind, span),
            Payload::Number => self.number(kind, name, span),
            Payload::Caller => self.caller(kind, span),
        }
    }

    fn phrase(&mut self, kind: TokenKind, span: Range<usize>) {
        let index = self.skip_spaces();
        match self.lexemes.get(index) {
            Some((Lexeme::Text, text_span)) => {
                let value = self.slice(text_span).trim_end().to_string();
                let end = text_span.end;
                self.pos = index + 1;
                self.push(kind, Some(value), span.start..end);
            }
            _ => self.push(kind, None, span),
        }
    }

    fn number(&mut self, kind: TokenKind, name: &str, span: Range<usize>) {
        let index = self.skip_spaces();
        let Some((Lexeme::Text, text_span)) = self.lexemes.get(index).cloned() else {
            self.push(TokenKind::Unknown, Some(name.to_string()), span);
            return;
        };
        let text = self.slice(&text_span);
        let len: usize = text
            .chars()
            .take_while(|c| c.is_ascii_digit() || matches!(c, '-' | '(' | ')'))
            .map(char::len_utf8)
            .sum();
        let rest = &text[len..];
        let ends_cleanly = if rest.is_empty() {
            !matches!(
                self.peek_kind(index + 1),
                Some(Lexeme::Marker | Lexeme::Close | Lexeme::Backslash)
            )
        } else {
            rest.starts_with([' ', '\t'])
        };
        if len == 0 || !ends_cleanly {
            self.push(TokenKind::Unknown, Some(name.to_string()), span);
            return;
        }

        self.pos = index + 1;
        let value = text[..len].to_string();
        self.push(kind, Some(value), span.start..text_span.start + len);
        self.remainder(&text_span, len);
    }

    fn caller(&mut self, kind: TokenKind, span: Range<usize>) {
        let index = self.skip_spaces();
        let Some((Lexeme::Text, text_span)) = self.lexemes.get(index).cloned() else {
            self.push(kind, None, span);
            return;
        };
        let text = self.slice(&text_span);
        let mut chars = text.chars();
        let (Some(first), next) = (chars.next(), chars.next()) else {
            self.push(kind, None, span);
            return;
        };
        if !matches!(next, None | Some(' ' | '\t')) {
            self.push(kind, None, span);
            return;
        }

        self.pos = index + 1;
        let len = first.len_utf8();
        self.push(kind, Some(first.to_string()), span.start..text_span.start + len);
        self.remainder(&text_span, len);
    }

    /// Emit what is left of a text lexeme after a number or caller prefix.
    fn remainder(&mut self, text_span: &Range<usize>, prefix: usize) {
        let rest = &self.slice(text_span)[prefix..];
        let trimmed = rest.trim_start_matches([' ', '\t']);
        if trimmed.is_empty() {
            return;
        }
        let start = text_span.end - trimmed.len();
        self.push(TokenKind::Text, Some(trimmed.to_string()), start..text_span.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(source: &str) -> Vec<(TokenKind, Option<String>)> {
        tokenize(source)
            .unwrap()
            .into_tokens()
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    fn v(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_header_and_verse() {
        let source = "\\id GEN Unlocked Literal Bible\n\\h Genesis  \n\\c 1\n\\p\n\\v 1 In the beginning";
        assert_eq!(
            summary(source),
            vec![
                (TokenKind::Id, v("GEN Unlocked Literal Bible")),
                (TokenKind::H, v("Genesis")),
                (TokenKind::C, v("1")),
                (TokenKind::P, None),
                (TokenKind::V, v("1")),
                (TokenKind::Text, v("In the beginning")),
            ]
        );
    }

    #[test]
    fn test_table_of_contents_levels() {
        assert_eq!(
            summary("\\toc Genesis\n\\toc1 The Book of Genesis\n\\toc3 Gen"),
            vec![
                (TokenKind::Toc(None), v("Genesis")),
                (TokenKind::Toc(Some(1)), v("The Book of Genesis")),
                (TokenKind::Toc(Some(3)), v("Gen")),
            ]
        );
    }

    #[test]
    fn test_verse_range_and_trailing_space_in_text() {
        assert_eq!(
            summary("\\v 3-4 God said \\f + \\ft note\\f* light"),
            vec![
                (TokenKind::V, v("3-4")),
                (TokenKind::Text, v("God said ")),
                (TokenKind::FootnoteStart, v("+")),
                (TokenKind::NoteField(NoteField::Ft), v("note")),
                (TokenKind::FootnoteEnd, None),
                (TokenKind::Text, v("light")),
            ]
        );
    }

    #[test]
    fn test_glued_marker_is_unknown() {
        assert_eq!(
            summary("\\p\\v 1 text"),
            vec![
                (TokenKind::Unknown, v("p")),
                (TokenKind::V, v("1")),
                (TokenKind::Text, v("text")),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers_are_unknown() {
        assert_eq!(
            summary("\\v 1a text"),
            vec![(TokenKind::Unknown, v("v")), (TokenKind::Text, v("1a text"))]
        );
        assert_eq!(summary("\\c"), vec![(TokenKind::Unknown, v("c"))]);
        assert_eq!(
            summary("\\v 2\\f + \\f*"),
            vec![
                (TokenKind::Unknown, v("v")),
                (TokenKind::Text, v("2")),
                (TokenKind::FootnoteStart, v("+")),
                (TokenKind::FootnoteEnd, None),
            ]
        );
    }

    #[test]
    fn test_unregistered_markers() {
        assert_eq!(
            summary("\\zz hello \\q9"),
            vec![
                (TokenKind::Unknown, v("zz")),
                (TokenKind::Text, v("hello ")),
                (TokenKind::Unknown, v("q9")),
            ]
        );
    }

    #[test]
    fn test_nested_character_style() {
        assert_eq!(
            summary("\\wj Jesus said \\+nd Lord\\+nd*\\wj*"),
            vec![
                (TokenKind::CharStart { style: CharStyle::Wj, nested: false }, None),
                (TokenKind::Text, v("Jesus said ")),
                (TokenKind::CharStart { style: CharStyle::Nd, nested: true }, None),
                (TokenKind::Text, v("Lord")),
                (TokenKind::CharEnd { style: CharStyle::Nd, nested: true }, None),
                (TokenKind::CharEnd { style: CharStyle::Wj, nested: false }, None),
            ]
        );
    }

    #[test]
    fn test_milestones() {
        assert_eq!(
            summary("\\zaln-s |x-occurrence=\"1\"\\*\\w In\\w*\\zaln-e\\*\\ts\\*"),
            vec![
                (TokenKind::MilestoneStart, v("zaln")),
                (TokenKind::Text, v("|x-occurrence=\"1\"")),
                (TokenKind::MilestoneClose, None),
                (TokenKind::CharStart { style: CharStyle::W, nested: false }, None),
                (TokenKind::Text, v("In")),
                (TokenKind::CharEnd { style: CharStyle::W, nested: false }, None),
                (TokenKind::MilestoneEnd, v("zaln")),
                (TokenKind::MilestoneClose, None),
                (TokenKind::Milestone, v("ts")),
                (TokenKind::MilestoneClose, None),
            ]
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            summary("a \\ b"),
            vec![
                (TokenKind::Text, v("a ")),
                (TokenKind::Escape, None),
                (TokenKind::Text, v("b")),
            ]
        );
    }

    #[test]
    fn test_no_break_space_normalized() {
        let stream = tokenize("\\v\u{a0}1 text").unwrap();
        assert_eq!(stream.source(), "\\v 1 text");
        assert_eq!(stream.tokens()[0].kind, TokenKind::V);
    }

    #[test]
    fn test_spans_tile_the_source() {
        let source = "  \\id GEN\n\\c 1 \n\\p\n\\v 1 a \\f + \\ft b\\f*  \n";
        let stream = tokenize(source).unwrap();
        let rebuilt: String = stream.iter().map(|t| stream.raw(t)).collect();
        assert_eq!(rebuilt, source);
        assert_eq!(stream.raw(&stream.tokens()[0]), "  \\id GEN\n");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(tokenize(" \n\t\r\n").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_location() {
        let stream = tokenize("\\id GEN\n\\c 1").unwrap();
        let chapter = &stream.tokens()[1];
        assert_eq!(stream.location(chapter), Location::new(8, 2, 1));
    }
}
