//! Raw lexemes produced by the logos lexer.
//!
//! Lexemes know nothing about marker names or payloads; the assembler in
//! the parent module turns them into [`Token`](super::Token)s.

use std::ops::Range;

use logos::Logos;

use crate::error::TokenizeError;

use super::span::{excerpt, offset_to_location};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// `\name` or `\name*`
    #[regex(r"\\[^ \t\r\n\\*]+\*?")]
    Marker,

    /// `\*`, closing a milestone's attribute list
    #[token("\\*")]
    Close,

    /// A backslash followed by whitespace, another backslash, or end of input
    #[token("\\")]
    Backslash,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"[ \t]+")]
    Space,

    /// Literal text up to the next backslash or line break
    #[regex(r"[^\\ \t\r\n][^\\\r\n]*")]
    Text,
}

/// Split `source` into lexemes with their byte ranges.
pub fn lex(source: &str) -> Result<Vec<(Lexeme, Range<usize>)>, TokenizeError> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(lexeme) => lexemes.push((lexeme, span)),
            Err(()) => {
                let location = offset_to_location(source, span.start);
                return Err(TokenizeError::Unmatched {
                    line: location.line,
                    column: location.column,
                    excerpt: excerpt(source, span, 20),
                });
            }
        }
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Lexeme> {
        lex(source).unwrap().into_iter().map(|(l, _)| l).collect()
    }

    #[test]
    fn test_marker_and_text() {
        assert_eq!(
            kinds("\\v 1 In the beginning"),
            vec![Lexeme::Marker, Lexeme::Space, Lexeme::Text]
        );
    }

    #[test]
    fn test_end_marker_includes_star() {
        let lexemes = lex("\\f*text").unwrap();
        assert_eq!(lexemes[0], (Lexeme::Marker, 0..3));
        assert_eq!(lexemes[1], (Lexeme::Text, 3..7));
    }

    #[test]
    fn test_milestone_close_and_backslash() {
        assert_eq!(
            kinds("\\zaln-s |x=\"1\"\\*"),
            vec![Lexeme::Marker, Lexeme::Space, Lexeme::Text, Lexeme::Close]
        );
        assert_eq!(kinds("a \\ b"), vec![
            Lexeme::Text,
            Lexeme::Backslash,
            Lexeme::Space,
            Lexeme::Text
        ]);
    }

    #[test]
    fn test_text_keeps_inner_spaces() {
        let lexemes = lex("one two  \nthree").unwrap();
        assert_eq!(lexemes[0], (Lexeme::Text, 0..9));
        assert_eq!(lexemes[1].0, Lexeme::Newline);
    }

    #[test]
    fn test_crlf_is_one_newline() {
        assert_eq!(kinds("\\p\r\n\\v"), vec![
            Lexeme::Marker,
            Lexeme::Newline,
            Lexeme::Marker
        ]);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").unwrap().is_empty());
    }
}
