//! Token consumers.
//!
//! A consumer implements [`TokenVisitor`] and is driven by [`walk`], which
//! dispatches each token to the method for its [`Family`] strictly in
//! document order. Every family method defaults to ignoring the token, so a
//! consumer only overrides what it cares about; `visit_unknown` is required
//! so that no consumer silently drops unregistered markers.

mod inventory;
mod usfm;

pub use crate::lexer::Family;
pub use inventory::MarkerInventory;
pub use usfm::{write_usfm, UsfmWriter};

use crate::lexer::Token;

/// Callbacks for each token family.
pub trait TokenVisitor {
    fn visit_identification(&mut self, _token: &Token) {}
    fn visit_heading(&mut self, _token: &Token) {}
    fn visit_introduction(&mut self, _token: &Token) {}
    fn visit_chapter(&mut self, _token: &Token) {}
    fn visit_verse(&mut self, _token: &Token) {}
    fn visit_paragraph(&mut self, _token: &Token) {}
    fn visit_list(&mut self, _token: &Token) {}
    fn visit_poetry(&mut self, _token: &Token) {}
    fn visit_footnote(&mut self, _token: &Token) {}
    fn visit_cross_reference(&mut self, _token: &Token) {}
    fn visit_character_style(&mut self, _token: &Token) {}
    fn visit_table(&mut self, _token: &Token) {}
    fn visit_milestone(&mut self, _token: &Token) {}
    fn visit_escape(&mut self, _token: &Token) {}
    fn visit_text(&mut self, _token: &Token) {}

    /// An unregistered or malformed marker; the token value holds its name.
    fn visit_unknown(&mut self, token: &Token);

    /// Called once after the last token.
    fn finish(&mut self) {}
}

/// Feed every token to `visitor` in order, then call [`TokenVisitor::finish`].
pub fn walk<'a, V>(tokens: impl IntoIterator<Item = &'a Token>, visitor: &mut V)
where
    V: TokenVisitor + ?Sized,
{
    for token in tokens {
        match token.kind.family() {
            Family::Identification => visitor.visit_identification(token),
            Family::Heading => visitor.visit_heading(token),
            Family::Introduction => visitor.visit_introduction(token),
            Family::Chapter => visitor.visit_chapter(token),
            Family::Verse => visitor.visit_verse(token),
            Family::Paragraph => visitor.visit_paragraph(token),
            Family::List => visitor.visit_list(token),
            Family::Poetry => visitor.visit_poetry(token),
            Family::Footnote => visitor.visit_footnote(token),
            Family::CrossReference => visitor.visit_cross_reference(token),
            Family::CharacterStyle => visitor.visit_character_style(token),
            Family::Table => visitor.visit_table(token),
            Family::Milestone => visitor.visit_milestone(token),
            Family::Escape => visitor.visit_escape(token),
            Family::Text => visitor.visit_text(token),
            Family::Unknown => visitor.visit_unknown(token),
        }
    }
    visitor.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[derive(Default)]
    struct Trace {
        calls: Vec<String>,
        finished: bool,
    }

    impl TokenVisitor for Trace {
        fn visit_chapter(&mut self, token: &Token) {
            self.calls.push(format!("chapter {}", token.value()));
        }

        fn visit_verse(&mut self, token: &Token) {
            self.calls.push(format!("verse {}", token.value()));
        }

        fn visit_text(&mut self, token: &Token) {
            self.calls.push(format!("text {}", token.value()));
        }

        fn visit_unknown(&mut self, token: &Token) {
            self.calls.push(format!("unknown {}", token.value()));
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn test_walk_dispatches_in_order() {
        let stream = tokenize("\\id GEN\n\\c 1\n\\p\n\\v 1 In \\zz the\n").unwrap();
        let mut trace = Trace::default();
        walk(&stream, &mut trace);

        assert_eq!(
            trace.calls,
            vec!["chapter 1", "verse 1", "text In ", "unknown zz", "text the"]
        );
        assert!(trace.finished);
    }

    #[test]
    fn test_walk_empty() {
        let mut trace = Trace::default();
        walk(&[], &mut trace);
        assert!(trace.calls.is_empty());
        assert!(trace.finished);
    }
}
