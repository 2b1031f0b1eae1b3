//! Marker usage census.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lexer::{Family, Token, TokenKind};

use super::TokenVisitor;

/// Counts of every marker in a document, grouped by family, plus the names
/// of unregistered markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerInventory {
    pub families: BTreeMap<Family, usize>,
    pub markers: BTreeMap<String, usize>,
    pub unknown: BTreeMap<String, usize>,
    pub text_runs: usize,
}

impl MarkerInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of marker tokens, unknown ones included.
    pub fn marker_count(&self) -> usize {
        self.families
            .iter()
            .filter(|(family, _)| **family != Family::Text)
            .map(|(_, count)| count)
            .sum()
    }

    pub fn count(&self, marker: &str) -> usize {
        self.markers.get(marker).copied().unwrap_or(0)
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    fn record(&mut self, token: &Token) {
        *self.families.entry(token.kind.family()).or_default() += 1;
        match token.kind {
            TokenKind::Text => self.text_runs += 1,
            TokenKind::Unknown => *self.unknown.entry(token.value().to_string()).or_default() += 1,
            _ => *self.markers.entry(token.describe()).or_default() += 1,
        }
    }
}

impl TokenVisitor for MarkerInventory {
    fn visit_identification(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_heading(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_introduction(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_chapter(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_verse(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_paragraph(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_list(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_poetry(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_footnote(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_cross_reference(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_character_style(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_table(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_milestone(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_escape(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_text(&mut self, token: &Token) {
        self.record(token);
    }

    fn visit_unknown(&mut self, token: &Token) {
        self.record(token);
    }
}
