//! Token types produced by the tokenizer.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Fields inside a footnote or endnote (`\fr`, `\ft`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteField {
    Fr,
    Fk,
    Ft,
    Fq,
    Fqa,
    Fqb,
    Fv,
    Fdc,
    Fp,
}

impl NoteField {
    pub fn name(self) -> &'static str {
        match self {
            NoteField::Fr => "fr",
            NoteField::Fk => "fk",
            NoteField::Ft => "ft",
            NoteField::Fq => "fq",
            NoteField::Fqa => "fqa",
            NoteField::Fqb => "fqb",
            NoteField::Fv => "fv",
            NoteField::Fdc => "fdc",
            NoteField::Fp => "fp",
        }
    }
}

/// Fields inside a cross reference (`\xo`, `\xt`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossRefField {
    Xo,
    Xk,
    Xq,
    Xt,
    Xdc,
}

impl CrossRefField {
    pub fn name(self) -> &'static str {
        match self {
            CrossRefField::Xo => "xo",
            CrossRefField::Xk => "xk",
            CrossRefField::Xq => "xq",
            CrossRefField::Xt => "xt",
            CrossRefField::Xdc => "xdc",
        }
    }
}

/// Character-level styles that open with `\name` and close with `\name*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharStyle {
    Add,
    Bd,
    Bdit,
    Bk,
    Ca,
    Ior,
    It,
    K,
    Nd,
    Pn,
    Qs,
    Qt,
    Rq,
    Sc,
    Tl,
    Va,
    W,
    Wj,
}

impl CharStyle {
    pub fn name(self) -> &'static str {
        match self {
            CharStyle::Add => "add",
            CharStyle::Bd => "bd",
            CharStyle::Bdit => "bdit",
            CharStyle::Bk => "bk",
            CharStyle::Ca => "ca",
            CharStyle::Ior => "ior",
            CharStyle::It => "it",
            CharStyle::K => "k",
            CharStyle::Nd => "nd",
            CharStyle::Pn => "pn",
            CharStyle::Qs => "qs",
            CharStyle::Qt => "qt",
            CharStyle::Rq => "rq",
            CharStyle::Sc => "sc",
            CharStyle::Tl => "tl",
            CharStyle::Va => "va",
            CharStyle::W => "w",
            CharStyle::Wj => "wj",
        }
    }
}

/// Every kind of token the tokenizer can produce.
///
/// Levelled markers keep the level as written: `\q` is `Q(None)`, `\q1` is
/// `Q(Some(1))`. Nested character markers (`\+nd`) set `nested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Identification
    Id,
    Ide,
    Usfm,
    H,
    Toc(Option<u8>),
    Rem,
    Sts,

    // Titles, headings and labels
    Mt(Option<u8>),
    Mte,
    Ms(Option<u8>),
    Mr,
    S(Option<u8>),
    Sr,
    R,
    D,
    Sp,
    Cl,
    Periph,

    // Introduction
    Imt(Option<u8>),
    Is(Option<u8>),
    Ip,
    Ipi,
    Im,
    Imi,
    Iot,
    Io(Option<u8>),
    Ie,

    // Chapters and verses
    C,
    V,

    // Paragraphs
    P,
    Pc,
    Pi(Option<u8>),
    Nb,
    M,
    Mi,
    Cls,
    B,

    // Lists
    Li(Option<u8>),

    // Poetry
    Q(Option<u8>),
    Qa,
    Qac,
    Qc,
    Qm(Option<u8>),
    Qr,

    // Footnotes and endnotes
    FootnoteStart,
    FootnoteEnd,
    EndnoteStart,
    EndnoteEnd,
    NoteField(NoteField),
    NoteFieldEnd(NoteField),

    // Cross references
    CrossRefStart,
    CrossRefEnd,
    CrossRefField { field: CrossRefField, nested: bool },
    CrossRefFieldEnd { field: CrossRefField, nested: bool },

    // Character styles
    CharStart { style: CharStyle, nested: bool },
    CharEnd { style: CharStyle, nested: bool },

    // Tables
    Tr,
    TableHeader { column: u8, right: bool },
    TableCell { column: u8, right: bool },

    // Milestones: `\name-s`, `\name-e`, a standalone `\name\*`, and the `\*` closer.
    MilestoneStart,
    MilestoneEnd,
    Milestone,
    MilestoneClose,

    /// A backslash that starts no marker.
    Escape,
    /// A run of literal text.
    Text,
    /// An unregistered or malformed marker; the value holds its name.
    Unknown,
}

/// Coarse grouping of token kinds, one per consumer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Identification,
    Heading,
    Introduction,
    Chapter,
    Verse,
    Paragraph,
    List,
    Poetry,
    Footnote,
    CrossReference,
    CharacterStyle,
    Table,
    Milestone,
    Escape,
    Text,
    Unknown,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Identification => "identification",
            Family::Heading => "heading",
            Family::Introduction => "introduction",
            Family::Chapter => "chapter",
            Family::Verse => "verse",
            Family::Paragraph => "paragraph",
            Family::List => "list",
            Family::Poetry => "poetry",
            Family::Footnote => "footnote",
            Family::CrossReference => "cross-reference",
            Family::CharacterStyle => "character-style",
            Family::Table => "table",
            Family::Milestone => "milestone",
            Family::Escape => "escape",
            Family::Text => "text",
            Family::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// What a marker takes as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Nothing; following text is a separate token.
    None,
    /// The rest of the line up to the next backslash.
    Phrase,
    /// A chapter or verse number.
    Number,
    /// A single note caller character.
    Caller,
}

impl TokenKind {
    pub fn family(&self) -> Family {
        use TokenKind::*;
        match self {
            Id | Ide | Usfm | H | Toc(_) | Rem | Sts => Family::Identification,
            Mt(_) | Mte | Ms(_) | Mr | S(_) | Sr | R | D | Sp | Cl | Periph => Family::Heading,
            Imt(_) | Is(_) | Ip | Ipi | Im | Imi | Iot | Io(_) | Ie => Family::Introduction,
            C => Family::Chapter,
            V => Family::Verse,
            P | Pc | Pi(_) | Nb | M | Mi | Cls | B => Family::Paragraph,
            Li(_) => Family::List,
            Q(_) | Qa | Qac | Qc | Qm(_) | Qr => Family::Poetry,
            FootnoteStart | FootnoteEnd | EndnoteStart | EndnoteEnd | NoteField(_)
            | NoteFieldEnd(_) => Family::Footnote,
            CrossRefStart | CrossRefEnd | CrossRefField { .. } | CrossRefFieldEnd { .. } => {
                Family::CrossReference
            }
            CharStart { .. } | CharEnd { .. } => Family::CharacterStyle,
            Tr | TableHeader { .. } | TableCell { .. } => Family::Table,
            MilestoneStart | MilestoneEnd | Milestone | MilestoneClose => Family::Milestone,
            Escape => Family::Escape,
            Text => Family::Text,
            Unknown => Family::Unknown,
        }
    }

    pub fn payload(&self) -> Payload {
        use TokenKind::*;
        match self {
            Id | Ide | Usfm | H | Toc(_) | Rem | Sts => Payload::Phrase,
            Mt(_) | Mte | Ms(_) | Mr | S(_) | Sr | R | D | Sp | Cl | Periph => Payload::Phrase,
            Imt(_) | Is(_) => Payload::Phrase,
            NoteField(field) if *field != self::NoteField::Fp => Payload::Phrase,
            CrossRefField { .. } => Payload::Phrase,
            C | V => Payload::Number,
            FootnoteStart | EndnoteStart | CrossRefStart => Payload::Caller,
            _ => Payload::None,
        }
    }

    /// Kinds after which literal text is acceptable without a paragraph marker.
    pub fn is_text_carrying(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            B | M | Mi | D | Sp | Li(_) | TableHeader { .. } | TableCell { .. }
        ) || matches!(
            self.family(),
            Family::Poetry
                | Family::Introduction
                | Family::Footnote
                | Family::CrossReference
                | Family::CharacterStyle
        )
    }

    pub fn is_footnote(&self) -> bool {
        self.family() == Family::Footnote
    }

    pub fn is_milestone(&self) -> bool {
        self.family() == Family::Milestone
    }

    /// Whether this kind closes a span (`\f*`, `\nd*`, ...).
    pub fn is_end(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            FootnoteEnd
                | EndnoteEnd
                | NoteFieldEnd(_)
                | CrossRefEnd
                | CrossRefFieldEnd { .. }
                | CharEnd { .. }
        )
    }

    /// Whether this kind starts a new line in canonical USFM.
    pub fn is_block(&self) -> bool {
        matches!(
            self.family(),
            Family::Identification
                | Family::Heading
                | Family::Introduction
                | Family::Chapter
                | Family::Verse
                | Family::Paragraph
                | Family::List
                | Family::Poetry
        ) || *self == TokenKind::Tr
    }
}

/// A single token: its kind, optional value, and byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, value: Option<String>, span: Range<usize>) -> Self {
        Self { kind, value, span }
    }

    /// The value, or an empty string when there is none.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }

    /// Short human-readable form: the marker as written, or the text itself.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Text => self.value().to_string(),
            TokenKind::Escape => "\\".to_string(),
            TokenKind::Unknown | TokenKind::Milestone => format!("\\{}", self.value()),
            TokenKind::MilestoneStart => format!("\\{}-s", self.value()),
            TokenKind::MilestoneEnd => format!("\\{}-e", self.value()),
            kind => format!("\\{}", kind.marker_name().unwrap_or_default()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker_name() {
            Some(name) => write!(f, "\\{name}"),
            None => write!(f, "{}", self.family()),
        }
    }
}
