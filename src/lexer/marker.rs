//! The marker-name table.
//!
//! Maps a marker name as written after the backslash (`mt1`, `f*`, `+nd`) to
//! its [`TokenKind`], and back.

use super::token::{CharStyle, CrossRefField, NoteField, TokenKind};

/// Split a trailing single-digit level off a marker name: `q2` -> (`q`, 2).
fn split_level(name: &str) -> (&str, Option<u8>) {
    let bytes = name.as_bytes();
    match bytes {
        [.., prev, last] if last.is_ascii_digit() && !prev.is_ascii_digit() => {
            (&name[..name.len() - 1], Some(last - b'0'))
        }
        _ => (name, None),
    }
}

fn in_range(level: Option<u8>, max: u8) -> bool {
    level.map_or(true, |n| (1..=max).contains(&n))
}

fn char_style(name: &str) -> Option<CharStyle> {
    Some(match name {
        "add" => CharStyle::Add,
        "bd" => CharStyle::Bd,
        "bdit" => CharStyle::Bdit,
        "bk" => CharStyle::Bk,
        "ca" => CharStyle::Ca,
        "ior" => CharStyle::Ior,
        "it" => CharStyle::It,
        "k" => CharStyle::K,
        "nd" => CharStyle::Nd,
        "pn" => CharStyle::Pn,
        "qs" => CharStyle::Qs,
        "qt" => CharStyle::Qt,
        "rq" => CharStyle::Rq,
        "sc" => CharStyle::Sc,
        "tl" => CharStyle::Tl,
        "va" => CharStyle::Va,
        "w" => CharStyle::W,
        "wj" => CharStyle::Wj,
        _ => return None,
    })
}

fn cross_ref_field(name: &str) -> Option<CrossRefField> {
    Some(match name {
        "xo" => CrossRefField::Xo,
        "xk" => CrossRefField::Xk,
        "xq" => CrossRefField::Xq,
        "xt" => CrossRefField::Xt,
        "xdc" => CrossRefField::Xdc,
        _ => return None,
    })
}

fn note_field(name: &str) -> Option<NoteField> {
    Some(match name {
        "fr" => NoteField::Fr,
        "fk" => NoteField::Fk,
        "ft" => NoteField::Ft,
        "fq" => NoteField::Fq,
        "fqa" => NoteField::Fqa,
        "fqb" => NoteField::Fqb,
        "fv" => NoteField::Fv,
        "fdc" => NoteField::Fdc,
        "fp" => NoteField::Fp,
        _ => return None,
    })
}

fn table_cell(name: &str) -> Option<TokenKind> {
    let (base, level) = split_level(name);
    let column = level.filter(|n| (1..=6).contains(n))?;
    Some(match base {
        "th" => TokenKind::TableHeader { column, right: false },
        "thr" => TokenKind::TableHeader { column, right: true },
        "tc" => TokenKind::TableCell { column, right: false },
        "tcr" => TokenKind::TableCell { column, right: true },
        _ => return None,
    })
}

fn start_kind(name: &str) -> Option<TokenKind> {
    use TokenKind::*;

    let fixed = match name {
        "id" => Some(Id),
        "ide" => Some(Ide),
        "usfm" => Some(Usfm),
        "h" => Some(H),
        "rem" => Some(Rem),
        "sts" => Some(Sts),
        "mte" => Some(Mte),
        "mr" => Some(Mr),
        "sr" => Some(Sr),
        "r" => Some(R),
        "d" => Some(D),
        "sp" => Some(Sp),
        "cl" => Some(Cl),
        "periph" => Some(Periph),
        "ip" => Some(Ip),
        "ipi" => Some(Ipi),
        "im" => Some(Im),
        "imi" => Some(Imi),
        "iot" => Some(Iot),
        "ie" => Some(Ie),
        "c" => Some(C),
        "v" => Some(V),
        "p" => Some(P),
        "pc" => Some(Pc),
        "nb" => Some(Nb),
        "m" => Some(M),
        "mi" => Some(Mi),
        "cls" => Some(Cls),
        "b" => Some(B),
        "qa" => Some(Qa),
        "qac" => Some(Qac),
        "qc" => Some(Qc),
        "qr" => Some(Qr),
        "f" => Some(FootnoteStart),
        "fe" => Some(EndnoteStart),
        "x" => Some(CrossRefStart),
        "tr" => Some(Tr),
        _ => None,
    };
    if fixed.is_some() {
        return fixed;
    }

    if let Some(field) = note_field(name) {
        return Some(NoteField(field));
    }
    if let Some(field) = cross_ref_field(name) {
        return Some(CrossRefField { field, nested: false });
    }
    if let Some(style) = char_style(name) {
        return Some(CharStart { style, nested: false });
    }
    if let Some(cell) = table_cell(name) {
        return Some(cell);
    }

    let (base, level) = split_level(name);
    match (base, level) {
        ("toc", _) if in_range(level, 3) => Some(Toc(level)),
        ("mt", _) if in_range(level, 3) => Some(Mt(level)),
        ("ms", _) if in_range(level, 2) => Some(Ms(level)),
        ("s", _) if in_range(level, 5) => Some(S(level)),
        ("imt", _) if in_range(level, 3) => Some(Imt(level)),
        ("is", _) if in_range(level, 3) => Some(Is(level)),
        ("io", _) if in_range(level, 3) => Some(Io(level)),
        ("pi", _) if in_range(level, 3) => Some(Pi(level)),
        ("li", _) if in_range(level, 4) => Some(Li(level)),
        ("q", _) if in_range(level, 4) => Some(Q(level)),
        ("qm", _) if in_range(level, 3) => Some(Qm(level)),
        _ => None,
    }
}

fn end_kind(name: &str) -> Option<TokenKind> {
    use TokenKind::*;

    match name {
        "f" => return Some(FootnoteEnd),
        "fe" => return Some(EndnoteEnd),
        "x" => return Some(CrossRefEnd),
        _ => {}
    }
    if let Some(field) = note_field(name).filter(|f| *f != super::token::NoteField::Fp) {
        return Some(NoteFieldEnd(field));
    }
    if let Some(field) = cross_ref_field(name) {
        return Some(CrossRefFieldEnd { field, nested: false });
    }
    char_style(name).map(|style| CharEnd { style, nested: false })
}

/// Look up a marker name (without the backslash). End markers carry their
/// trailing `*`; a leading `+` is accepted for character styles and
/// cross-reference fields only.
pub fn lookup(name: &str) -> Option<TokenKind> {
    let (nested, base) = match name.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    let kind = match base.strip_suffix('*') {
        Some(start) if !start.is_empty() => end_kind(start)?,
        Some(_) => return None,
        None => start_kind(base)?,
    };
    if !nested {
        return Some(kind);
    }
    match kind {
        TokenKind::CharStart { style, .. } => Some(TokenKind::CharStart { style, nested }),
        TokenKind::CharEnd { style, .. } => Some(TokenKind::CharEnd { style, nested }),
        TokenKind::CrossRefField { field, .. } => Some(TokenKind::CrossRefField { field, nested }),
        TokenKind::CrossRefFieldEnd { field, .. } => {
            Some(TokenKind::CrossRefFieldEnd { field, nested })
        }
        _ => None,
    }
}

/// Milestone markers: `name-s` opens and `name-e` closes a milestone span.
pub fn milestone(name: &str) -> Option<(TokenKind, &str)> {
    if let Some(base) = name.strip_suffix("-s").filter(|b| !b.is_empty()) {
        return Some((TokenKind::MilestoneStart, base));
    }
    if let Some(base) = name.strip_suffix("-e").filter(|b| !b.is_empty()) {
        return Some((TokenKind::MilestoneEnd, base));
    }
    None
}

fn levelled(base: &str, level: Option<u8>) -> String {
    match level {
        Some(n) => format!("{base}{n}"),
        None => base.to_string(),
    }
}

fn plus(nested: bool, name: &str) -> String {
    if nested {
        format!("+{name}")
    } else {
        name.to_string()
    }
}

impl TokenKind {
    /// The marker name as written after the backslash, or `None` for text,
    /// escapes, milestones and unknown markers (whose name lives in the value).
    pub fn marker_name(&self) -> Option<String> {
        use TokenKind::*;
        let name = match *self {
            Id => "id".to_string(),
            Ide => "ide".to_string(),
            Usfm => "usfm".to_string(),
            H => "h".to_string(),
            Toc(level) => levelled("toc", level),
            Rem => "rem".to_string(),
            Sts => "sts".to_string(),
            Mt(level) => levelled("mt", level),
            Mte => "mte".to_string(),
            Ms(level) => levelled("ms", level),
            Mr => "mr".to_string(),
            S(level) => levelled("s", level),
            Sr => "sr".to_string(),
            R => "r".to_string(),
            D => "d".to_string(),
            Sp => "sp".to_string(),
            Cl => "cl".to_string(),
            Periph => "periph".to_string(),
            Imt(level) => levelled("imt", level),
            Is(level) => levelled("is", level),
            Ip => "ip".to_string(),
            Ipi => "ipi".to_string(),
            Im => "im".to_string(),
            Imi => "imi".to_string(),
            Iot => "iot".to_string(),
            Io(level) => levelled("io", level),
            Ie => "ie".to_string(),
            C => "c".to_string(),
            V => "v".to_string(),
            P => "p".to_string(),
            Pc => "pc".to_string(),
            Pi(level) => levelled("pi", level),
            Nb => "nb".to_string(),
            M => "m".to_string(),
            Mi => "mi".to_string(),
            Cls => "cls".to_string(),
            B => "b".to_string(),
            Li(level) => levelled("li", level),
            Q(level) => levelled("q", level),
            Qa => "qa".to_string(),
            Qac => "qac".to_string(),
            Qc => "qc".to_string(),
            Qm(level) => levelled("qm", level),
            Qr => "qr".to_string(),
            FootnoteStart => "f".to_string(),
            FootnoteEnd => "f*".to_string(),
            EndnoteStart => "fe".to_string(),
            EndnoteEnd => "fe*".to_string(),
            NoteField(field) => field.name().to_string(),
            NoteFieldEnd(field) => format!("{}*", field.name()),
            CrossRefStart => "x".to_string(),
            CrossRefEnd => "x*".to_string(),
            CrossRefField { field, nested } => plus(nested, field.name()),
            CrossRefFieldEnd { field, nested } => plus(nested, &format!("{}*", field.name())),
            CharStart { style, nested } => plus(nested, style.name()),
            CharEnd { style, nested } => plus(nested, &format!("{}*", style.name())),
            Tr => "tr".to_string(),
            TableHeader { column, right } => {
                format!("{}{column}", if right { "thr" } else { "th" })
            }
            TableCell { column, right } => {
                format!("{}{column}", if right { "tcr" } else { "tc" })
            }
            MilestoneStart | MilestoneEnd | Milestone | Unknown | Escape | Text => return None,
            MilestoneClose => "*".to_string(),
        };
        Some(name)
    }
}
