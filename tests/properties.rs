//! Property tests for the tokenizer and verifier.

use proptest::prelude::*;
use usfm_verify::lexer::normalize;
use usfm_verify::{tokenize, verify_contents, TokenKind, VerifyOptions};

const HEADER: &str = "\\id MRK\n\\ide UTF-8\n\\h Mark\n\\toc1 Mark\n\\toc2 Mark\n\\toc3 mrk\n\\mt Mark\n\\c 1\n\\p\n";

fn usfm_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\\v ".to_string()),
            Just("\\c ".to_string()),
            Just("\\p".to_string()),
            Just("\\f + ".to_string()),
            Just("\\f*".to_string()),
            Just("\\zaln-s |x=\"1\"\\*".to_string()),
            Just("\\zaln-e\\*".to_string()),
            Just("\\".to_string()),
            Just("\n".to_string()),
            "[a-z0-9 *+|-]{1,6}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn rebuilt(source: &str) -> String {
    let stream = tokenize(source).unwrap();
    stream.iter().map(|t| stream.raw(t)).collect()
}

fn expected_tiling(source: &str) -> String {
    let normalized = normalize(source);
    if normalized.trim_matches([' ', '\t', '\r', '\n']).is_empty() {
        String::new()
    } else {
        normalized
    }
}

proptest! {
    #[test]
    fn test_spans_rebuild_usfm_like_input(source in usfm_like()) {
        prop_assert_eq!(rebuilt(&source), expected_tiling(&source));
    }

    #[test]
    fn test_spans_rebuild_arbitrary_input(source in any::<String>()) {
        prop_assert_eq!(rebuilt(&source), expected_tiling(&source));
    }

    #[test]
    fn test_whitespace_only_yields_no_tokens(source in "[ \t\r\n\u{a0}]{0,20}") {
        prop_assert!(tokenize(&source).unwrap().is_empty());
    }

    #[test]
    fn test_tokens_are_ordered_and_disjoint(source in usfm_like()) {
        let stream = tokenize(&source).unwrap();
        let mut end = 0;
        for token in &stream {
            prop_assert!(token.span.start >= end);
            prop_assert!(token.span.end > token.span.start);
            end = token.span.end;
        }
        prop_assert!(end <= stream.source().len());
    }

    #[test]
    fn test_tokenizer_accepts_arbitrary_text(source in any::<String>()) {
        prop_assert!(tokenize(&source).is_ok());
    }

    #[test]
    fn test_verifier_never_fails_on_content(source in usfm_like()) {
        let result = verify_contents(&source, "41-MRK.usfm", Some("MRK"), VerifyOptions::default());
        prop_assert!(result.is_ok());
    }

    #[test]
    fn test_unregistered_markers_are_kept_by_name(name in "z[a-z]{1,6}") {
        let source = format!("\\p \\{name} text");
        let stream = tokenize(&source).unwrap();
        let unknown: Vec<_> = stream
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .map(|t| t.value().to_string())
            .collect();
        prop_assert_eq!(unknown, vec![name]);
    }

    #[test]
    fn test_verse_ranges_fill_gaps(first in 2u32..30, width in 1u32..5) {
        let last = first + width;
        let mut source = HEADER.to_string();
        for verse in 1..first {
            source.push_str(&format!("\\v {verse} text\n"));
        }
        source.push_str(&format!("\\v {first}-{last} text\n"));
        source.push_str(&format!("\\v {} text\n", last + 1));

        let diagnostics =
            verify_contents(&source, "41-MRK.usfm", Some("MRK"), VerifyOptions::default()).unwrap();
        prop_assert!(diagnostics.iter().all(|d| d.code != "usfm::verse::missing"));
        prop_assert!(diagnostics.iter().all(|d| d.code != "usfm::verse::duplicate"));
    }

    #[test]
    fn test_single_gap_is_reported_once(verse in 2u32..40) {
        let mut source = HEADER.to_string();
        for v in (1..=45).filter(|v| *v != verse) {
            source.push_str(&format!("\\v {v} text\n"));
        }
        let diagnostics =
            verify_contents(&source, "41-MRK.usfm", Some("MRK"), VerifyOptions::default()).unwrap();
        let missing: Vec<String> = diagnostics
            .iter()
            .filter(|d| d.code == "usfm::verse::missing")
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(
            missing,
            vec![format!(
                "MRK 1:{} - Missing verse between this and: MRK 1:{}",
                verse - 1,
                verse + 1
            )]
        );
    }
}
