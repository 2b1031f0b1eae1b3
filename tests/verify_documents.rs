//! End-to-end verification of the fixture books under `tests/fixtures`.

use std::fs;
use std::path::PathBuf;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use usfm_verify::report::BatchReporter;
use usfm_verify::{
    tokenize, verify_contents, write_usfm, Diagnostic, Severity, SharedIds, Verifier,
    VerifyOptions,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

fn verify_fixture(name: &str, options: VerifyOptions) -> Vec<Diagnostic> {
    let mut verifier = Verifier::new(options);
    let mut batch = BatchReporter::new();
    verifier
        .verify_file(&fixture_path(name), &mut batch)
        .unwrap();
    batch.into_diagnostics()
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_clean_book_has_no_diagnostics() {
    let diagnostics = verify_fixture("64-2JN.usfm", VerifyOptions::default());
    assert_eq!(render(&diagnostics), "");
}

#[test]
fn test_usfm3_book_with_milestones_is_clean() {
    let diagnostics = verify_fixture("65-3JN.usfm", VerifyOptions::default());
    assert_eq!(render(&diagnostics), "");
}

#[test]
fn test_unknown_marker_reported_without_usfm3_declaration() {
    let source = load_fixture("65-3JN.usfm").replace("\\usfm 3.0\n", "");
    let diagnostics =
        verify_contents(&source, "65-3JN.usfm", Some("3JN"), VerifyOptions::default()).unwrap();
    assert_snapshot!(render(&diagnostics), @r###"3JN 1:3 - Unknown USFM token: '\zcustom'"###);
}

#[test]
fn test_problem_book_report() {
    let diagnostics = verify_fixture("08-RUT.usfm", VerifyOptions::default());
    assert_snapshot!(render(&diagnostics), @r###"
    RUT 1:2 - Missing verse between this and: RUT 1:4
    RUT 1:7 - Empty verse
    RUT 2 - Missing verse marker or extra text nearby
    RUT 2:5 - Duplicated verse
    RUT - \h 'RUTH' shouldn't be UPPERCASE
    RUT - Missing \toc3 tag
    RUT 3 - Missing chapter
    RUT 4 - Missing chapter
    "###);
}

#[test]
fn test_problem_book_severities() {
    let diagnostics = verify_fixture("08-RUT.usfm", VerifyOptions::default());
    let warnings: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.code)
        .collect();
    assert_eq!(warnings, vec!["usfm::header::uppercase"]);
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count(),
        7
    );
}

#[test]
fn test_orphan_text_help_names_previous_marker() {
    let diagnostics = verify_fixture("08-RUT.usfm", VerifyOptions::default());
    let orphan = diagnostics
        .iter()
        .find(|d| d.code == "usfm::text::orphan")
        .unwrap();
    assert_eq!(orphan.help.as_deref(), Some("Preceding token was '\\c'"));
}

#[test]
fn test_suppressing_empty_verses() {
    let options = VerifyOptions {
        suppress_empty_verses: true,
        ..VerifyOptions::default()
    };
    let diagnostics = verify_fixture("08-RUT.usfm", options);
    assert!(diagnostics.iter().all(|d| d.message != "Empty verse"));
    assert_eq!(diagnostics.len(), 7);
}

#[test]
fn test_verification_is_repeatable() {
    let source = load_fixture("08-RUT.usfm");
    let first = verify_contents(&source, "08-RUT.usfm", Some("RUT"), VerifyOptions::default())
        .unwrap();
    let second = verify_contents(&source, "08-RUT.usfm", Some("RUT"), VerifyOptions::default())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reset_verifier_matches_fresh_verifier() {
    let source = load_fixture("08-RUT.usfm");
    let mut verifier = Verifier::new(VerifyOptions::default());

    let mut first = BatchReporter::new();
    verifier
        .verify_str(&source, "08-RUT.usfm", Some("RUT"), &mut first)
        .unwrap();
    verifier.reset();
    let mut second = BatchReporter::new();
    verifier
        .verify_str(&source, "08-RUT.usfm", Some("RUT"), &mut second)
        .unwrap();

    assert_eq!(first.lines(), second.lines());
}

#[test]
fn test_shared_ids_flag_second_copy() {
    let source = load_fixture("64-2JN.usfm");
    let ids = SharedIds::new();
    let mut first = Verifier::with_shared_ids(VerifyOptions::default(), ids.clone());
    let mut second = Verifier::with_shared_ids(VerifyOptions::default(), ids);

    let mut a = BatchReporter::new();
    first
        .verify_str(&source, "64-2JN.usfm", Some("2JN"), &mut a)
        .unwrap();
    let mut b = BatchReporter::new();
    second
        .verify_str(&source, "64-2JN-copy.usfm", Some("2JN"), &mut b)
        .unwrap();

    assert!(a.is_empty());
    assert_eq!(
        b.lines(),
        vec!["2JN - Duplicate ID: '2JN EN_ULB en_English_ltr Unlocked Literal Bible'".to_string()]
    );
}

#[test]
fn test_independent_verifiers_do_not_share_ids() {
    let source = load_fixture("64-2JN.usfm");
    for _ in 0..2 {
        let diagnostics =
            verify_contents(&source, "64-2JN.usfm", Some("2JN"), VerifyOptions::default())
                .unwrap();
        assert!(diagnostics.is_empty());
    }
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let source = format!("\u{feff}{}", load_fixture("64-2JN.usfm"));
    let diagnostics =
        verify_contents(&source, "64-2JN.usfm", Some("2JN"), VerifyOptions::default()).unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_canonical_usfm_verifies_the_same() {
    for (name, code) in [("64-2JN.usfm", "2JN"), ("08-RUT.usfm", "RUT"), ("65-3JN.usfm", "3JN")] {
        let source = load_fixture(name);
        let canonical = write_usfm(&tokenize(&source).unwrap());
        let before = verify_contents(&source, name, Some(code), VerifyOptions::default()).unwrap();
        let after =
            verify_contents(&canonical, name, Some(code), VerifyOptions::default()).unwrap();
        assert_eq!(render(&before), render(&after), "{name}");
    }
}

#[test]
fn test_fixture_tokens_tile_source() {
    for name in ["64-2JN.usfm", "08-RUT.usfm", "65-3JN.usfm"] {
        let source = load_fixture(name);
        let stream = tokenize(&source).unwrap();
        let mut end = 0;
        for token in &stream {
            assert!(token.span.start >= end, "{name}: overlapping tokens");
            end = token.span.end;
        }
        assert!(end <= stream.source().len());
    }
}
