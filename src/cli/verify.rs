//! Verify command implementation.
//!
//! Discovers USFM files, verifies each book, and streams diagnostics to
//! stderr and the project's issues log.

use std::path::{Path, PathBuf};

use clap::Args;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::discovery::{discover_paths, load_config, scan_sources, ProjectConfig};
use crate::error::{Result, UsfmError};
use crate::output::{display_path, plural, Printer};
use crate::report::{codes, BatchReporter, Diagnostic, Reporter, StreamReporter, Summary};
use crate::verify::{SharedIds, UsfmVersion, Verifier, VerifyOptions};

/// Verify chapter and verse structure of USFM files
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Files or directories to verify (defaults to the config sources or the current directory)
    pub paths: Vec<PathBuf>,

    /// Language code of the translation; enables the untranslated-header check
    #[arg(long = "lang", value_name = "CODE")]
    pub language_code: Option<String>,

    /// Treat documents as USFM 3 (no empty-verse or unknown-marker reports)
    #[arg(long)]
    pub usfm3: bool,

    /// Do not report verses without text
    #[arg(long)]
    pub suppress_empty_verses: bool,

    /// Warn when \mt is plain ASCII
    #[arg(long)]
    pub warn_ascii_titles: bool,

    /// Skip the raw \c and \v spacing checks
    #[arg(long)]
    pub skip_marker_checks: bool,

    /// Do not write issues.txt
    #[arg(long)]
    pub no_issues_file: bool,

    /// Number of files to verify in parallel
    #[arg(long, short, default_value_t = 1)]
    pub jobs: usize,

    /// Only print the summary
    #[arg(long, short)]
    pub quiet: bool,

    /// Config file to use instead of usfm-verify.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// What a verify run found.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub summary: Summary,
    pub issues_path: Option<PathBuf>,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<VerifyOutcome> {
    let base = base_dir(&args.paths);
    let config = match &args.config {
        Some(path) => ProjectConfig::load(path)?,
        None => load_config(&base)?.unwrap_or_default(),
    };
    let options = options_from(&args, &config);
    let write_issues = config.issues_file && !args.no_issues_file;

    let (root, files) = if args.paths.is_empty() {
        let scan = scan_sources(&config.effective_sources(), &base, &config);
        (base, scan.files)
    } else {
        let found = discover_paths(&args.paths, config)?;
        (found.root, found.scan.files)
    };

    if files.is_empty() {
        printer.warning("Warning", &format!("no USFM files found in {}", display_path(&root)));
        return Ok(VerifyOutcome {
            summary: Summary::new(),
            issues_path: None,
        });
    }

    let mut reporter = if args.quiet {
        StreamReporter::new()
    } else {
        StreamReporter::stderr()
    };
    if write_issues {
        reporter = reporter.with_issues_file(&root)?;
    }
    let issues_path = reporter.issues_path().map(Path::to_path_buf);

    printer.status(
        "Verifying",
        &format!("{} in {}", plural(files.len(), "file", "files"), display_path(&root)),
    );

    let summary = if args.jobs > 1 {
        verify_parallel(&files, &options, args.jobs, &mut reporter)?
    } else {
        verify_sequential(&files, &options, &mut reporter)
    };

    let message = format!(
        "{}, {} with issues",
        plural(summary.files, "file", "files"),
        summary.files_with_issues
    );
    if summary.has_errors() {
        printer.error("Checked", &message);
    } else if !summary.is_clean() {
        printer.warning("Checked", &message);
    } else {
        printer.success("Checked", &message);
    }
    if let Some(path) = &issues_path {
        printer.info("Wrote", &display_path(path));
    }

    Ok(VerifyOutcome {
        summary,
        issues_path,
    })
}

/// Directory holding the config and issues log.
fn base_dir(paths: &[PathBuf]) -> PathBuf {
    match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from("."),
    }
}

fn options_from(args: &VerifyArgs, config: &ProjectConfig) -> VerifyOptions {
    let mut options = config.verify_options();
    if let Some(code) = &args.language_code {
        options.language_code = Some(code.clone());
    }
    if args.usfm3 {
        options.usfm_version = UsfmVersion::V3;
    }
    options.suppress_empty_verses |= args.suppress_empty_verses;
    options.warn_ascii_titles |= args.warn_ascii_titles;
    options.skip_marker_checks |= args.skip_marker_checks;
    options
}

/// Verify one file, turning read and tokenizer failures into diagnostics
/// against the file.
pub fn check_file(verifier: &mut Verifier, path: &Path, out: &mut dyn Reporter) {
    let Err(err) = verifier.verify_file(path, out) else {
        return;
    };
    warn!(file = %path.display(), error = %err, "could not verify file");

    let name = display_path(path);
    let diagnostic = match err {
        UsfmError::Tokenize { source, .. } => Diagnostic::error(codes::FILE_TOKENIZE, source.to_string()),
        other => Diagnostic::error(codes::FILE_IO, other.to_string()),
    };
    out.report(diagnostic.in_file(name));
}

/// Forwards to the stream while keeping a copy for the summary.
struct Tee<'a> {
    stream: &'a mut StreamReporter,
    seen: Vec<Diagnostic>,
}

impl Reporter for Tee<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.seen.push(diagnostic.clone());
        self.stream.report(diagnostic);
    }
}

fn verify_sequential(
    files: &[PathBuf],
    options: &VerifyOptions,
    reporter: &mut StreamReporter,
) -> Summary {
    let mut summary = Summary::new();
    let mut verifier = Verifier::new(options.clone());

    for path in files {
        let mut tee = Tee {
            stream: &mut *reporter,
            seen: Vec::new(),
        };
        check_file(&mut verifier, path, &mut tee);
        info!(file = %path.display(), diagnostics = tee.seen.len(), "verified");
        summary.record(&tee.seen);
    }

    summary
}

fn verify_parallel(
    files: &[PathBuf],
    options: &VerifyOptions,
    jobs: usize,
    reporter: &mut StreamReporter,
) -> Result<Summary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| UsfmError::Config {
            message: format!("Failed to start {jobs} worker threads: {e}"),
            help: Some("Try a smaller --jobs value".to_string()),
        })?;

    let ids = SharedIds::new();
    let per_file: Vec<Vec<Diagnostic>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let mut verifier = Verifier::with_shared_ids(options.clone(), ids.clone());
                let mut batch = BatchReporter::new();
                check_file(&mut verifier, path, &mut batch);
                batch.into_diagnostics()
            })
            .collect()
    });

    let mut summary = Summary::new();
    for diagnostics in per_file {
        summary.record(&diagnostics);
        for diagnostic in diagnostics {
            reporter.report(diagnostic);
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const GOOD_2JN: &str = "\\id 2JN\n\\ide UTF-8\n\\h 2 John\n\\toc1 Second John\n\\toc2 2 John\n\\toc3 2jn\n\\mt 2 John\n\\c 1\n\\p\n\\v 1 a\n\\v 2 b\n\\v 3 c\n\\v 4 d\n\\v 5 e\n\\v 6 f\n\\v 7 g\n\\v 8 h\n\\v 9 i\n\\v 10 j\n\\v 11 k\n\\v 12 l\n\\v 13 m\n";

    fn args(paths: Vec<PathBuf>) -> VerifyArgs {
        VerifyArgs {
            paths,
            language_code: None,
            usfm3: false,
            suppress_empty_verses: false,
            warn_ascii_titles: false,
            skip_marker_checks: false,
            no_issues_file: false,
            jobs: 1,
            quiet: true,
            config: None,
        }
    }

    #[test]
    fn test_clean_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("63-2JN.usfm"), GOOD_2JN).unwrap();

        let outcome = run(args(vec![dir.path().to_path_buf()]), &Printer::new()).unwrap();

        assert_eq!(outcome.summary.files, 1);
        assert!(outcome.summary.is_clean());
        let issues = outcome.issues_path.unwrap();
        assert_eq!(fs::read_to_string(issues).unwrap(), "");
    }

    #[test]
    fn test_errors_reach_issues_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("63-2JN.usfm"), GOOD_2JN.replace("\\v 5 e\n", "")).unwrap();

        let outcome = run(args(vec![dir.path().to_path_buf()]), &Printer::new()).unwrap();

        assert!(outcome.summary.has_errors());
        assert_eq!(outcome.summary.files_with_issues, 1);
        let issues = fs::read_to_string(outcome.issues_path.unwrap()).unwrap();
        assert_eq!(issues, "2JN 1:4 - Missing verse between this and: 2JN 1:6\n");
    }

    #[test]
    fn test_duplicate_books_parallel() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("63-2JN.usfm"), GOOD_2JN).unwrap();
        fs::write(dir.path().join("copy-2JN.usfm"), GOOD_2JN).unwrap();

        let mut verify = args(vec![dir.path().to_path_buf()]);
        verify.jobs = 2;
        verify.no_issues_file = true;
        let outcome = run(verify, &Printer::new()).unwrap();

        assert_eq!(outcome.summary.files, 2);
        assert_eq!(outcome.summary.errors, 1);
        assert!(outcome.issues_path.is_none());
    }

    #[test]
    fn test_skip_marker_checks_flag() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("63-2JN.usfm"), GOOD_2JN.replace("e\n\\v 6", "e\\v 6")).unwrap();

        let mut verify = args(vec![dir.path().to_path_buf()]);
        verify.no_issues_file = true;
        let outcome = run(verify, &Printer::new()).unwrap();
        assert_eq!(outcome.summary.errors, 1);

        let mut verify = args(vec![dir.path().to_path_buf()]);
        verify.no_issues_file = true;
        verify.skip_marker_checks = true;
        let outcome = run(verify, &Printer::new()).unwrap();
        assert!(outcome.summary.is_clean());
    }

    #[test]
    fn test_config_disables_issues_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("usfm-verify.yaml"), "issues_file: false\n").unwrap();
        fs::write(dir.path().join("63-2JN.usfm"), GOOD_2JN).unwrap();

        let outcome = run(args(vec![dir.path().to_path_buf()]), &Printer::new()).unwrap();

        assert!(outcome.issues_path.is_none());
        assert!(!dir.path().join("issues.txt").exists());
    }

    #[test]
    fn test_unreadable_file_becomes_diagnostic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("41-MAT.usfm");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let mut verifier = Verifier::new(VerifyOptions::default());
        let mut batch = BatchReporter::new();
        check_file(&mut verifier, &path, &mut batch);

        let found = batch.into_diagnostics();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, codes::FILE_IO);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let outcome = run(args(vec![dir.path().to_path_buf()]), &Printer::new()).unwrap();
        assert_eq!(outcome.summary.files, 0);
        assert!(outcome.issues_path.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let config = ProjectConfig {
            language_code: Some("fr".into()),
            ..Default::default()
        };
        let mut verify = args(vec![]);
        verify.language_code = Some("sw".into());
        verify.usfm3 = true;

        let options = options_from(&verify, &config);
        assert_eq!(options.language_code.as_deref(), Some("sw"));
        assert_eq!(options.usfm_version, UsfmVersion::V3);
    }
}
