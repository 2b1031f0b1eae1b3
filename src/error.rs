use miette::Diagnostic;
use thiserror::Error;

/// Fatal tokenizer failure: some input matched no grammar alternative.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("No USFM grammar rule matches input at {line}:{column}: '{excerpt}'")]
    #[diagnostic(
        code(usfm::tokenize),
        help("The marker grammar does not cover this input; the document cannot be tokenized")
    )]
    Unmatched {
        line: u32,
        column: u32,
        excerpt: String,
    },
}

/// Main error type for usfm-verify operations
#[derive(Error, Diagnostic, Debug)]
pub enum UsfmError {
    #[error("IO error: {0}")]
    #[diagnostic(code(usfm::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(usfm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Tokenize error in {file}: {source}")]
    #[diagnostic(code(usfm::tokenize))]
    Tokenize {
        file: String,
        #[source]
        source: TokenizeError,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(usfm::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, UsfmError>;
