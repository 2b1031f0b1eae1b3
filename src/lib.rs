//! usfm-verify - USFM tokenizer and structure checker
//!
//! A library for tokenizing USFM scripture documents and verifying their
//! chapter, verse, and header structure against a book reference table.

pub mod books;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod lexer;
pub mod output;
pub mod render;
pub mod report;
pub mod verify;

pub use books::BookInfo;
pub use discovery::{discover, discover_paths, DiscoveryResult, ProjectConfig, ScanResult};
pub use error::{Result, TokenizeError, UsfmError};
pub use lexer::{tokenize, Family, Token, TokenKind, TokenStream};
pub use render::{walk, write_usfm, MarkerInventory, TokenVisitor, UsfmWriter};
pub use report::{
    BatchReporter, Diagnostic, Locator, Reference, Reporter, Severity, StreamReporter, Summary,
};
pub use verify::{verify_contents, SharedIds, UsfmVersion, Verifier, VerifyOptions};
