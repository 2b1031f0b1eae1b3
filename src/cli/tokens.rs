//! Tokens command implementation.
//!
//! Prints the token sequence of one file, re-serialized USFM, or a marker
//! census. Output goes to stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::{Result, UsfmError};
use crate::lexer::{tokenize, TokenKind, TokenStream};
use crate::output::{display_path, plural, Printer};
use crate::render::{walk, write_usfm, MarkerInventory};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenFormat {
    /// One token per line with its location
    #[default]
    Debug,
    /// JSON array of tokens
    Json,
    /// Canonical USFM
    Usfm,
    /// Marker counts per family and unknown markers
    Summary,
}

/// Dump the tokens of a USFM file
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// USFM file to tokenize
    pub file: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = TokenFormat::Debug)]
    pub format: TokenFormat,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: String,
    family: String,
    value: Option<&'a str>,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

pub fn run(args: TokensArgs, printer: &Printer) -> Result<()> {
    let source = fs::read_to_string(&args.file).map_err(|e| UsfmError::Io {
        path: args.file.clone(),
        message: format!("Failed to read USFM file: {}", e),
    })?;
    let stream = tokenize(source.strip_prefix('\u{feff}').unwrap_or(&source)).map_err(|source| {
        UsfmError::Tokenize {
            file: display_path(&args.file),
            source,
        }
    })?;

    print!("{}", render(&stream, args.format)?);
    printer.info(
        "Tokenized",
        &format!("{} into {}", display_path(&args.file), plural(stream.len(), "token", "tokens")),
    );
    Ok(())
}

/// Render a token stream in the requested format.
pub fn render(stream: &TokenStream, format: TokenFormat) -> Result<String> {
    match format {
        TokenFormat::Debug => Ok(debug_lines(stream)),
        TokenFormat::Usfm => Ok(write_usfm(stream)),
        TokenFormat::Json => {
            let tokens: Vec<JsonToken> = stream
                .iter()
                .map(|token| {
                    let location = stream.location(token);
                    JsonToken {
                        kind: token.kind.to_string(),
                        family: token.kind.family().to_string(),
                        value: token.value.as_deref(),
                        start: token.span.start,
                        end: token.span.end,
                        line: location.line,
                        column: location.column,
                    }
                })
                .collect();
            to_json(&tokens)
        }
        TokenFormat::Summary => {
            let mut inventory = MarkerInventory::new();
            walk(stream, &mut inventory);
            to_json(&inventory)
        }
    }
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| UsfmError::Config {
            message: format!("Failed to serialize tokens: {}", e),
            help: None,
        })
}

fn debug_lines(stream: &TokenStream) -> String {
    let mut out = String::new();
    for token in stream {
        let location = stream.location(token);
        let _ = write!(
            out,
            "{:>8}  {:<16} ",
            location.to_string(),
            token.kind.family().to_string()
        );
        match token.kind {
            TokenKind::Text => {
                let _ = writeln!(out, "{:?}", token.value());
            }
            _ => match &token.value {
                Some(value) => {
                    let _ = writeln!(out, "{} {:?}", token.describe(), value);
                }
                None => {
                    let _ = writeln!(out, "{}", token.describe());
                }
            },
        }
    }
    out
}
