pub mod books;
pub mod completions;
pub mod tokens;
pub mod verify;

use clap::{ArgAction, Parser, Subcommand};

/// usfm-verify - USFM tokenizer and structure checker
#[derive(Parser, Debug)]
#[command(name = "usfm-verify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify chapter and verse structure of USFM files
    Verify(verify::VerifyArgs),

    /// Dump the tokens of a USFM file
    Tokens(tokens::TokensArgs),

    /// Show the book reference table
    Books(books::BooksArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
