//! Books command implementation.

use std::fmt::Write as _;

use clap::Args;

use crate::books::{self, BookInfo};
use crate::error::{Result, UsfmError};
use crate::output::{plural, Printer};

/// Show the book reference table
#[derive(Args, Debug)]
pub struct BooksArgs {
    /// Show chapter verse counts for one book
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,
}

pub fn run(args: BooksArgs, printer: &Printer) -> Result<()> {
    match args.code {
        Some(code) => {
            let upper = code.to_ascii_uppercase();
            let book = books::lookup(&upper).ok_or_else(|| UsfmError::Config {
                message: format!("Unknown book code '{}'", code),
                help: Some("Use a three-letter USFM code such as GEN or 3JN".to_string()),
            })?;
            print!("{}", book_detail(book));
        }
        None => {
            print!("{}", book_table(books::all()));
            printer.info("Listed", &plural(books::all().len(), "book", "books"));
        }
    }
    Ok(())
}

fn book_table(books: &[BookInfo]) -> String {
    let mut out = String::new();
    for book in books {
        let _ = writeln!(
            out,
            "{:>2} {}  {:<16} {:>3} chapters {:>5} verses",
            book.usfm_number,
            book.code,
            book.en_name,
            book.chapter_count(),
            book.total_verses()
        );
    }
    out
}

fn book_detail(book: &BookInfo) -> String {
    let mut out = format!("{} {} ({})\n", book.usfm_number, book.code, book.en_name);
    for chapter in 1..=book.chapter_count() {
        let verses = book.verse_count(chapter).unwrap_or(0);
        let _ = writeln!(out, "{:>4} {:>4}", chapter, verses);
    }
    out
}
