//! CLI support for notequery
//!
//! Provides programmatic access to the notequery commands so other tools can
//! embed them without going through the binary.

mod books;
mod docs;
mod search;

pub use books::{execute_validate_book, ValidateOptions};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use search::{
    execute_filters, execute_parse, execute_stringify, execute_tokens, ParseOptions,
    StringifyOptions,
};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Token sequence error
    Parse(crate::ParseError),
    /// Rejected book name
    BookName(crate::BookNameError),
    /// Book name already in use
    DuplicateBook(String),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::BookName(e) => write!(f, "Invalid book name: {}", e),
            CliError::DuplicateBook(name) => write!(f, "Book '{}' already exists", name),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Pass a query or pipe it to stdin."),
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'notequery docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::BookName(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::BookNameError> for CliError {
    fn from(e: crate::BookNameError) -> Self {
        CliError::BookName(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
