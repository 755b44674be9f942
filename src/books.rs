//! Book name rules.
//!
//! Book names end up as `book:<name>` filter values, so they may not contain
//! whitespace, and names that would read as something else are rejected.

use std::sync::LazyLock;

use regex::Regex;

/// Names used by the application for its own collections
pub const RESERVED_BOOK_NAMES: &[&str] = &["trash", "conflicts"];

static NUMERIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("numeric name pattern is valid"));

/// Reasons a book name is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookNameError {
    /// The name consists only of digits
    NumericName,
    /// The name contains whitespace
    HasSpace,
    /// The name contains a comma
    HasComma,
    /// The name is reserved
    Reserved(String),
}

impl std::fmt::Display for BookNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookNameError::NumericName => write!(f, "The book name cannot be a number"),
            BookNameError::HasSpace => write!(f, "The book name cannot contain spaces"),
            BookNameError::HasComma => write!(f, "The book name cannot contain commas"),
            BookNameError::Reserved(name) => write!(f, "'{}' is a reserved book name", name),
        }
    }
}

impl std::error::Error for BookNameError {}

/// A book as listed by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub label: String,
}

impl Book {
    pub fn new(label: impl Into<String>) -> Self {
        Book {
            label: label.into(),
        }
    }
}

pub fn validate_book_name(name: &str) -> Result<(), BookNameError> {
    if NUMERIC_NAME.is_match(name) {
        return Err(BookNameError::NumericName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(BookNameError::HasSpace);
    }
    if name.contains(',') {
        return Err(BookNameError::HasComma);
    }
    if RESERVED_BOOK_NAMES.contains(&name) {
        return Err(BookNameError::Reserved(name.to_string()));
    }
    Ok(())
}

/// Whether a book labelled `name` already exists
pub fn check_duplicate(books: &[Book], name: &str) -> bool {
    books.iter().any(|book| book.label == name)
}
