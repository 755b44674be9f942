//! Validate book names

use crate::{Book, check_duplicate, validate_book_name};
use super::CliError;

/// Options for the validate-book command
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Name to check
    pub name: String,
    /// Labels of books that already exist
    pub existing: Vec<String>,
}

pub fn execute_validate_book(options: &ValidateOptions) -> Result<(), CliError> {
    validate_book_name(&options.name)?;

    let books: Vec<Book> = options.existing.iter().map(Book::new).collect();
    if check_duplicate(&books, &options.name) {
        return Err(CliError::DuplicateBook(options.name.clone()));
    }

    Ok(())
}
