//! # Note Search Language - Syntax Types
//!
//! This module defines the types that flow through the note search language,
//! the small query syntax typed into a notes search box.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[nodes]** - Syntax nodes produced by the parser (text or filter)
//! - **[query]** - Resolved results: free text, filter values, structured queries
//!
//! ## Quick Start
//!
//! ```text
//! book:golang rust "book:notes"
//! ```
//!
//! This searches the `golang` book for the terms `rust` and `"book:notes"`.
//!
//! ## Core Concepts
//!
//! ### Terms
//!
//! A query is a whitespace-separated list of terms. A term of the form
//! `keyword:value` is a filter candidate; anything else is free text.
//!
//! ### Keywords
//!
//! Whether `keyword:value` is honoured as a filter is decided when the query
//! is interpreted against a keyword set. Notes recognize only `book`. A filter
//! with an unknown keyword is kept as text, unchanged.
//!
//! ### Escaping
//!
//! There is no quoting syntax. Text that looks like a filter is kept literal by
//! making its keyword half unrecognizable, usually with a leading quote:
//!
//! ```text
//! "book:golang"
//! ```
//!
//! ### Repeated Filters
//!
//! A keyword used once yields a single value; used again, a list of values in
//! the order written:
//!
//! ```text
//! book:golang book:rust   // book = ["golang", "rust"]
//! ```
pub mod nodes;
pub mod query;
pub mod tokens;

pub use nodes::SyntaxNode;
pub use query::{FilterValue, Filters, ParseResult, Queries};
pub use tokens::{Span, Spanned, Token};
