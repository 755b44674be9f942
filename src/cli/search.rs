//! Parse, tokenize and serialize search strings

use crate::{
    Filters, Queries, get_filters_from_search_str, parse, stringify, tokenize,
    interpreter::NOTE_KEYWORDS,
    output::{filters_to_json, result_to_json},
};
use super::CliError;

/// Options for the parse command
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// The search string
    pub query: String,
    /// Recognized keywords; note keywords when empty
    pub keywords: Vec<String>,
}

/// Options for the stringify command
#[derive(Debug, Clone, Default)]
pub struct StringifyOptions {
    /// Free text
    pub q: String,
    /// Book filters, in order
    pub books: Vec<String>,
}

/// Parse a search string into `{text, filters}`
pub fn execute_parse(options: &ParseOptions) -> Result<serde_json::Value, CliError> {
    let keywords: Vec<&str> = if options.keywords.is_empty() {
        NOTE_KEYWORDS.to_vec()
    } else {
        options.keywords.iter().map(String::as_str).collect()
    };

    let result = parse(&options.query, &keywords)?;
    Ok(result_to_json(&result))
}

/// One line per token, ending with `EOF`
pub fn execute_tokens(query: &str) -> Vec<String> {
    tokenize(query).iter().map(ToString::to_string).collect()
}

/// Canonical search string for free text plus book filters
pub fn execute_stringify(options: &StringifyOptions) -> String {
    let queries = Queries {
        q: options.q.clone(),
        book: options.books.clone(),
    };
    stringify(&queries).trim_end().to_string()
}

/// Read `{queries, page}` from a URL search string
pub fn execute_filters(search: &str) -> serde_json::Value {
    let filters: Filters = get_filters_from_search_str(search);
    filters_to_json(&filters)
}
