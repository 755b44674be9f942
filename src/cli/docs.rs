//! Documentation content for the notequery CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Filters,
    Escaping,
    Books,
    Urls,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "filters" | "filter" | "keywords" => Some(Self::Filters),
            "escaping" | "escape" | "quoting" => Some(Self::Escaping),
            "books" | "book" | "book_names" => Some(Self::Books),
            "urls" | "url" | "search_str" => Some(Self::Urls),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"NOTEQUERY DOCUMENTATION

Notequery reads the search strings typed into a notes search box. A search is
a list of whitespace-separated terms; terms of the form keyword:value filter
the results, everything else is free text.

DOCUMENTATION CATEGORIES

  syntax            Terms, whitespace and the keyword:value form
  filters           Recognized keywords and repeated filters
  escaping          Keeping filter-looking text literal
  books             Book name rules
  urls              Search strings in page URLs (?q=...&page=...)

QUICK REFERENCE

  rust              Free text term
  book:golang       Filter on the golang book
  book:a book:b     Filter on either book
  "book:x           Literal text (keyword "book is not recognized)

Run 'notequery doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Filters) => Ok(FILTERS_DOC),
        Some(DocCategory::Escaping) => Ok(ESCAPING_DOC),
        Some(DocCategory::Books) => Ok(BOOKS_DOC),
        Some(DocCategory::Urls) => Ok(URLS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Terms and Filters

TERMS
  Any run of characters other than whitespace and ':' is a term. Whitespace
  only separates terms; runs of it count as a single space.

    Query:  "  rust    lifetimes "
    Text:   "rust lifetimes"

KEYWORD:VALUE
  Two terms joined by a single ':' form a filter candidate.

    Query:  book:golang channels
    Filter: book = "golang"
    Text:   "channels"

  Whitespace around the ':' is not significant:

    Query:  book : golang
    Filter: book = "golang"

STRAY COLONS
  A ':' that cannot join a keyword and a value is kept as its own term.

    Query:  a:b:c
    Filter candidate: a:b
    Text:   ": c" (after a:b)
"#;

const FILTERS_DOC: &str = r#"FILTERS - Recognized Keywords

KEYWORDS
  Note search recognizes a single keyword: book.
  A keyword:value pair with any other keyword stays in the text, unchanged.

    Query:  book:rust tag:async
    Filter: book = "rust"
    Text:   "tag:async"

REPEATED FILTERS
  A keyword used once yields a single value. Used again, it yields a list in
  the order written.

    Query:  book:rust book:golang
    Filter: book = ["rust", "golang"]

CANONICAL FORM
  'notequery stringify' writes book filters first, then the free text.

    notequery stringify --q "channels" -b golang -b rust
    book:golang book:rust channels
"#;

const ESCAPING_DOC: &str = r#"ESCAPING - Literal Filter Text

There is no quoting syntax. Text that looks like a filter is kept literal
when its keyword half is not a recognized keyword. A leading quote does this:

    Query:  "book:golang"
    Filter: (none)
    Text:   "\"book:golang\""

The keyword of that term is `"book`, which is not `book`.
"#;

const BOOKS_DOC: &str = r#"BOOKS - Book Name Rules

A book name is rejected when it:
  - consists only of digits           0333
  - contains whitespace               my notes
  - contains a comma                  foo,bar
  - is reserved                       trash, conflicts

    notequery validate-book node.js
    ok

Pass existing books with -e to also reject duplicates:

    notequery validate-book rust -e rust -e golang
"#;

const URLS_DOC: &str = r#"URLS - Search Strings

A search page URL carries the query in q and the page number in page.

    notequery filters '?q=book%3Agolang+channels&page=2'
    {"queries":{"q":"channels","book":["golang"]},"page":2}

A missing or invalid page means page 1. Parameters other than q and page
are ignored.
"#;
