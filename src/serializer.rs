//! Canonical query strings for note searches.
//!
//! Book filters come first, each followed by a space, then the free text:
//!
//! ```
//! use notequery::{Queries, stringify};
//!
//! let queries = Queries {
//!     q: "ownership rules".to_string(),
//!     book: vec!["rust".to_string(), "golang".to_string()],
//! };
//! assert_eq!(stringify(&queries), "book:rust book:golang ownership rules");
//! ```

use crate::{
    ast::Queries,
    interpreter::{BOOK_KEYWORD, NOTE_KEYWORDS, parse},
};

pub fn stringify(queries: &Queries) -> String {
    let mut out = String::new();

    for book in &queries.book {
        out.push_str(BOOK_KEYWORD);
        out.push(':');
        out.push_str(book);
        out.push(' ');
    }

    if !queries.q.is_empty() {
        // Only the text survives, so `book:` terms in q are never emitted as filters.
        match parse(&queries.q, NOTE_KEYWORDS) {
            Ok(result) => out.push_str(&result.text),
            Err(e) => {
                log::warn!("free text did not parse ({}), appending as is", e);
                out.push_str(&queries.q);
            }
        }
    }

    out
}
