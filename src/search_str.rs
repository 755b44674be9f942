//! Reading and writing note searches in URL search strings.
//!
//! A search page URL carries the query in `q` and the page number in `page`:
//!
//! ```text
//! ?q=book%3Agolang+channels&page=2
//! ```

use crate::{
    ast::{Filters, Queries},
    interpreter::{BOOK_KEYWORD, NOTE_KEYWORDS, parse},
    serializer::stringify,
};

/// Read `{queries, page}` from a search string such as `?q=...&page=2`.
///
/// Missing or malformed parameters fall back to an empty query and page 1.
pub fn get_filters_from_search_str(search: &str) -> Filters {
    let mut filters = Filters::default();
    let mut seen_q = false;
    let mut seen_page = false;

    for (key, value) in decode_pairs(search) {
        match key.as_str() {
            "q" if !seen_q => {
                seen_q = true;
                filters.queries = queries_from_text(&value);
            }
            "page" if !seen_page => {
                seen_page = true;
                match value.parse::<u32>() {
                    Ok(page) if page >= 1 => filters.page = page,
                    _ => log::debug!("ignoring invalid page {:?}", value),
                }
            }
            _ => {}
        }
    }

    filters
}

fn queries_from_text(text: &str) -> Queries {
    match parse(text, NOTE_KEYWORDS) {
        Ok(mut result) => Queries {
            book: result
                .filters
                .shift_remove(BOOK_KEYWORD)
                .map(|books| books.into_vec())
                .unwrap_or_default(),
            q: result.text,
        },
        Err(e) => {
            log::warn!("search text did not parse ({}), using it as free text", e);
            Queries {
                q: text.to_string(),
                book: Vec::new(),
            }
        }
    }
}

impl Filters {
    /// Encode as a search string, omitting defaults.
    ///
    /// Returns an empty string when there is nothing to encode.
    pub fn to_search_str(&self) -> String {
        let mut params = Vec::new();

        let q = stringify(&self.queries);
        let q = q.trim_end();
        if !q.is_empty() {
            params.push(format!("q={}", encode_component(q)));
        }
        if self.page != 1 {
            params.push(format!("page={}", self.page));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

fn decode_pairs(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);

    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Form-decode one component: `+` is a space, `%XX` a byte.
///
/// Malformed escapes are kept as written.
pub fn decode_component(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (bytes.get(i + 1).and_then(hex_value), bytes.get(i + 2).and_then(hex_value)) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Form-encode one component
pub fn encode_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());

    for b in component.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }

    out
}

fn hex_value(b: &u8) -> Option<u8> {
    (*b as char).to_digit(16).map(|d| d as u8)
}
