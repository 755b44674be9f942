//! JSON rendering of parsed searches.
//!
//! A [`ParseResult`] becomes `{"text": ..., "filters": {...}}` where each
//! filter is a string when its keyword appeared once and an array when it
//! appeared more than once. Filter keys keep the order they were first seen.
//!
//! # Examples
//!
//! ```
//! use notequery::parse;
//! use notequery::output::to_json;
//!
//! let result = parse("book:rust book:go lifetimes", &["book"]).unwrap();
//! assert_eq!(
//!     to_json(&result),
//!     r#"{"text":"lifetimes","filters":{"book":["rust","go"]}}"#
//! );
//! ```

use serde_json::{Map, Value, json};

use crate::ast::{FilterValue, Filters, ParseResult};

pub fn filter_value_to_json(value: &FilterValue) -> Value {
    match value {
        FilterValue::Scalar(v) => Value::String(v.clone()),
        FilterValue::Multi(vs) => Value::Array(vs.iter().cloned().map(Value::String).collect()),
    }
}

pub fn result_to_json(result: &ParseResult) -> Value {
    let filters: Map<String, Value> = result
        .filters
        .iter()
        .map(|(k, v)| (k.clone(), filter_value_to_json(v)))
        .collect();

    json!({
        "text": result.text,
        "filters": filters,
    })
}

pub fn filters_to_json(filters: &Filters) -> Value {
    json!({
        "queries": {
            "q": filters.queries.q,
            "book": filters.queries.book,
        },
        "page": filters.page,
    })
}

/// Compact JSON
pub fn to_json(result: &ParseResult) -> String {
    result_to_json(result).to_string()
}

/// JSON with 2-space indentation
pub fn to_json_pretty(result: &ParseResult) -> String {
    format!("{:#}", result_to_json(result))
}
