// tests/interpreter_tests.rs

use notequery::ast::{FilterValue, SyntaxNode};
use notequery::interpreter::{Interpreter, interpret, parse};

fn scalar(s: &str) -> FilterValue {
    FilterValue::Scalar(s.to_string())
}

fn multi(values: &[&str]) -> FilterValue {
    FilterValue::Multi(values.iter().map(|v| v.to_string()).collect())
}

// ============================================================================
// Free Text
// ============================================================================

#[test]
fn test_no_keywords_keeps_everything_as_text() {
    let test_cases = vec![
        ("", ""),
        ("   ", ""),
        ("rust", "rust"),
        ("  rust    notes  ", "rust notes"),
        ("foo:bar", "foo:bar"),
        ("book:golang rust", "book:golang rust"),
        ("a\tb\nc", "a b c"),
    ];

    for (input, expected) in test_cases {
        let result = parse(input, &[]).unwrap();
        assert_eq!(result.text, expected, "Failed for input: {:?}", input);
        assert!(result.filters.is_empty());
    }
}

#[test]
fn test_unrecognized_filters_stay_text() {
    let result = parse("foo:bar baz:quz", &["bar"]).unwrap();
    assert_eq!(result.text, "foo:bar baz:quz");
    assert!(result.filters.is_empty());
}

#[test]
fn test_stray_colons_are_text() {
    assert_eq!(parse(":", &["book"]).unwrap().text, ":");
    assert_eq!(parse("book:", &["book"]).unwrap().text, "book :");
    assert_eq!(parse("a:b:c", &[]).unwrap().text, "a:b : c");
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_single_filter() {
    let result = parse("book:golang", &["book"]).unwrap();
    assert_eq!(result.text, "");
    assert_eq!(result.filter("book"), Some(&scalar("golang")));
}

#[test]
fn test_repeated_filter_promotes_to_multi() {
    let result = parse("k:v1 k:v2", &["k"]).unwrap();
    assert_eq!(result.filter("k"), Some(&multi(&["v1", "v2"])));

    let result = parse("k:v1 k:v2 text k:v3", &["k"]).unwrap();
    assert_eq!(result.filter("k"), Some(&multi(&["v1", "v2", "v3"])));
    assert_eq!(result.text, "text");
}

#[test]
fn test_duplicate_values_are_kept() {
    let result = parse("book:a book:a", &["book"]).unwrap();
    assert_eq!(result.filter("book"), Some(&multi(&["a", "a"])));
}

#[test]
fn test_mixed_query() {
    let result = parse("foo:bar baz quz:qux1 qux \"quux:fooz\"", &["foo", "quz"]).unwrap();
    assert_eq!(result.text, "baz qux \"quux:fooz\"");
    assert_eq!(result.filters.len(), 2);
    assert_eq!(result.filter("foo"), Some(&scalar("bar")));
    assert_eq!(result.filter("quz"), Some(&scalar("qux1")));
}

#[test]
fn test_filters_keep_first_seen_order() {
    let result = parse("z:1 a:2 z:3 m:4", &["a", "m", "z"]).unwrap();
    let keys: Vec<&str> = result.filters.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_whitespace_around_colon_still_filters() {
    let result = parse("book : golang", &["book"]).unwrap();
    assert_eq!(result.filter("book"), Some(&scalar("golang")));
}

#[test]
fn test_keyword_match_is_exact() {
    let result = parse("Book:golang books:rust", &["book"]).unwrap();
    assert!(result.filters.is_empty());
    assert_eq!(result.text, "Book:golang books:rust");
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_quoted_filter_is_literal() {
    let result = parse("\"k:v\"", &["k"]).unwrap();
    assert!(result.filters.is_empty());
    assert_eq!(result.text, "\"k:v\"");
}

#[test]
fn test_leading_quote_only() {
    let result = parse("\"book:golang rust", &["book"]).unwrap();
    assert!(result.filters.is_empty());
    assert_eq!(result.text, "\"book:golang rust");
}

// ============================================================================
// Interpreter
// ============================================================================

#[test]
fn test_interpret_nodes_directly() {
    let nodes = vec![
        SyntaxNode::text("hello"),
        SyntaxNode::filter("book", "a"),
        SyntaxNode::filter("tag", "b"),
        SyntaxNode::filter("book", "c"),
    ];

    let result = interpret(&nodes, &["book"]);
    assert_eq!(result.text, "hello tag:b");
    assert_eq!(result.filter("book"), Some(&multi(&["a", "c"])));
}

#[test]
fn test_interpreter_reuse() {
    let interpreter = Interpreter::new(["book"]);
    assert!(interpreter.recognizes("book"));
    assert!(!interpreter.recognizes("tag"));

    let first = interpreter.interpret(&[SyntaxNode::filter("book", "a")]);
    let second = interpreter.interpret(&[SyntaxNode::filter("book", "b")]);
    assert_eq!(first.filter("book"), Some(&scalar("a")));
    assert_eq!(second.filter("book"), Some(&scalar("b")));
}

#[test]
fn test_filter_value_push() {
    let mut value = scalar("a");
    value.push("b".to_string());
    assert_eq!(value, multi(&["a", "b"]));
    value.push("c".to_string());
    assert_eq!(value.values(), vec!["a", "b", "c"]);
    assert_eq!(value.into_vec(), vec!["a", "b", "c"]);
}
