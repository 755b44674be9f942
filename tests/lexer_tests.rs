// tests/lexer_tests.rs

use notequery::ast::Token;
use notequery::lexer::{Lexer, tokenize};

fn ident(s: &str) -> Token {
    Token::Identifier(s.to_string())
}

// ============================================================================
// Single Tokens
// ============================================================================

#[test]
fn test_plain_terms_are_single_identifiers() {
    let test_cases = vec!["rust", "node.js", "\"book", "a-b_c", "日本語", "%20", "book\""];

    for input in test_cases {
        assert_eq!(tokenize(input), vec![ident(input), Token::Eof], "Failed for input: {}", input);
    }
}

#[test]
fn test_colon() {
    assert_eq!(tokenize(":"), vec![Token::Colon, Token::Eof]);
    assert_eq!(tokenize("::"), vec![Token::Colon, Token::Colon, Token::Eof]);
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::Eof]);
}

#[test]
fn test_whitespace_only() {
    for input in [" ", "   ", "\t\n", " \r\n "] {
        assert_eq!(tokenize(input), vec![Token::Eof], "Failed for input: {:?}", input);
    }
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_filter_shape() {
    assert_eq!(
        tokenize("book:golang"),
        vec![ident("book"), Token::Colon, ident("golang"), Token::Eof]
    );
}

#[test]
fn test_whitespace_separates_and_is_dropped() {
    assert_eq!(
        tokenize("  foo \t bar\nbaz  "),
        vec![ident("foo"), ident("bar"), ident("baz"), Token::Eof]
    );
}

#[test]
fn test_whitespace_around_colon() {
    assert_eq!(
        tokenize("book : golang"),
        vec![ident("book"), Token::Colon, ident("golang"), Token::Eof]
    );
}

#[test]
fn test_mixed_query() {
    assert_eq!(
        tokenize("book:golang rust \"quux:fooz\" notes"),
        vec![
            ident("book"),
            Token::Colon,
            ident("golang"),
            ident("rust"),
            ident("\"quux"),
            Token::Colon,
            ident("fooz\""),
            ident("notes"),
            Token::Eof,
        ]
    );
}

#[test]
fn test_chained_colons() {
    assert_eq!(
        tokenize("a:b:c"),
        vec![ident("a"), Token::Colon, ident("b"), Token::Colon, ident("c"), Token::Eof]
    );
}

#[test]
fn test_exactly_one_eof() {
    for input in ["", "a", "a:b c", ":::", "  x  "] {
        let tokens = tokenize(input);
        assert_eq!(tokens.last(), Some(&Token::Eof));
        assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
    }
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn test_next_token_repeats_eof() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token(), ident("x"));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_spans_count_characters() {
    let tokens = Lexer::new("é:ü ab").tokens();
    let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(0, 1), (1, 2), (2, 3), (4, 6), (6, 6)]);
}

#[test]
fn test_token_display() {
    let lines: Vec<String> = tokenize("book:x").iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["IDENT book", "COLON", "IDENT x", "EOF"]);
}
