use std::collections::HashSet;

use crate::{
    ast::{FilterValue, ParseResult, SyntaxNode},
    lexer::tokenize,
    parser::{ParseError, Parser},
};

/// Keyword naming the book facet
pub const BOOK_KEYWORD: &str = "book";

/// Keywords recognized by note search
pub const NOTE_KEYWORDS: &[&str] = &[BOOK_KEYWORD];

/// Resolves syntax nodes against a set of recognized keywords.
pub struct Interpreter {
    keywords: HashSet<String>,
}

impl Interpreter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Interpreter {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn recognizes(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    /// Collect free text and recognized filters, in input order.
    ///
    /// A filter whose keyword is not recognized is kept as `keyword:value` text.
    pub fn interpret(&self, nodes: &[SyntaxNode]) -> ParseResult {
        let mut result = ParseResult::default();

        for node in nodes {
            match node {
                SyntaxNode::Text { value } => push_text(&mut result.text, value),
                SyntaxNode::Filter { keyword, value } if self.recognizes(keyword) => {
                    match result.filters.get_mut(keyword) {
                        Some(existing) => existing.push(value.clone()),
                        None => {
                            result
                                .filters
                                .insert(keyword.clone(), FilterValue::Scalar(value.clone()));
                        }
                    }
                }
                SyntaxNode::Filter { keyword, value } => {
                    log::debug!("unrecognized keyword '{}', keeping as text", keyword);
                    push_text(&mut result.text, &format!("{}:{}", keyword, value));
                }
            }
        }

        result
    }
}

fn push_text(text: &mut String, term: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(term);
}

/// Resolve already-parsed nodes against `keywords`
pub fn interpret(nodes: &[SyntaxNode], keywords: &[&str]) -> ParseResult {
    Interpreter::new(keywords.iter().copied()).interpret(nodes)
}

/// Tokenize, parse and interpret a search string in one step
pub fn parse(input: &str, keywords: &[&str]) -> Result<ParseResult, ParseError> {
    let tokens = tokenize(input);
    let nodes = Parser::new(&tokens).parse()?;
    let result = interpret(&nodes, keywords);
    log::debug!(
        "parsed query {:?}: {} filter keyword(s), text {:?}",
        input,
        result.filters.len(),
        result.text
    );
    Ok(result)
}
