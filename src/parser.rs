//! Recursive descent parser for note search queries
//!
//! # Grammar
//!
//! ```text
//! expr   := term*                (until EOF)
//! term   := filter | text
//! filter := IDENT COLON IDENT    (speculative)
//! text   := IDENT | COLON
//! ```
//!
//! Rules take an immutable token position and return the node plus the
//! position after it. `filter` answers `None` when it does not match and the
//! caller carries on from the position it already holds, so backtracking needs
//! no rewinding.

use crate::ast::{SyntaxNode, Token};

/// Malformed token sequence.
///
/// Sequences produced by the lexer always parse; these only arise from
/// hand-built token lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The sequence ran out without an `Eof` token
    MissingEof { position: usize },
    /// Tokens follow the `Eof` token
    TrailingTokens { position: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingEof { position } => {
                write!(f, "Expected EOF at token {}, got end of sequence", position)
            }
            ParseError::TrailingTokens { position } => {
                write!(f, "Unexpected token after EOF at token {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub struct Parser<'a> {
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens }
    }

    fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }

    fn identifier_at(&self, pos: usize) -> Option<&'a str> {
        match self.token_at(pos) {
            Some(Token::Identifier(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Parse the whole sequence into syntax nodes
    pub fn parse(&self) -> Result<Vec<SyntaxNode>, ParseError> {
        let mut nodes = Vec::new();
        let mut pos = 0;

        while self.token_at(pos) != Some(&Token::Eof) {
            let (node, next) = self
                .parse_term(pos)
                .ok_or(ParseError::MissingEof { position: pos })?;
            nodes.push(node);
            pos = next;
        }

        if pos + 1 < self.tokens.len() {
            return Err(ParseError::TrailingTokens { position: pos + 1 });
        }

        log::trace!("parsed {} nodes", nodes.len());
        Ok(nodes)
    }

    /// Parse one term at `pos`; `None` at `Eof` or past the end
    pub fn parse_term(&self, pos: usize) -> Option<(SyntaxNode, usize)> {
        self.parse_filter(pos).or_else(|| self.parse_text(pos))
    }

    /// Try `IDENT COLON IDENT` at `pos`
    pub fn parse_filter(&self, pos: usize) -> Option<(SyntaxNode, usize)> {
        let keyword = self.identifier_at(pos)?;
        if self.token_at(pos + 1) != Some(&Token::Colon) {
            return None;
        }
        let Some(value) = self.identifier_at(pos + 2) else {
            log::trace!("no filter value after '{}:', backtracking", keyword);
            return None;
        };
        Some((SyntaxNode::filter(keyword, value), pos + 3))
    }

    /// Take the token at `pos` as literal text.
    ///
    /// A colon that could not join a filter stands for itself.
    pub fn parse_text(&self, pos: usize) -> Option<(SyntaxNode, usize)> {
        let value = match self.token_at(pos)? {
            Token::Identifier(value) => value.clone(),
            Token::Colon => ":".to_string(),
            Token::Eof => return None,
        };
        Some((SyntaxNode::text(value), pos + 1))
    }
}
