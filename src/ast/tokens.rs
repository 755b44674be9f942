#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Run of characters that are neither whitespace nor `:`
    ///
    /// Carries the exact text consumed. Quotes and other punctuation are
    /// ordinary identifier characters.
    ///
    /// # Examples
    /// ```text
    /// golang
    /// node.js
    /// "book
    /// ```
    Identifier(String),

    /// Separator between a keyword and its value
    ///
    /// # Examples
    /// ```text
    /// book:golang
    /// ```
    Colon,

    /// End of input
    ///
    /// Always the last token of a sequence, and present exactly once.
    Eof,
}

impl Token {
    /// Short uppercase label used in diagnostics and the `tokens` command
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Identifier(_) => "IDENT",
            Token::Colon => "COLON",
            Token::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Identifier(value) => write!(f, "{} {}", self.kind(), value),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Character range `[start, end)` a token was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A token together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}
