use crate::ast::{Span, Spanned, Token};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    done: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            done: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_identifier_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Read the next token along with its character span.
    ///
    /// Keeps returning `Eof` once the input is exhausted.
    pub fn next_spanned(&mut self) -> Spanned {
        self.skip_whitespace();
        let start = self.position;

        let token = match self.current_char() {
            None => {
                self.done = true;
                Token::Eof
            }
            Some(':') => {
                self.advance();
                Token::Colon
            }
            Some(_) => Token::Identifier(self.read_identifier()),
        };

        Spanned {
            token,
            span: Span {
                start,
                end: self.position,
            },
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().token
    }

    /// Drain the remaining input, ending with exactly one `Eof`
    pub fn tokens(mut self) -> Vec<Spanned> {
        let mut tokens = Vec::new();
        while !self.done {
            tokens.push(self.next_spanned());
        }
        log::trace!("lexed {} tokens", tokens.len());
        tokens
    }
}

/// Anything but whitespace and the keyword separator
fn is_identifier_char(ch: char) -> bool {
    !ch.is_whitespace() && ch != ':'
}

/// Split a search string into tokens.
///
/// Never fails: whitespace, `:` and everything else cover every character.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokens()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

#[test]
fn test_filter_tokens() {
    let mut lexer = Lexer::new("book:golang rust");
    assert_eq!(lexer.next_token(), Token::Identifier("book".to_string()));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Identifier("golang".to_string()));
    assert_eq!(lexer.next_token(), Token::Identifier("rust".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_spans() {
    let tokens = Lexer::new("  ab:c").tokens();
    let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(2, 4), (4, 5), (5, 6), (6, 6)]);
}
