pub mod ast;
pub mod books;
pub mod cli;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod search_str;
pub mod serializer;

pub use ast::{FilterValue, Filters, ParseResult, Queries, Span, Spanned, SyntaxNode, Token};
pub use books::{Book, BookNameError, check_duplicate, validate_book_name};
pub use interpreter::{BOOK_KEYWORD, Interpreter, NOTE_KEYWORDS, interpret, parse};
pub use lexer::{Lexer, tokenize};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use search_str::get_filters_from_search_str;
pub use serializer::stringify;
