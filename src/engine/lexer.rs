use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the
/// lexer. This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    /// All literals are real numbers; integers are read as reals.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number_literal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number_literal)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number_literal)]
    Number(f64),
    /// The unknown, `x`.
    #[token("x")]
    #[token("X")]
    Unknown,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number.
fn parse_number_literal(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes a full input line.
///
/// Each token is paired with its 1-based byte column so that parse errors
/// can point at the offending position.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for any slice of input the
/// lexer does not recognize.
///
/// # Example
/// ```
/// use equara::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x + 5").unwrap();
/// assert_eq!(tokens[0], (Token::Unknown, 1));
/// assert_eq!(tokens[1], (Token::Plus, 3));
/// assert_eq!(tokens[2], (Token::Number(5.0), 5));
///
/// assert!(tokenize("x ? 5").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     column });
        }
    }

    Ok(tokens)
}
