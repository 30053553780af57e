use std::iter::Peekable;

use crate::{
    ast::{Equation, Operator, Request, Side},
    engine::lexer::Token,
    error::ParseError,
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`ParseError`] describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// One operand of a request while its shape is still undecided.
enum Operand {
    /// A numeric operand.
    Known(f64),
    /// The unknown `x`, with the column it was found at.
    Unknown {
        /// The 1-based byte column of the `x`.
        column: usize,
    },
}

/// Parses a full request from the token stream.
///
/// Grammar:
/// ```text
///     request       := operand operator operand ( '=' signed_number )?
///     operand       := 'x' | signed_number
///     signed_number := '-'? number
/// ```
///
/// A line without `=` must have numeric operands and becomes a
/// [`Request::Calculation`]. A line with `=` must have exactly one `x`
/// and becomes a [`Request::Solve`]; which operand holds the `x` decides
/// the equation's [`Side`].
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed [`Request`].
///
/// # Errors
/// - [`ParseError::ExpectedEquals`] if an `x` appears without a target.
/// - [`ParseError::MissingUnknown`] if a target appears without an `x`.
/// - [`ParseError::MultipleUnknowns`] if both operands are `x`.
/// - [`ParseError::UnexpectedTrailingTokens`] for input past the request.
/// - Propagates operand and operator errors from the helpers below.
///
/// # Example
/// ```
/// use equara::{
///     ast::{Request, Side},
///     engine::{lexer::tokenize, parser::parse_request},
/// };
///
/// let tokens = tokenize("3 * x = 15").unwrap();
/// let request = parse_request(&mut tokens.iter().peekable()).unwrap();
///
/// match request {
///     Request::Solve(eq) => assert_eq!(eq.side, Side::Right),
///     Request::Calculation { .. } => unreachable!(),
/// }
/// ```
pub fn parse_request<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Request>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_operand(tokens)?;
    let op = parse_operator(tokens)?;
    let right = parse_operand(tokens)?;

    let target = match tokens.peek() {
        Some((Token::Equals, _)) => {
            tokens.next();
            Some(parse_signed_number(tokens)?)
        },
        _ => None,
    };

    if let Some((tok, column)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  format!("{tok:?}"),
                                                          column: *column, });
    }

    match (left, right, target) {
        (Operand::Known(a), Operand::Known(b), None) => Ok(Request::Calculation { a, op, b }),
        (Operand::Unknown { column }, _, None) | (_, Operand::Unknown { column }, None) => {
            Err(ParseError::ExpectedEquals { column })
        },
        (Operand::Known(_), Operand::Known(_), Some(_)) => Err(ParseError::MissingUnknown),
        (Operand::Unknown { .. }, Operand::Unknown { column }, Some(_)) => {
            Err(ParseError::MultipleUnknowns { column })
        },
        (Operand::Unknown { .. }, Operand::Known(known), Some(target)) => {
            Ok(Request::Solve(Equation { target,
                                         op,
                                         known,
                                         side: Side::Left, }))
        },
        (Operand::Known(known), Operand::Unknown { .. }, Some(target)) => {
            Ok(Request::Solve(Equation { target,
                                         op,
                                         known,
                                         side: Side::Right, }))
        },
    }
}

/// Parses one operand: the unknown `x` or a signed numeric literal.
fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Unknown, column)) => {
            let column = *column;
            tokens.next();
            Ok(Operand::Unknown { column })
        },
        _ => Ok(Operand::Known(parse_signed_number(tokens)?)),
    }
}

/// Parses a numeric literal with an optional leading minus.
fn parse_signed_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negative = matches!(tokens.peek(), Some((Token::Minus, _)));
    if negative {
        tokens.next();
    }

    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(if negative { -value } else { *value }),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the operator joining the two operands.
fn parse_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Operator>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Plus, _)) => Ok(Operator::Add),
        Some((Token::Minus, _)) => Ok(Operator::Sub),
        Some((Token::Star, _)) => Ok(Operator::Mul),
        Some((Token::Slash, _)) => Ok(Operator::Div),
        Some((Token::Caret, _)) => Ok(Operator::Pow),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Reads a finite real number from raw text.
///
/// This is the entry point used by the interactive prompts, which collect
/// equation fields one at a time. Surrounding whitespace is ignored.
/// Non-finite spellings such as `inf` and `NaN` are rejected: every
/// number entering the system is finite.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] if the text is not a finite real
/// number.
///
/// # Example
/// ```
/// use equara::engine::parser::parse_number;
///
/// assert_eq!(parse_number(" 2.5 ").unwrap(), 2.5);
/// assert_eq!(parse_number("-1e3").unwrap(), -1000.0);
/// assert!(parse_number("five").is_err());
/// assert!(parse_number("inf").is_err());
/// ```
pub fn parse_number(text: &str) -> ParseResult<f64> {
    let trimmed = text.trim();

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber { text: trimmed.to_string() }),
    }
}
