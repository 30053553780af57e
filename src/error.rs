/// Parsing errors.
///
/// Defines all error types that can occur while turning raw text into a
/// request: lexing failures, malformed numbers, symbols outside the
/// operator set, and structural mistakes in an equation line.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while computing an
/// arithmetic result, such as division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
