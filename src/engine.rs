/// The evaluator module computes arithmetic results.
///
/// The evaluator maps an operator and two real operands to a numeric
/// result. It is a pure function with a closed dispatch table: every
/// member of the operator set has exactly one evaluation rule, and the
/// only failure it can report is division by zero.
///
/// # Responsibilities
/// - Performs the five supported binary operations over `f64`.
/// - Reports division by zero as a recoverable error.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a stream of
/// tokens: numeric literals, the unknown `x`, operator symbols, and `=`.
/// This is the first stage of answering a request.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte columns.
/// - Parses numeric literals while tokenizing.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds a request from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// recognizes either a basic calculation or an equation with the unknown
/// on one side. It is pure: all I/O and retry behavior belongs to the
/// caller.
///
/// # Responsibilities
/// - Converts tokens into a structured [`Request`](crate::ast::Request).
/// - Validates the equation shape, reporting errors with column info.
/// - Provides the raw-text entry points used by interactive prompts.
pub mod parser;
/// The solver module implements the linear candidate scan.
///
/// Given an equation, the solver samples candidate values of `x` in
/// strictly ascending order over a fixed range, returning the first
/// candidate whose residual falls below epsilon, or else the candidate
/// with the smallest residual seen over the whole range.
///
/// # Responsibilities
/// - Generates the candidate grid and runs the scan.
/// - Tracks the best approximate candidate with total-order comparison.
/// - Provides the verification and probe helpers used by the front end.
pub mod solver;
