//! # equara
//!
//! equara is an interactive command-line calculator written in Rust.
//! Besides evaluating basic binary arithmetic expressions, it solves
//! single-variable linear equations such as `x + 5 = 10` or `3 * x = 15`
//! by scanning candidate values of `x` over a fixed range and reporting
//! the sample closest to satisfying the equation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{Equation, Request},
    engine::{
        evaluator::evaluate,
        lexer::tokenize,
        parser::parse_request,
        solver::{ScanParams, SearchResult, solve},
    },
    util::fmt::fmt_number,
};

/// Defines the structure of parsed input.
///
/// This module declares the operator set, the equation record, and the
/// request sum type that the parser produces and the evaluator and
/// solver consume.
///
/// # Responsibilities
/// - Defines the closed [`Operator`](ast::Operator) set with symbol
///   conversion.
/// - Defines [`Equation`](ast::Equation) with side-aware evaluation.
/// - Defines the [`Request`](ast::Request) shape of one input line.
pub mod ast;
/// Orchestrates the process of answering a request.
///
/// This module ties together lexing, parsing, arithmetic evaluation and
/// the linear candidate scan. It exposes the pipeline stages that
/// [`get_answer`] coordinates.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, solver.
/// - Keeps every stage pure; all I/O belongs to the front end.
/// - Manages the flow of data and errors between stages.
pub mod engine;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading input
/// or computing results. Every error carries enough detail to be
/// reported as a distinct message, and none of them is fatal: the
/// interactive loop always continues.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser,
///   evaluator).
/// - Attaches byte columns where the input has positions.
/// - Integrates with standard error handling traits.
pub mod error;
/// General display utilities.
///
/// This module provides the shared number formatting used by answers and
/// by the interactive front end.
///
/// # Responsibilities
/// - Formats real numbers consistently across the crate.
pub mod util;

/// The outcome of answering one input line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Answer {
    /// The value of a basic calculation.
    Value(f64),
    /// The search outcome for an equation.
    Solution {
        /// The equation that was solved.
        equation: Equation,
        /// What the scan produced.
        result:   SearchResult,
    },
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", fmt_number(*value)),
            Self::Solution { result, .. } => match result {
                SearchResult::Exact(x) => write!(f, "x = {}", fmt_number(*x)),
                SearchResult::Approximate { x, residual } => {
                    write!(f, "x ≈ {} (off by {})", fmt_number(*x), fmt_number(*residual))
                },
                SearchResult::NotFound => write!(f, "no solution found in the search range"),
            },
        }
    }
}

/// Answers a single input line.
///
/// The line is tokenized and parsed into a [`Request`]; a calculation is
/// evaluated directly, an equation is handed to the linear scanner with
/// the default range, step and epsilon.
///
/// # Errors
/// Returns an error if the line fails to lex or parse, or if a basic
/// calculation divides by zero. An equation that merely lacks an exact
/// solution in range is not an error; it yields an approximate answer.
///
/// # Examples
/// ```
/// use equara::get_answer;
///
/// let sum = get_answer("2 + 2").unwrap();
/// assert_eq!(sum.to_string(), "4");
///
/// let solved = get_answer("x + 5 = 10").unwrap();
/// assert_eq!(solved.to_string(), "x = 5");
///
/// // 'y' is not part of the grammar.
/// assert!(get_answer("y + 5 = 10").is_err());
/// ```
pub fn get_answer(source: &str) -> Result<Answer, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let request = parse_request(&mut iter)?;

    match request {
        Request::Calculation { a, op, b } => Ok(Answer::Value(evaluate(a, op, b)?)),
        Request::Solve(equation) => {
            Ok(Answer::Solution { equation,
                                  result: solve(&equation, &ScanParams::default()), })
        },
    }
}
