/// Number display helpers.
///
/// This module provides the formatting used everywhere a real number is
/// shown to the user: answers, equation displays, solution and
/// verification lines. Keeping it in one place guarantees that the same
/// value always prints the same way.
pub mod fmt;
