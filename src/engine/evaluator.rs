use crate::{ast::Operator, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a binary arithmetic operation over real numbers.
///
/// Addition, subtraction, multiplication and division are plain IEEE-754
/// double operations; exponentiation uses [`f64::powf`], so fractional
/// and negative exponents follow the host's power semantics (a negative
/// base with a fractional exponent yields NaN, which downstream residual
/// comparisons skip rather than report).
///
/// The function is pure and has no side effects.
///
/// # Parameters
/// - `a`: Left operand.
/// - `op`: The arithmetic operator.
/// - `b`: Right operand.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when dividing and `b` is zero of
/// either sign.
///
/// # Example
/// ```
/// use equara::{ast::Operator, engine::evaluator::evaluate};
///
/// assert_eq!(evaluate(5.0, Operator::Add, 3.0).unwrap(), 8.0);
/// assert_eq!(evaluate(2.0, Operator::Pow, 10.0).unwrap(), 1024.0);
/// assert!(evaluate(1.0, Operator::Div, 0.0).is_err());
/// ```
pub fn evaluate(a: f64, op: Operator, b: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Ok(a + b),
        Sub => Ok(a - b),
        Mul => Ok(a * b),
        Div => {
            if b == 0.0 {
                Err(EvalError::DivisionByZero { numerator: a })
            } else {
                Ok(a / b)
            }
        },
        Pow => Ok(a.powf(b)),
    }
}
