#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an operation.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The numerator of the failed division.
        numerator: f64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { numerator } => {
                write!(f, "Error: Division by zero: {numerator} / 0.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
