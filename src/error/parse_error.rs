#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing an input line.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    UnexpectedToken {
        /// The offending slice of input.
        token:  String,
        /// The 1-based byte column where the token starts.
        column: usize,
    },
    /// Reached the end of the line while more input was required.
    UnexpectedEndOfInput,
    /// A piece of raw text could not be read as a real number.
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },
    /// An operator symbol outside the fixed set was supplied.
    InvalidOperation {
        /// The rejected symbol.
        symbol: String,
    },
    /// The line contains the unknown `x` but no `= target` part.
    ExpectedEquals {
        /// The 1-based byte column of the `x` that makes a target
        /// required.
        column: usize,
    },
    /// The line has an `= target` part but no unknown on either side.
    MissingUnknown,
    /// Both operands of the equation are the unknown `x`.
    MultipleUnknowns {
        /// The 1-based byte column of the second `x`.
        column: usize,
    },
    /// Found extra tokens after the request was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The 1-based byte column where it starts.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token '{token}'.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
            Self::InvalidNumber { text } => {
                write!(f, "Error: '{text}' is not a valid number.")
            },
            Self::InvalidOperation { symbol } => write!(f,
                                                        "Error: Invalid operation '{symbol}'. Choose from: +, -, *, /, ^."),
            Self::ExpectedEquals { column } => write!(f,
                                                      "Error at column {column}: An equation needs '= <target>' after the operation."),
            Self::MissingUnknown => {
                write!(f, "Error: The equation has no unknown. Write 'x' on one side of the operation.")
            },
            Self::MultipleUnknowns { column } => write!(f,
                                                        "Error at column {column}: Only one side of the operation may be 'x'."),
            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after the expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
