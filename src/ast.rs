use crate::{
    engine::evaluator::{EvalResult, evaluate},
    error::ParseError,
};

/// Represents a binary arithmetic operator.
///
/// The operator set is fixed and closed: every member is bound to a pure
/// function over real numbers, and nothing outside the set can be
/// constructed. Unknown symbols are rejected at the text boundary by
/// [`Operator::from_symbol`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Every member of the operator set, in display order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Converts a raw operator symbol into an [`Operator`].
    ///
    /// Surrounding whitespace is ignored, so the interactive prompts can
    /// pass user input through unchanged.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidOperation`] for any symbol outside the
    /// fixed set.
    ///
    /// # Example
    /// ```
    /// use equara::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("+").unwrap(), Operator::Add);
    /// assert_eq!(Operator::from_symbol(" ^ ").unwrap(), Operator::Pow);
    /// assert!(Operator::from_symbol("%").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, ParseError> {
        match symbol.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "^" => Ok(Self::Pow),
            other => Err(ParseError::InvalidOperation { symbol: other.to_string() }),
        }
    }

    /// Returns the display symbol for the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Indicates which operand of the binary operation the unknown occupies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    /// The equation is `x OP known = target`.
    Left,
    /// The equation is `known OP x = target`.
    Right,
}

/// A single-variable linear equation to solve for `x`.
///
/// Constructed fresh per solve request, either by the parser from a line
/// like `x + 5 = 10`, or by the interactive prompts from individual
/// fields. `known` and `target` are finite by construction; the literal
/// case `known == 0` with [`Side::Right`] under division is still
/// evaluated as written, and any non-finite outcome flows through the
/// scanner's residual comparisons unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Equation {
    /// The desired result on the right of `=`.
    pub target: f64,
    /// The operator joining the unknown and the known operand.
    pub op:     Operator,
    /// The non-`x` operand.
    pub known:  f64,
    /// Which side of the operator `x` occupies.
    pub side:   Side,
}

impl Equation {
    /// Evaluates the equation's operation at a candidate `x`, honoring
    /// which side the unknown occupies.
    ///
    /// # Errors
    /// Propagates [`EvalError::DivisionByZero`] from the evaluator when
    /// the candidate makes the divisor zero.
    ///
    /// [`EvalError::DivisionByZero`]: crate::error::EvalError::DivisionByZero
    ///
    /// # Example
    /// ```
    /// use equara::ast::{Equation, Operator, Side};
    ///
    /// let eq = Equation { target: 10.0,
    ///                     op:     Operator::Add,
    ///                     known:  5.0,
    ///                     side:   Side::Left, };
    ///
    /// assert_eq!(eq.eval_at(3.0).unwrap(), 8.0);
    /// ```
    pub fn eval_at(&self, x: f64) -> EvalResult<f64> {
        match self.side {
            Side::Left => evaluate(x, self.op, self.known),
            Side::Right => evaluate(self.known, self.op, x),
        }
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::fmt::fmt_number;

        match self.side {
            Side::Left => write!(f,
                                 "x {} {} = {}",
                                 self.op,
                                 fmt_number(self.known),
                                 fmt_number(self.target)),
            Side::Right => write!(f,
                                  "{} {} x = {}",
                                  fmt_number(self.known),
                                  self.op,
                                  fmt_number(self.target)),
        }
    }
}

/// A parsed input line.
///
/// A line is either a plain calculation (`2 + 3`) or an equation to solve
/// (`x + 5 = 10`). The parser produces this type; it performs no I/O and
/// no evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Request {
    /// A basic binary calculation.
    Calculation {
        /// Left operand.
        a:  f64,
        /// The operator.
        op: Operator,
        /// Right operand.
        b:  f64,
    },
    /// An equation to solve for `x`.
    Solve(Equation),
}
