use ordered_float::OrderedFloat;

use crate::{ast::Equation, engine::evaluator::EvalResult};

/// Default lower bound of the candidate range.
pub const MIN_X: f64 = -100.0;
/// Default upper bound of the candidate range.
pub const MAX_X: f64 = 100.0;
/// Default distance between neighboring candidates.
pub const STEP: f64 = 0.1;
/// Residual threshold below which a candidate counts as an exact hit.
pub const EPSILON: f64 = 0.0001;

/// Showcase points evaluated before a full scan in the search
/// visualization.
pub const PROBE_POINTS: [f64; 7] = [-10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0];

/// Parameters of one scan: the candidate range, the step between
/// candidates, and the exact-hit threshold.
///
/// The defaults are `[-100, 100]` at step `0.1` with epsilon `0.0001`,
/// which yields exactly 2001 candidates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanParams {
    /// Lower bound of the candidate range (inclusive).
    pub min:     f64,
    /// Upper bound of the candidate range (inclusive).
    pub max:     f64,
    /// Distance between neighboring candidates.
    pub step:    f64,
    /// Residual threshold for an exact hit.
    pub epsilon: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self { min:     MIN_X,
               max:     MAX_X,
               step:    STEP,
               epsilon: EPSILON, }
    }
}

/// The outcome of one scan.
///
/// Produced once per [`solve`] call and not retained.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SearchResult {
    /// A candidate's residual fell below epsilon. The scan stops at the
    /// first such candidate in ascending order; later candidates are
    /// never examined, even if one of them would be closer.
    Exact(f64),
    /// No candidate reached epsilon; this is the one with the smallest
    /// residual seen over the whole range.
    Approximate {
        /// The best candidate.
        x:        f64,
        /// Its distance from the target.
        residual: f64,
    },
    /// The scan produced no usable candidate: the range was degenerate,
    /// or every candidate evaluated to an error or a non-finite residual.
    NotFound,
}

impl SearchResult {
    /// Returns the candidate `x`, if the scan produced one.
    #[must_use]
    pub const fn x(&self) -> Option<f64> {
        match self {
            Self::Exact(x) | Self::Approximate { x, .. } => Some(*x),
            Self::NotFound => None,
        }
    }

    /// Returns `true` for an exact hit.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Candidate values of `x`, in strictly ascending order.
///
/// Grid points are computed as `min + i * step` for `i = 0, 1, 2, ...`
/// until the point exceeds `max`. The index form keeps every point free
/// of accumulated rounding drift, so both endpoints are always
/// candidates; with the default parameters the grid is exactly the 2001
/// points `-100.0, -99.9, ..., 100.0`.
///
/// A degenerate range (`min > max`, a non-positive or non-finite step, or
/// a non-finite bound) yields no candidates.
///
/// # Example
/// ```
/// use equara::engine::solver::Grid;
///
/// let points: Vec<f64> = Grid::new(0.0, 1.0, 0.5).collect();
/// assert_eq!(points, vec![0.0, 0.5, 1.0]);
///
/// assert_eq!(Grid::new(-100.0, 100.0, 0.1).count(), 2001);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    min:   f64,
    max:   f64,
    step:  f64,
    index: usize,
}

impl Grid {
    /// Creates a grid over `[min, max]` with the given step.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min,
               max,
               step,
               index: 0, }
    }

    /// A grid that would never terminate or never yield a point.
    fn is_degenerate(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() || self.step <= 0.0
    }
}

impl Iterator for Grid {
    type Item = f64;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }

        let x = self.min + self.index as f64 * self.step;
        if x > self.max {
            return None;
        }

        self.index += 1;
        Some(x)
    }
}

/// Scans the candidate grid for a value of `x` satisfying the equation.
///
/// Every candidate is evaluated in ascending order. A residual below
/// `params.epsilon` ends the scan immediately with
/// [`SearchResult::Exact`]; the first such candidate wins, not the
/// globally closest one. Otherwise the candidate with the smallest
/// residual becomes [`SearchResult::Approximate`].
///
/// A candidate where evaluation fails (division by zero mid-scan) is
/// skipped, and a non-finite residual never displaces the incumbent, so
/// the scan always completes. If no candidate ever becomes the incumbent,
/// the result is [`SearchResult::NotFound`].
///
/// The function is pure and deterministic: identical arguments yield an
/// identical result.
///
/// # Parameters
/// - `equation`: The equation to solve.
/// - `params`: Range, step and epsilon; [`ScanParams::default`] gives the
///   standard scan.
///
/// # Example
/// ```
/// use equara::{
///     ast::{Equation, Operator, Side},
///     engine::solver::{ScanParams, SearchResult, solve},
/// };
///
/// // x + 5 = 10
/// let eq = Equation { target: 10.0,
///                     op:     Operator::Add,
///                     known:  5.0,
///                     side:   Side::Left, };
///
/// let result = solve(&eq, &ScanParams::default());
/// assert_eq!(result, SearchResult::Exact(5.0));
/// ```
#[must_use]
pub fn solve(equation: &Equation, params: &ScanParams) -> SearchResult {
    let mut best_x = None;
    let mut best_residual = OrderedFloat(f64::INFINITY);

    for x in Grid::new(params.min, params.max, params.step) {
        let Ok(result) = equation.eval_at(x) else {
            continue;
        };
        let residual = (result - equation.target).abs();

        if residual < params.epsilon {
            return SearchResult::Exact(x);
        }
        if OrderedFloat(residual) < best_residual {
            best_residual = OrderedFloat(residual);
            best_x = Some(x);
        }
    }

    best_x.map_or(SearchResult::NotFound, |x| {
              SearchResult::Approximate { x,
                                          residual: best_residual.into_inner(), }
          })
}

/// The recomputed value of an equation at a returned solution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Verification {
    /// What the equation's operation produces at the solution.
    pub value:     f64,
    /// Whether that value lands within epsilon of the target.
    pub satisfied: bool,
}

/// Re-evaluates the equation at a solution candidate.
///
/// This is the pure core of the front end's confirmation printout: it
/// re-runs the evaluator at `x` and compares the residual against
/// `epsilon`. It owns no state and triggers no additional search.
///
/// # Errors
/// Propagates the evaluator error if the candidate cannot be evaluated.
///
/// # Example
/// ```
/// use equara::{
///     ast::{Equation, Operator, Side},
///     engine::solver::{EPSILON, verify},
/// };
///
/// let eq = Equation { target: 10.0,
///                     op:     Operator::Add,
///                     known:  5.0,
///                     side:   Side::Left, };
///
/// assert!(verify(&eq, 5.0, EPSILON).unwrap().satisfied);
/// assert!(!verify(&eq, 6.0, EPSILON).unwrap().satisfied);
/// ```
pub fn verify(equation: &Equation, x: f64, epsilon: f64) -> EvalResult<Verification> {
    let value = equation.eval_at(x)?;

    Ok(Verification { value,
                      satisfied: (value - equation.target).abs() < epsilon, })
}

/// One showcase evaluation in the search visualization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Probe {
    /// The probed candidate.
    pub x:        f64,
    /// The value the operation produced, or `None` if evaluation failed.
    pub result:   Option<f64>,
    /// Distance from the target, or `None` if evaluation failed.
    pub residual: Option<f64>,
}

impl Probe {
    /// Whether this probe already lands within epsilon of the target.
    #[must_use]
    pub fn is_hit(&self, epsilon: f64) -> bool {
        self.residual.is_some_and(|residual| residual < epsilon)
    }
}

/// Evaluates the equation at a fixed set of showcase points.
///
/// Evaluation failures surface as absent values rather than errors, so a
/// probe sweep never aborts.
#[must_use]
pub fn probe(equation: &Equation, points: &[f64]) -> Vec<Probe> {
    points.iter()
          .map(|&x| {
              let result = equation.eval_at(x).ok();
              Probe { x,
                      result,
                      residual: result.map(|r| (r - equation.target).abs()), }
          })
          .collect()
}
