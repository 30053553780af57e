use equara::{
    ast::{Equation, Operator, Request, Side},
    engine::{
        evaluator::evaluate,
        lexer::tokenize,
        parser::{parse_number, parse_request},
        solver::{EPSILON, Grid, PROBE_POINTS, ScanParams, SearchResult, probe, solve, verify},
    },
    error::{EvalError, ParseError},
    get_answer,
};

fn equation(target: f64, op: Operator, known: f64, side: Side) -> Equation {
    Equation { target, op, known, side }
}

fn solve_default(target: f64, op: Operator, known: f64, side: Side) -> SearchResult {
    solve(&equation(target, op, known, side), &ScanParams::default())
}

fn parse_line(source: &str) -> Result<Request, ParseError> {
    let tokens = tokenize(source)?;
    parse_request(&mut tokens.iter().peekable())
}

fn assert_exact(result: SearchResult, expected: f64) {
    match result {
        SearchResult::Exact(x) => {
            assert!((x - expected).abs() < 1e-6, "expected x near {expected}, got {x}");
        },
        other => panic!("expected Exact near {expected}, got {other:?}"),
    }
}

#[test]
fn evaluator_matches_mathematical_results() {
    assert_eq!(evaluate(5.0, Operator::Add, 3.0).unwrap(), 8.0);
    assert_eq!(evaluate(8.0, Operator::Sub, 5.0).unwrap(), 3.0);
    assert_eq!(evaluate(7.0, Operator::Mul, 9.0).unwrap(), 63.0);
    assert_eq!(evaluate(10.0, Operator::Div, 2.0).unwrap(), 5.0);
    assert_eq!(evaluate(2.0, Operator::Pow, 10.0).unwrap(), 1024.0);
    assert_eq!(evaluate(9.0, Operator::Pow, 0.5).unwrap(), 3.0);
    assert!((evaluate(2.0, Operator::Pow, -1.0).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(evaluate(1.0, Operator::Div, 0.0),
                     Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(evaluate(5.0, Operator::Div, -0.0),
                     Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn power_follows_host_semantics() {
    // Negative base with a fractional exponent is NaN, not an error.
    assert!(evaluate(-2.0, Operator::Pow, 0.5).unwrap().is_nan());
}

#[test]
fn operator_symbols_are_a_closed_set() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()).unwrap(), op);
    }
    for symbol in ["%", "!", "plus", ""] {
        assert!(matches!(Operator::from_symbol(symbol),
                         Err(ParseError::InvalidOperation { .. })),
                "'{symbol}' should be rejected");
    }
}

#[test]
fn numbers_must_be_finite_reals() {
    assert_eq!(parse_number("42").unwrap(), 42.0);
    assert_eq!(parse_number(" -2.5 ").unwrap(), -2.5);
    assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    for text in ["five", "", "1.2.3", "inf", "NaN"] {
        assert!(matches!(parse_number(text), Err(ParseError::InvalidNumber { .. })),
                "'{text}' should be rejected");
    }
}

#[test]
fn exact_hit_with_x_on_the_left() {
    assert_exact(solve_default(10.0, Operator::Add, 5.0, Side::Left), 5.0);
}

#[test]
fn exact_hit_with_x_on_the_right() {
    assert_exact(solve_default(15.0, Operator::Mul, 3.0, Side::Right), 5.0);
}

#[test]
fn subtraction_and_division_from_the_right() {
    // 10 - x = 7
    assert_exact(solve_default(7.0, Operator::Sub, 10.0, Side::Right), 3.0);
    // 20 / x = 4
    assert_exact(solve_default(4.0, Operator::Div, 20.0, Side::Right), 5.0);
}

#[test]
fn first_exact_match_in_ascending_order_wins() {
    // x ^ 2 = 9 has two roots; the scan must stop at -3, never reaching 3.
    assert_exact(solve_default(9.0, Operator::Pow, 2.0, Side::Left), -3.0);
}

#[test]
fn unreachable_target_falls_back_to_closest_sample() {
    match solve_default(1_000_000.0, Operator::Add, 5.0, Side::Left) {
        SearchResult::Approximate { x, residual } => {
            // The best sample is the top of the range: 100 + 5 = 105.
            assert!((x - 100.0).abs() < 1e-6);
            assert!((residual - 999_895.0).abs() < 1e-6);
            assert!(residual > EPSILON);
        },
        other => panic!("expected Approximate, got {other:?}"),
    }
}

#[test]
fn grid_covers_the_whole_range_inclusively() {
    let points: Vec<f64> = Grid::new(-100.0, 100.0, 0.1).collect();

    assert_eq!(points.len(), 2001);
    assert_eq!(points[0], -100.0);
    assert!((points[2000] - 100.0).abs() < 1e-9);
    assert!(points.windows(2).all(|w| w[0] < w[1]), "candidates must ascend strictly");
}

#[test]
fn degenerate_ranges_yield_not_found() {
    let eq = equation(10.0, Operator::Add, 5.0, Side::Left);

    for params in [ScanParams { min: 1.0, max: 0.0, ..ScanParams::default() },
                   ScanParams { step: 0.0, ..ScanParams::default() },
                   ScanParams { step: -0.1, ..ScanParams::default() },
                   ScanParams { step: f64::NAN, ..ScanParams::default() }]
    {
        assert_eq!(solve(&eq, &params), SearchResult::NotFound);
    }
}

#[test]
fn division_by_zero_mid_scan_is_skipped() {
    // 0 / x = 5: the candidate x = 0 divides by zero and is skipped; every
    // other candidate evaluates to 0, so the first one becomes the best.
    match solve_default(5.0, Operator::Div, 0.0, Side::Right) {
        SearchResult::Approximate { x, residual } => {
            assert_eq!(x, -100.0);
            assert_eq!(residual, 5.0);
        },
        other => panic!("expected Approximate, got {other:?}"),
    }

    // 0 / x = 0: the very first candidate is already within epsilon.
    assert_exact(solve_default(0.0, Operator::Div, 0.0, Side::Right), -100.0);
}

#[test]
fn all_candidates_failing_yields_not_found() {
    // x / 0 = 3: every candidate divides by zero.
    assert_eq!(solve_default(3.0, Operator::Div, 0.0, Side::Left), SearchResult::NotFound);
}

#[test]
fn nan_residuals_never_become_the_best_candidate() {
    // x ^ 0.5 = 2: every negative candidate produces NaN; the scan still
    // finds the exact hit at x = 4.
    assert_exact(solve_default(2.0, Operator::Pow, 0.5, Side::Left), 4.0);
}

#[test]
fn solving_is_deterministic() {
    let eq = equation(3.0, Operator::Div, 10.0, Side::Right);
    let params = ScanParams::default();

    assert_eq!(solve(&eq, &params), solve(&eq, &params));
}

#[test]
fn verification_recomputes_the_equation() {
    let eq = equation(10.0, Operator::Add, 5.0, Side::Left);

    let good = verify(&eq, 5.0, EPSILON).unwrap();
    assert_eq!(good.value, 10.0);
    assert!(good.satisfied);

    let bad = verify(&eq, 6.0, EPSILON).unwrap();
    assert_eq!(bad.value, 11.0);
    assert!(!bad.satisfied);

    // Verifying 0 / x at x = 0 propagates the evaluator error.
    let zero = equation(5.0, Operator::Div, 0.0, Side::Right);
    assert!(verify(&zero, 0.0, EPSILON).is_err());
}

#[test]
fn probing_reports_failures_as_absent_values() {
    let eq = equation(5.0, Operator::Div, 0.0, Side::Right);
    let probes = probe(&eq, &PROBE_POINTS);

    assert_eq!(probes.len(), PROBE_POINTS.len());
    for p in &probes {
        if p.x == 0.0 {
            assert_eq!(p.result, None);
            assert_eq!(p.residual, None);
            assert!(!p.is_hit(EPSILON));
        } else {
            assert_eq!(p.result, Some(0.0));
        }
    }
}

#[test]
fn probing_can_hit_before_the_full_scan() {
    let eq = equation(10.0, Operator::Add, 5.0, Side::Left);
    let probes = probe(&eq, &PROBE_POINTS);

    assert!(probes.iter().any(|p| p.is_hit(EPSILON) && p.x == 5.0));
}

#[test]
fn lines_parse_into_requests() {
    assert_eq!(parse_line("2 + 3").unwrap(),
               Request::Calculation { a:  2.0,
                                      op: Operator::Add,
                                      b:  3.0, });
    assert_eq!(parse_line("-2 * -3").unwrap(),
               Request::Calculation { a:  -2.0,
                                      op: Operator::Mul,
                                      b:  -3.0, });
    assert_eq!(parse_line("x + 5 = 10").unwrap(),
               Request::Solve(equation(10.0, Operator::Add, 5.0, Side::Left)));
    assert_eq!(parse_line("3 * x = 15").unwrap(),
               Request::Solve(equation(15.0, Operator::Mul, 3.0, Side::Right)));
    assert_eq!(parse_line("10 - x = -7").unwrap(),
               Request::Solve(equation(-7.0, Operator::Sub, 10.0, Side::Right)));
}

#[test]
fn malformed_lines_report_distinct_errors() {
    assert!(matches!(parse_line("x + 5"), Err(ParseError::ExpectedEquals { .. })));
    assert!(matches!(parse_line("2 + 3 = 5"), Err(ParseError::MissingUnknown)));
    assert!(matches!(parse_line("x + x = 2"), Err(ParseError::MultipleUnknowns { .. })));
    assert!(matches!(parse_line("2 + 3 4"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_line("x + 5 = 10 7"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(parse_line("2 ? 3"),
                     Err(ParseError::UnexpectedToken { column: 3, .. })));
    assert!(matches!(parse_line(""), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse_line("2 +"), Err(ParseError::UnexpectedEndOfInput)));
}

#[test]
fn answers_format_for_display() {
    assert_eq!(get_answer("2 + 2").unwrap().to_string(), "4");
    assert_eq!(get_answer("10 / 4").unwrap().to_string(), "2.5");
    assert_eq!(get_answer("x + 5 = 10").unwrap().to_string(), "x = 5");
    assert_eq!(get_answer("x ^ 2 = 9").unwrap().to_string(), "x = -3");

    let err = get_answer("1 / 0").unwrap_err();
    assert!(err.to_string().contains("Division by zero"));
}
