use std::io::{self, BufRead, Write};

use clap::Parser;
use equara::{
    ast::{Equation, Operator, Side},
    engine::{
        evaluator::evaluate,
        parser::parse_number,
        solver::{EPSILON, PROBE_POINTS, ScanParams, SearchResult, probe, solve, verify},
    },
    get_answer,
    util::fmt::fmt_number,
};

/// equara is an easy to use command-line calculator that can also solve
/// single-variable linear equations by searching for `x`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Answer a single line (e.g. "2 + 3" or "x + 5 = 10") and exit.
    line: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(line) = args.line {
        match get_answer(&line) {
            Ok(answer) => println!("{answer}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = menu_loop() {
        eprintln!("Input stream failed: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive menu until the user exits or stdin is closed.
fn menu_loop() -> io::Result<()> {
    loop {
        println!();
        println!("{}", "=".repeat(50));
        println!("SMART CALCULATOR WITH EQUATION SOLVER");
        println!("{}", "=".repeat(50));
        println!("1. Basic calculation");
        println!("2. Solve equation (using search)");
        println!("3. See search visualization");
        println!("4. About search algorithms");
        println!("5. Exit");

        let Some(choice) = prompt("\nChoose option (1-5): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                if basic_calculation()?.is_none() {
                    return Ok(());
                }
            },
            "2" => {
                if equation_menu()?.is_none() {
                    return Ok(());
                }
            },
            "3" => {
                println!("\nLet's solve: x + 5 = 12");
                let demo = Equation { target: 12.0,
                                      op:     Operator::Add,
                                      known:  5.0,
                                      side:   Side::Left, };
                report_search(&demo);
            },
            "4" => about_search(),
            "5" => {
                println!("\nThanks for using the calculator!");
                return Ok(());
            },
            _ => println!("Please choose a number between 1 and 5."),
        }
    }
}

/// Prints `text` and reads one line from stdin.
///
/// Returns `Ok(None)` once the input stream is exhausted, so piped input
/// terminates the program cleanly instead of spinning on empty reads.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keeps asking until the input parses as a finite number.
fn read_number(text: &str) -> io::Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(text)? else {
            return Ok(None);
        };
        match parse_number(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{e}"),
        }
    }
}

/// Keeps asking until the input is one of the five operator symbols.
fn read_operator() -> io::Result<Option<Operator>> {
    loop {
        let Some(raw) = prompt("Operation (+, -, *, /, ^): ")? else {
            return Ok(None);
        };
        match Operator::from_symbol(&raw) {
            Ok(op) => return Ok(Some(op)),
            Err(e) => println!("{e}"),
        }
    }
}

/// Menu option 1: collect two numbers and an operator, then evaluate.
///
/// Each field has its own retry loop; a zero divisor is re-prompted
/// before evaluation so the common mistake is caught at input time.
fn basic_calculation() -> io::Result<Option<()>> {
    let Some(a) = read_number("Enter first number: ")? else {
        return Ok(None);
    };
    let Some(op) = read_operator()? else {
        return Ok(None);
    };
    let b = loop {
        let Some(b) = read_number("Enter second number: ")? else {
            return Ok(None);
        };
        if op == Operator::Div && b == 0.0 {
            println!("Cannot divide by zero! Please enter another number.");
            continue;
        }
        break b;
    };

    match evaluate(a, op, b) {
        Ok(result) => println!("\nResult: {}", fmt_number(result)),
        Err(e) => println!("{e}"),
    }
    Ok(Some(()))
}

/// Menu option 2: the equation solver loop.
///
/// Fields are collected one at a time in the order matching how the
/// equation reads, then the search runs with the probe display and a
/// verification line.
fn equation_menu() -> io::Result<Option<()>> {
    println!("\n{}", "=".repeat(50));
    println!("EQUATION SOLVER (using search)");
    println!("{}", "=".repeat(50));
    println!("I can solve equations like:");
    println!("  x + 5 = 10");
    println!("  x * 3 = 15");
    println!("  10 - x = 7");
    println!("  20 / x = 4");

    loop {
        println!("\nEnter equation parts:");
        let Some(answer) = prompt("Is x on the left side? (y/n): ")? else {
            return Ok(None);
        };
        let side = if answer.to_lowercase().starts_with('y') {
            Side::Left
        } else {
            Side::Right
        };

        let equation = match side {
            Side::Left => {
                println!("Enter in format: x op num = result");
                let Some(op) = read_operator()? else {
                    return Ok(None);
                };
                let Some(known) = read_number("Number after operation: ")? else {
                    return Ok(None);
                };
                let Some(target) = read_number("Desired result (after =): ")? else {
                    return Ok(None);
                };
                Equation { target, op, known, side }
            },
            Side::Right => {
                println!("Enter in format: num op x = result");
                let Some(known) = read_number("Number before operation: ")? else {
                    return Ok(None);
                };
                let Some(op) = read_operator()? else {
                    return Ok(None);
                };
                let Some(target) = read_number("Desired result (after =): ")? else {
                    return Ok(None);
                };
                Equation { target, op, known, side }
            },
        };

        report_search(&equation);

        let Some(again) = prompt("\nSolve another equation? (y/n): ")? else {
            return Ok(None);
        };
        if !again.to_lowercase().starts_with('y') {
            return Ok(Some(()));
        }
    }
}

/// Shows the staged probe, then runs the full scan and reports it.
///
/// A probe point that already lands within epsilon short-circuits the
/// full scan, exactly like the staged search it visualizes.
fn report_search(equation: &Equation) {
    println!("\nSEARCHING FOR SOLUTION...");
    println!("Goal: Find x where {equation}");

    println!("\nTesting values:");
    println!("{}", "-".repeat(40));
    for p in probe(equation, &PROBE_POINTS) {
        if let (Some(result), Some(residual)) = (p.result, p.residual) {
            if p.is_hit(EPSILON) {
                println!("  x = {:6.1} -> Result = {result:6.1} [FOUND IT!]", p.x);
                report_solution(equation, SearchResult::Exact(p.x));
                return;
            }
            println!("  x = {:6.1} -> Result = {result:6.1} [off by {residual:.1}]", p.x);
        } else {
            println!("  x = {:6.1} -> undefined", p.x);
        }
    }

    println!("\n...continuing detailed search...");
    report_solution(equation, solve(equation, &ScanParams::default()));
}

/// Prints a search outcome with its verification line.
fn report_solution(equation: &Equation, result: SearchResult) {
    let x = match result {
        SearchResult::Exact(x) => {
            println!("\nSolution: x = {}", fmt_number(x));
            x
        },
        SearchResult::Approximate { x, residual } => {
            println!("\nClosest solution: x = {} (off by {})", fmt_number(x), fmt_number(residual));
            x
        },
        SearchResult::NotFound => {
            println!("\nNo solution found in the search range");
            return;
        },
    };

    match verify(equation, x, EPSILON) {
        Ok(v) => {
            let mark = if v.satisfied { "≈" } else { "≠" };
            println!("Verification: {} {mark} {}", fmt_number(v.value), fmt_number(equation.target));
        },
        Err(e) => println!("{e}"),
    }
}

/// Menu option 4: the educational text about search strategies.
fn about_search() {
    println!("\nABOUT SEARCH ALGORITHMS");
    println!("{}", "-".repeat(40));
    println!("This calculator uses a simple linear search:");
    println!("- It tries different values of x");
    println!("- Checks if each value solves the equation");
    println!("- Keeps track of the best answer");
    println!("- This is similar to 'brute force' search");
    println!("\nReal search algorithms are smarter:");
    println!("- BFS: Explores all possibilities level by level");
    println!("- DFS: Explores one path deeply before trying others");
    println!("- A*: Uses heuristics to search more efficiently");
}
