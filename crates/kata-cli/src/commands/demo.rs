//! Demo command - run a sample suite on stdout

use kata_runner::{Case, RunnerConfig, Stats, Style, Suite};
use std::io::Write;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Run the sample cases against a stdout suite
pub fn run(config: &RunnerConfig) -> Stats {
    let mut suite = Suite::from_config(config);
    run_cases(&mut suite)
}

/// Run the sample cases against any suite.
///
/// Two cases fail and two fault on purpose, to show every verdict.
pub fn run_cases<W: Write>(suite: &mut Suite<W>) -> Stats {
    suite.reset();
    suite.announce(Style::Header, "--- Testing kata demo ---");

    suite.run(add, Case::new((2, 3), 5).named("add"));
    suite.run(add, Case::new((2, 3), 6).named("add, wrong expectation"));
    suite.run(|x: i32| 1 / x, Case::new((0,), 0).named("divide by zero"));
    suite.run(
        || 0.30000001_f64,
        Case::new((), 0.3).named("float within 3 places").with_precision(3),
    );
    suite.run(
        reverse_words,
        Case::new(("the sky is blue",), "blue is sky the".to_string()).named("reverse words"),
    );
    suite.run_fallible(
        |s: &str| s.parse::<i32>(),
        Case::new(("4x2",), 42).named("parse"),
    );

    suite.summary();
    suite.stats()
}
