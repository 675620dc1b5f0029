//! Kata case runner
//!
//! Calls a function with fixed arguments, compares the result to an expected
//! value and prints a colorized report with timing. Counters live in an
//! explicit [`Suite`] rather than in process globals, so a program can run as
//! many independent suites as it likes.
//!
//! # Example
//!
//! ```no_run
//! use kata_runner::{Case, Suite};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let mut suite = Suite::new();
//! suite.run(add, Case::new((2, 3), 5).named("add"));
//! suite.check(|| 0.30000001_f64, (), 0.3); // exact comparison, fails
//! suite.run(|| 0.30000001_f64, Case::new((), 0.3).with_precision(3));
//! suite.summary();
//! ```

pub mod args;
pub mod case;
pub mod compare;
pub mod config;
pub mod fault;
pub mod report;
pub mod suite;
pub mod theme;

pub use args::{Args, Callable};
pub use case::{Case, CaseOutcome, Verdict};
pub use compare::{within_tolerance, Compare};
pub use config::RunnerConfig;
pub use fault::Fault;
pub use report::Reporter;
pub use suite::{Stats, Suite, SuiteState};
pub use theme::{ColorTheme, PlainTheme, Style, Theme};
