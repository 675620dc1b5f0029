//! Suite - run cases and accumulate counters

use crate::args::{Args, Callable};
use crate::case::{Case, CaseOutcome};
use crate::compare::Compare;
use crate::config::RunnerConfig;
use crate::fault::{self, Fault};
use crate::report::Reporter;
use crate::theme::{self, Style, Theme};
use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Counters accumulated by a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Cases run
    pub run: usize,
    /// Cases passed; never exceeds `run`
    pub passed: usize,
    /// Time spent inside callables
    pub total: Duration,
}

impl Stats {
    pub fn failed(&self) -> usize {
        self.run.saturating_sub(self.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.run
    }

    /// Mean time per case, `None` when nothing has run
    pub fn average(&self) -> Option<Duration> {
        if self.run == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            self.total.as_secs_f64() / self.run as f64,
        ))
    }
}

/// Whether a suite has run anything since it was created or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteState {
    Idle,
    Accumulating,
}

/// An ordered run of cases with its own counters and report sink
pub struct Suite<W: Write = Stdout> {
    stats: Stats,
    reporter: Reporter<W>,
    backtrace: bool,
}

impl Suite<Stdout> {
    /// Suite reporting to stdout, configured from the environment
    pub fn new() -> Self {
        Self::from_config(&RunnerConfig::from_env())
    }

    /// Suite reporting to stdout with explicit configuration
    pub fn from_config(config: &RunnerConfig) -> Self {
        let reporter = Reporter::new(io::stdout(), theme::detect(config));
        Self::with_reporter(reporter).with_backtrace(config.backtrace)
    }
}

impl Default for Suite<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Suite<W> {
    /// Suite reporting to any writer
    pub fn with_writer(writer: W, theme: impl Theme + 'static) -> Self {
        Self::with_reporter(Reporter::new(writer, Box::new(theme)))
    }

    pub fn with_reporter(reporter: Reporter<W>) -> Self {
        Self {
            stats: Stats::default(),
            reporter,
            backtrace: true,
        }
    }

    /// Capture and print backtraces for panicking cases
    pub fn with_backtrace(mut self, backtrace: bool) -> Self {
        self.backtrace = backtrace;
        self.reporter = self.reporter.with_trace(backtrace);
        self
    }

    /// Run a case; returns whether it passed
    pub fn run<A, O, F>(&mut self, f: F, case: Case<A, O>) -> bool
    where
        A: Args,
        O: Compare,
        F: Callable<A, O>,
    {
        self.run_case(f, case).is_pass()
    }

    /// Run an unnamed case with exact comparison
    pub fn check<A, O, F>(&mut self, f: F, args: A, expected: O) -> bool
    where
        A: Args,
        O: Compare,
        F: Callable<A, O>,
    {
        self.run(f, Case::new(args, expected))
    }

    /// Run a case and hand back the full outcome
    pub fn run_case<A, O, F>(&mut self, mut f: F, case: Case<A, O>) -> CaseOutcome<O>
    where
        A: Args,
        O: Compare,
        F: Callable<A, O>,
    {
        let backtrace = self.backtrace;
        self.execute(case, |args| fault::catch_timed(|| f.invoke(args), backtrace))
    }

    /// Run a case whose callable returns `Result`; an `Err` counts as an error
    pub fn run_fallible<A, O, E, F>(&mut self, mut f: F, case: Case<A, O>) -> bool
    where
        A: Args,
        O: Compare,
        E: Display,
        F: Callable<A, Result<O, E>>,
    {
        let backtrace = self.backtrace;
        self.execute(case, |args| {
            match fault::catch_timed(|| f.invoke(args), backtrace) {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(error)) => Err((Fault::from_error(&error), Instant::now())),
                Err(caught) => Err(caught),
            }
        })
        .is_pass()
    }

    fn execute<A, O>(
        &mut self,
        case: Case<A, O>,
        invoke: impl FnOnce(A) -> Result<O, (Fault, Instant)>,
    ) -> CaseOutcome<O>
    where
        A: Args,
        O: Compare,
    {
        self.stats.run += 1;
        let number = self.stats.run;
        let Case {
            args,
            expected,
            name,
            precision,
        } = case;

        let inputs = args.describe();
        self.emit(|r| r.case_intro(number, name.as_deref(), &inputs, &expected));

        // A fault stops the clock where it was raised, not after unwinding
        let start = Instant::now();
        let (result, end) = match invoke(args) {
            Ok(actual) => (Ok(actual), Instant::now()),
            Err((fault, raised_at)) => (Err(fault), raised_at),
        };
        let elapsed = end.saturating_duration_since(start);
        self.stats.total += elapsed;

        let outcome = match result {
            Ok(actual) => {
                if actual.satisfies(&expected, precision) {
                    self.stats.passed += 1;
                    CaseOutcome::Pass { actual, elapsed }
                } else {
                    CaseOutcome::Fail { actual, elapsed }
                }
            }
            Err(fault) => CaseOutcome::Error { fault, elapsed },
        };

        self.emit(|r| r.case_outcome(&outcome, &expected));
        debug!(
            case = number,
            name = name.as_deref().unwrap_or(""),
            verdict = %outcome.verdict(),
            elapsed_us = elapsed.as_micros() as u64,
            "case finished"
        );
        outcome
    }

    /// Print passed/total, total time and average time
    pub fn summary(&mut self) {
        let stats = self.stats;
        self.emit(|r| r.summary(&stats));
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        debug!(run = self.stats.run, passed = self.stats.passed, "suite reset");
        self.stats = Stats::default();
        self.emit(|r| r.reset_notice());
    }

    /// Print a styled line through the suite's theme and sink
    pub fn announce(&mut self, style: Style, text: &str) {
        self.emit(|r| r.line(style, text));
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn cases_run(&self) -> usize {
        self.stats.run
    }

    pub fn cases_passed(&self) -> usize {
        self.stats.passed
    }

    pub fn total_time(&self) -> Duration {
        self.stats.total
    }

    pub fn state(&self) -> SuiteState {
        if self.stats.run == 0 {
            SuiteState::Idle
        } else {
            SuiteState::Accumulating
        }
    }

    pub fn writer(&self) -> &W {
        self.reporter.writer()
    }

    pub fn into_writer(self) -> W {
        self.reporter.into_writer()
    }

    // A broken sink never fails a case
    fn emit(&mut self, write: impl FnOnce(&mut Reporter<W>) -> io::Result<()>) {
        if let Err(err) = write(&mut self.reporter) {
            warn!(error = %err, "failed to write report");
        }
    }
}
