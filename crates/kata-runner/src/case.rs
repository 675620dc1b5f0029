//! Cases and their outcomes

use crate::fault::Fault;
use std::fmt;
use std::time::Duration;

/// One invocation to check: inputs, the expected result, and options
#[derive(Debug, Clone, PartialEq)]
pub struct Case<A, O> {
    pub(crate) args: A,
    pub(crate) expected: O,
    pub(crate) name: Option<String>,
    pub(crate) precision: Option<i32>,
}

impl<A, O> Case<A, O> {
    /// Create a case from an argument tuple and the expected result
    pub fn new(args: A, expected: O) -> Self {
        Self {
            args,
            expected,
            name: None,
            precision: None,
        }
    }

    /// Set a display name for the report header
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Compare floating point results to `precision` decimal places
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    pub fn expected(&self) -> &O {
        &self.expected
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn precision(&self) -> Option<i32> {
        self.precision
    }
}

/// PASS / FAIL / ERROR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Result of running a single case
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome<O> {
    /// The callable returned a value matching the expectation
    Pass { actual: O, elapsed: Duration },
    /// The callable returned a value that does not match
    Fail { actual: O, elapsed: Duration },
    /// The callable panicked or returned an error
    Error { fault: Fault, elapsed: Duration },
}

impl<O> CaseOutcome<O> {
    /// Check if this outcome is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Pass { .. })
    }

    /// Check if this outcome is a mismatch or an error
    pub fn is_fail(&self) -> bool {
        matches!(self, CaseOutcome::Fail { .. } | CaseOutcome::Error { .. })
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            CaseOutcome::Pass { .. } => Verdict::Pass,
            CaseOutcome::Fail { .. } => Verdict::Fail,
            CaseOutcome::Error { .. } => Verdict::Error,
        }
    }

    /// Time spent inside the callable (up to the fault, for errors)
    pub fn elapsed(&self) -> Duration {
        match self {
            CaseOutcome::Pass { elapsed, .. } => *elapsed,
            CaseOutcome::Fail { elapsed, .. } => *elapsed,
            CaseOutcome::Error { elapsed, .. } => *elapsed,
        }
    }

    /// The value the callable returned, if it returned at all
    pub fn actual(&self) -> Option<&O> {
        match self {
            CaseOutcome::Pass { actual, .. } | CaseOutcome::Fail { actual, .. } => Some(actual),
            CaseOutcome::Error { .. } => None,
        }
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            CaseOutcome::Error { fault, .. } => Some(fault),
            _ => None,
        }
    }
}
