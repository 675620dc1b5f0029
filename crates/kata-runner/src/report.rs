//! Case reporter - write case blocks and summaries

use crate::case::CaseOutcome;
use crate::suite::Stats;
use crate::theme::{Style, Theme};
use std::fmt::Debug;
use std::io::{self, Write};
use std::time::Duration;

/// Writes human-readable reports to a sink
pub struct Reporter<W: Write> {
    out: W,
    theme: Box<dyn Theme>,
    /// Print backtrace frames for faults
    show_trace: bool,
}

/// Milliseconds with three decimals, e.g. `0.125 ms`
pub fn format_ms(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.0)
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W, theme: Box<dyn Theme>) -> Self {
        Self {
            out,
            theme,
            show_trace: true,
        }
    }

    /// Show or hide the traceback section of fault reports
    pub fn with_trace(mut self, show_trace: bool) -> Self {
        self.show_trace = show_trace;
        self
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn paint(&self, style: Style, text: &str) -> String {
        self.theme.paint(style, text)
    }

    /// Write one styled line
    pub fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        let painted = self.paint(style, text);
        writeln!(self.out, "{}", painted)
    }

    /// Header, inputs and expected value, written before the call
    pub fn case_intro(
        &mut self,
        number: usize,
        name: Option<&str>,
        inputs: &str,
        expected: &dyn Debug,
    ) -> io::Result<()> {
        let title = match name {
            Some(name) => format!("Test #{}: {}", number, name),
            None => format!("Test #{}", number),
        };
        let header = self.paint(Style::Header, &format!("--- {} ---", title));
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "{}", inputs)?;
        writeln!(self.out, "Expected: {:?}", expected)?;
        // Output of the callable itself must land after these lines
        self.out.flush()
    }

    /// Actual value, timing and verdict, written after the call
    pub fn case_outcome<O: Debug>(
        &mut self,
        outcome: &CaseOutcome<O>,
        expected: &O,
    ) -> io::Result<()> {
        match outcome {
            CaseOutcome::Pass { actual, elapsed } => {
                writeln!(self.out, "Actual:   {:?}", actual)?;
                writeln!(self.out, "Time:     {}", format_ms(*elapsed))?;
                let verdict = self.paint(Style::Pass, "PASS");
                writeln!(self.out, "{}\n", verdict)?;
            }
            CaseOutcome::Fail { actual, elapsed } => {
                writeln!(self.out, "Actual:   {:?}", actual)?;
                writeln!(self.out, "Time:     {}", format_ms(*elapsed))?;
                let verdict = self.paint(Style::Fail, "FAIL");
                writeln!(self.out, "{}", verdict)?;
                writeln!(self.out, "  Expected: {:?}", expected)?;
                writeln!(self.out, "  Actual:   {:?}\n", actual)?;
            }
            CaseOutcome::Error { fault, elapsed } => {
                let message =
                    self.paint(Style::Fail, &format!("ERROR during execution: {}", fault));
                writeln!(self.out, "{}", message)?;
                writeln!(self.out, "Time until error: {}", format_ms(*elapsed))?;
                let label = self.paint(Style::Warn, "Traceback:");
                writeln!(self.out, "{}", label)?;
                if self.show_trace {
                    for line in fault.trace_lines() {
                        writeln!(self.out, "{}", line)?;
                    }
                } else if let Some(location) = &fault.location {
                    writeln!(self.out, "  panicked at {}", location)?;
                }
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    /// Aggregate report framed by banner lines
    pub fn summary(&mut self, stats: &Stats) -> io::Result<()> {
        let banner = self.paint(Style::Bold, "========== TEST SUMMARY ==========");
        writeln!(self.out, "\n{}", banner)?;

        let Some(average) = stats.average() else {
            writeln!(self.out, "No tests were run.")?;
            return self.out.flush();
        };

        let style = if stats.all_passed() {
            Style::Pass
        } else {
            Style::Fail
        };
        let passed = self.paint(
            style,
            &format!("Passed {}/{} tests.", stats.passed, stats.run),
        );
        writeln!(self.out, "{}", passed)?;
        writeln!(
            self.out,
            "Total execution time for tested functions: {}",
            format_ms(stats.total)
        )?;
        writeln!(
            self.out,
            "Average time per test function call: {}",
            format_ms(average)
        )?;
        let footer = self.paint(Style::Bold, "================================");
        writeln!(self.out, "{}\n", footer)?;
        self.out.flush()
    }

    pub fn reset_notice(&mut self) -> io::Result<()> {
        self.line(Style::Info, "Test counters have been reset.")
    }
}
