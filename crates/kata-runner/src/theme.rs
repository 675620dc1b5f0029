//! Output styling
//!
//! Report code names a [`Style`] and lets the [`Theme`] decide what that looks
//! like, so color can be switched off without touching call sites.

use crate::config::RunnerConfig;
use colored::Colorize;
use std::io::{self, IsTerminal};

/// Role of a piece of report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Case headers
    Header,
    /// Passing verdicts and summaries
    Pass,
    /// Failing verdicts and error messages
    Fail,
    /// Warnings and traceback labels
    Warn,
    /// Informational notices
    Info,
    /// Emphasis, summary banners
    Bold,
}

/// Renders styled text
pub trait Theme: Send + Sync {
    fn paint(&self, style: Style, text: &str) -> String;
}

/// ANSI colors via `colored`
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTheme;

impl Theme for ColorTheme {
    fn paint(&self, style: Style, text: &str) -> String {
        let styled = match style {
            Style::Header => text.bright_magenta(),
            Style::Pass => text.bright_green(),
            Style::Fail => text.bright_red(),
            Style::Warn => text.bright_yellow(),
            Style::Info => text.bright_blue(),
            Style::Bold => text.bold(),
        };
        styled.to_string()
    }
}

/// No styling at all
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a theme for stdout: plain when color is disabled or stdout is not a terminal
pub fn detect(config: &RunnerConfig) -> Box<dyn Theme> {
    if config.no_color || !io::stdout().is_terminal() {
        Box::new(PlainTheme)
    } else {
        Box::new(ColorTheme)
    }
}
