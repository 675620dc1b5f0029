//! Runner configuration via environment variables
//!
//! The runner has no config file; a couple of environment variables adjust
//! how reports look.

use std::env;

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Disable colored output (KATA_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Capture backtraces for panicking cases (KATA_BACKTRACE, defaults to true)
    pub backtrace: bool,
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            no_color: lookup("KATA_NO_COLOR").is_some() || lookup("NO_COLOR").is_some(),
            backtrace: lookup("KATA_BACKTRACE")
                .map(|v| {
                    let lower = v.to_lowercase();
                    !(lower == "0" || lower == "false" || lower == "off")
                })
                .unwrap_or(true),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
