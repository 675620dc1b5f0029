//! Panic capture at the boundary of the code under test
//!
//! A panic inside the callable becomes a [`Fault`] instead of unwinding into
//! the suite. One process-wide panic hook is installed on first use. While a
//! thread is inside [`catch`] the hook records the panic location and a
//! backtrace into a thread-local slot and prints nothing; panics anywhere else
//! go to whatever hook was installed before.
//!
//! The hook stamps the instant of the panic and takes an unresolved
//! backtrace; symbol resolution happens after unwinding, outside the time
//! charged to the case.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

/// Error descriptor for a case that did not produce a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Panic payload or error message
    pub message: String,
    /// `file:line:col` the panic was raised at
    pub location: Option<String>,
    /// Rendered backtrace, if one was captured
    pub backtrace: Option<String>,
}

impl Fault {
    /// A fault carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            backtrace: None,
        }
    }

    /// Build a fault from an error returned by a fallible callable
    pub fn from_error<E: fmt::Display + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string())
    }

    fn from_panic(payload: Box<dyn Any + Send>, captured: Option<Captured>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };

        let (location, backtrace) = match captured {
            Some(c) => (c.location, c.backtrace.map(|b| b.to_string())),
            None => (None, None),
        };

        Self {
            message,
            location,
            backtrace,
        }
    }

    /// Lines of the traceback section of a report
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(location) = &self.location {
            lines.push(format!("  panicked at {}", location));
        }
        if let Some(backtrace) = &self.backtrace {
            lines.extend(backtrace.lines().map(|l| format!("  {}", l.trim_end())));
        }
        if lines.is_empty() {
            lines.push("  (no backtrace available)".to_string());
        }
        lines
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Fault {}

struct Captured {
    raised_at: Instant,
    location: Option<String>,
    backtrace: Option<Backtrace>,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static WANT_BACKTRACE: Cell<bool> = const { Cell::new(true) };
    static LAST_PANIC: RefCell<Option<Captured>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let raised_at = Instant::now();
            if !CAPTURING.with(Cell::get) {
                previous(info);
                return;
            }
            let location = info.location().map(|l| l.to_string());
            let backtrace = WANT_BACKTRACE.with(Cell::get).then(Backtrace::force_capture);
            LAST_PANIC.with(|slot| {
                *slot.borrow_mut() = Some(Captured {
                    raised_at,
                    location,
                    backtrace,
                })
            });
        }));
    });
}

/// Run `f`, converting a panic into a [`Fault`].
///
/// `backtrace` controls whether a backtrace is captured for the fault.
pub fn catch<O>(f: impl FnOnce() -> O, backtrace: bool) -> Result<O, Fault> {
    catch_timed(f, backtrace).map_err(|(fault, _)| fault)
}

/// Like [`catch`], also returning the instant the panic was raised.
///
/// Falls back to the end of unwinding when another hook replaced ours and
/// the raise instant was not recorded.
pub fn catch_timed<O>(f: impl FnOnce() -> O, backtrace: bool) -> Result<O, (Fault, Instant)> {
    install_hook();
    LAST_PANIC.with(|slot| slot.borrow_mut().take());
    let was_capturing = CAPTURING.with(|c| c.replace(true));
    let wanted = WANT_BACKTRACE.with(|c| c.replace(backtrace));

    let result = panic::catch_unwind(AssertUnwindSafe(f));

    CAPTURING.with(|c| c.set(was_capturing));
    WANT_BACKTRACE.with(|c| c.set(wanted));

    result.map_err(|payload| {
        let unwound_at = Instant::now();
        let captured = LAST_PANIC.with(|slot| slot.borrow_mut().take());
        let raised_at = captured.as_ref().map_or(unwound_at, |c| c.raised_at);
        (Fault::from_panic(payload, captured), raised_at)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_returns_value() {
        assert_eq!(catch(|| 40 + 2, true), Ok(42));
    }

    #[test]
    fn test_catch_static_str_panic() {
        let fault = catch(|| -> i32 { panic!("boom") }, false).unwrap_err();
        assert_eq!(fault.message, "boom");
        assert!(fault.location.as_deref().unwrap().contains("fault.rs"));
        assert!(fault.backtrace.is_none());
    }

    #[test]
    fn test_catch_formatted_panic() {
        let n = 3;
        let fault = catch(|| -> i32 { panic!("bad input {}", n) }, false).unwrap_err();
        assert_eq!(fault.message, "bad input 3");
    }

    #[test]
    fn test_catch_division_by_zero() {
        let divide = |x: i32| 1 / x;
        let fault = catch(|| divide(0), true).unwrap_err();
        assert!(fault.message.contains("divide by zero"));
        assert!(fault.backtrace.is_some());
    }

    #[test]
    fn test_catch_non_string_payload() {
        let fault = catch(|| std::panic::panic_any(17_u8), false).unwrap_err();
        assert_eq!(fault.message, "non-string panic payload");
    }

    #[test]
    fn test_capturing_flag_restored() {
        let _ = catch(|| -> () { panic!("first") }, false);
        assert!(!CAPTURING.with(Cell::get));
        let fault = catch(|| -> () { panic!("second") }, false).unwrap_err();
        assert_eq!(fault.message, "second");
    }

    #[test]
    fn test_nested_catch() {
        let outer = catch(
            || {
                let inner = catch(|| -> i32 { panic!("inner") }, false);
                assert!(inner.is_err());
                panic!("outer")
            },
            false,
        );
        let fault: Fault = match outer {
            Ok(()) => unreachable!(),
            Err(f) => f,
        };
        assert_eq!(fault.message, "outer");
        assert!(fault.location.is_some());
    }

    #[test]
    fn test_catch_timed_stamps_the_panic() {
        let before = Instant::now();
        let (fault, raised_at) = catch_timed(|| -> i32 { panic!("stamped") }, true).unwrap_err();
        let after = Instant::now();

        assert_eq!(fault.message, "stamped");
        assert!(fault.backtrace.is_some());
        assert!(raised_at >= before);
        assert!(raised_at <= after);
    }

    #[test]
    fn test_trace_lines() {
        let fault = Fault {
            message: "m".to_string(),
            location: Some("src/lib.rs:1:1".to_string()),
            backtrace: Some("   0: frame\n   1: frame\n".to_string()),
        };
        assert_eq!(
            fault.trace_lines(),
            vec![
                "  panicked at src/lib.rs:1:1".to_string(),
                "     0: frame".to_string(),
                "     1: frame".to_string(),
            ]
        );
        assert_eq!(
            Fault::new("x").trace_lines(),
            vec!["  (no backtrace available)".to_string()]
        );
    }

    #[test]
    fn test_from_error() {
        let err = "12x".parse::<i32>().unwrap_err();
        let fault = Fault::from_error(&err);
        assert_eq!(fault.message, "invalid digit found in string");
        assert_eq!(fault.to_string(), fault.message);
    }
}
