//! CLI end-to-end tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn kata_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kata").unwrap();
    cmd.env_remove("KATA_LOG").env("KATA_BACKTRACE", "0");
    cmd
}

// ══════════════════════════════════════════════════════════════════════════════
// DEMO
// ══════════════════════════════════════════════════════════════════════════════

mod demo {
    use super::*;

    #[test]
    fn test_demo_reports_every_verdict() {
        kata_cmd()
            .args(["demo", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--- Test #1: add ---"))
            .stdout(predicate::str::contains("Inputs: (2, 3)"))
            .stdout(predicate::str::contains("PASS"))
            .stdout(predicate::str::contains("FAIL\n  Expected: 6\n  Actual:   5"))
            .stdout(predicate::str::contains(
                "ERROR during execution: attempt to divide by zero",
            ))
            .stdout(predicate::str::contains("Passed 3/6 tests."))
            .stdout(predicate::str::contains("========== TEST SUMMARY =========="));
    }

    #[test]
    fn test_demo_no_color_has_no_escape_codes() {
        kata_cmd()
            .args(["demo", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_demo_caught_panics_stay_off_stderr() {
        kata_cmd()
            .arg("demo")
            .env("NO_COLOR", "1")
            .assert()
            .success()
            .stderr(predicate::str::contains("panicked").not());
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// NEW
// ══════════════════════════════════════════════════════════════════════════════

mod new {
    use super::*;

    #[test]
    fn test_new_creates_solution() {
        let dir = TempDir::new().unwrap();

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Two Sum", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created solution for 'Two Sum'"))
            .stdout(predicate::str::contains("cargo run --bin two_sum"));

        let source = fs::read_to_string(dir.path().join("src/bin/two_sum.rs")).unwrap();
        assert!(source.contains("pub fn two_sum("));
        assert!(source.contains("suite.summary();"));
    }

    #[test]
    fn test_new_with_alias_and_options() {
        let dir = TempDir::new().unwrap();

        kata_cmd()
            .current_dir(dir.path())
            .args(["n", "Reverse Linked List", "-f", "reverse_list", "-d", "solutions"])
            .assert()
            .success();

        let source =
            fs::read_to_string(dir.path().join("solutions/reverse_linked_list.rs")).unwrap();
        assert!(source.contains("pub fn reverse_list("));
    }

    #[test]
    fn test_new_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Jump Game"])
            .assert()
            .success();

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Jump Game"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Jump Game", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn test_new_rejects_invalid_function_name() {
        let dir = TempDir::new().unwrap();

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Two Sum", "--function", "fn"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("reserved keyword"));

        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_new_reports_bad_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("kata.toml"), "[scaffold]\nunknown = 1\n").unwrap();

        kata_cmd()
            .current_dir(dir.path())
            .args(["new", "Two Sum"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load kata.toml"));
    }
}

#[test]
fn test_requires_subcommand() {
    kata_cmd().assert().failure();
}
