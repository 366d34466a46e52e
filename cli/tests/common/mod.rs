//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the arrkit binary.
pub fn arrkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arrkit"))
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    let output = arrkit().args(args).output().expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Run a command and check that stderr matches the expected output.
pub fn check_stderr(args: &[&str], expected: Expect) {
    let output = arrkit().args(args).output().expect("failed to execute command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    expected.assert_eq(&stderr);
}
