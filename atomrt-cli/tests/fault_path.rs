//! Out-of-process checks of the fault contract.
//!
//! A failed bounds check writes a fixed-format block to stderr, flushes
//! it, and raises SIGABRT, so the only way to observe the contract is to
//! spawn the harness and inspect the corpse.

use std::process::{Command, Output};

const SEPARATOR: &str = "------------------------------------------------";

#[cfg(unix)]
const SIGABRT: i32 = 6;

fn expected_block(index: u64, length: u64) -> String {
    format!(
        "\n{SEPARATOR}\nATOM PANIC: Index out of bounds!\n  Index:  {index}\n  Length: {length}\n{SEPARATOR}\n"
    )
}

fn run_check(index: u64, length: u64, ffi: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_atomrt-cli"));
    cmd.arg("check")
        .args(["--index", &index.to_string()])
        .args(["--length", &length.to_string()])
        .env_remove("RUST_LOG")
        .env_remove("ATOMRT_FAULT__BACKTRACE")
        .env_remove("ATOMRT_TELEMETRY__LOG_LEVEL");
    if ffi {
        cmd.arg("--ffi");
    }
    cmd.output().expect("failed to spawn harness")
}

fn assert_aborted(output: &Output) {
    assert!(!output.status.success());
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(
            output.status.signal(),
            Some(SIGABRT),
            "expected abnormal termination, got {:?}",
            output.status
        );
        assert_eq!(output.status.code(), None);
    }
}

#[test]
fn passing_check_exits_cleanly_with_silent_stderr() {
    let output = run_check(4, 5, false);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "success path must not write to stderr");
    assert!(String::from_utf8_lossy(&output.stdout).contains("bounds check passed"));
}

#[test]
fn index_equal_to_length_aborts_with_exact_block() {
    let output = run_check(5, 5, false);
    assert_aborted(&output);
    assert_eq!(String::from_utf8_lossy(&output.stderr), expected_block(5, 5));
}

#[test]
fn empty_range_rejects_index_zero() {
    let output = run_check(0, 0, false);
    assert_aborted(&output);
    assert_eq!(String::from_utf8_lossy(&output.stderr), expected_block(0, 0));
}

#[test]
fn max_index_is_formatted_without_truncation() {
    let output = run_check(u64::MAX, 10, false);
    assert_aborted(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, expected_block(u64::MAX, 10));
    assert!(stderr.contains("  Index:  18446744073709551615\n"));
}

#[test]
fn ffi_symbol_keeps_the_same_contract() {
    let output = run_check(7, 3, true);
    assert_aborted(&output);
    assert_eq!(String::from_utf8_lossy(&output.stderr), expected_block(7, 3));
}

#[test]
fn backtrace_option_appends_after_the_block() {
    let output = Command::new(env!("CARGO_BIN_EXE_atomrt-cli"))
        .args(["check", "--index", "5", "--length", "5"])
        .env_remove("RUST_LOG")
        .env("ATOMRT_FAULT__BACKTRACE", "true")
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("failed to spawn harness");
    assert_aborted(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    // The block itself is untouched; anything extra goes after it.
    assert!(stderr.starts_with(&expected_block(5, 5)));
    assert!(stderr.len() > expected_block(5, 5).len());
}

#[test]
fn probe_reports_out_of_bounds_with_a_normal_exit() {
    let output = Command::new(env!("CARGO_BIN_EXE_atomrt-cli"))
        .args(["probe", "--index", "5", "--length", "5"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn harness");
    // Catchable path: ordinary exit code, no signal, no panic block.
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
    assert!(String::from_utf8_lossy(&output.stdout).contains("out of bounds"));
}

#[test]
fn probe_accepts_valid_index() {
    let output = Command::new(env!("CARGO_BIN_EXE_atomrt-cli"))
        .args(["probe", "--index", "4", "--length", "5"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn harness");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("in bounds"));
}
