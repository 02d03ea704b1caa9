//! Integration test: the `artbench` binary's output line and exit status.
//!
//! The process must exit 0 whether or not checks fail or the
//! configuration is rejected.

use std::process::{Command, Output};

fn artbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_artbench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn artbench")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn default_run_prints_one_line_and_exits_zero() {
    let out = artbench(&[]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert_eq!(text.lines().count(), 1, "stdout: {text:?}");
    assert!(text.ends_with('\n'));
    let line = text.trim_end();
    assert!(line.starts_with("10000 took "), "line: {line}");
    assert!(line.contains("s (sum="), "line: {line}");
    assert!(line.ends_with(')'), "line: {line}");
}

#[test]
fn anti_op_three_iterations_line() {
    let out = artbench(&["--iterations", "3", "--hook", "anti-op"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "3 took 0s (sum=1)\n");
}

#[test]
fn zero_iterations_line() {
    let out = artbench(&["--iterations", "0", "--hook", "noop"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "0 took 0s (sum=0)\n");
}

#[test]
fn invalid_config_still_exits_zero() {
    let out = artbench(&["--p-one", "2"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid configuration"), "stderr: {err}");
}

#[test]
fn failed_assertions_still_exit_zero() {
    let out = artbench(&["--iterations", "3", "--hook", "sign-check"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "3 took 0s (sum=1)\n");
    let err = String::from_utf8_lossy(&out.stderr);
    assert_eq!(
        err.matches("assertion failed in hook 'sign-check' at iteration 2").count(),
        1,
        "stderr: {err}"
    );
}

#[test]
fn same_seed_same_sum() {
    let a = artbench(&["--iterations", "2000", "--seed", "11"]);
    let b = artbench(&["--iterations", "2000", "--seed", "11"]);
    let sum = |o: &Output| {
        let s = stdout(o);
        s.rsplit("sum=").next().map(|t| t.trim_end().to_string())
    };
    assert_eq!(sum(&a), sum(&b));
}
