use std::process::Command;

use fibo_common::{wrapping_nth, OverflowPolicy, SequenceError, MAX_INDEX};
use fibo_runner::{run_fibonacci, RunnerError, RunnerOptions, RunnerOutput, DEFAULT_INDEX};
use proptest::prelude::*;

#[test]
fn test_demonstration_run_returns_eight() {
    let output = run_fibonacci(DEFAULT_INDEX, RunnerOptions::default()).unwrap();
    assert_eq!(
        output,
        RunnerOutput {
            value: 8,
            additions: 5
        }
    );
}

#[test]
fn test_value_table() {
    let expected = [0u64, 1, 1, 2, 3, 5, 8];
    for (offset, expected_value) in expected.iter().enumerate() {
        let index = offset as i64 + 1;
        let output = run_fibonacci(index, RunnerOptions::default()).unwrap();
        assert_eq!(output.value, *expected_value, "index {index}");
    }
}

#[test]
fn test_non_positive_indices_rejected() {
    for index in [0i64, -1, -42] {
        let err = run_fibonacci(index, RunnerOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Sequence(SequenceError::InvalidIndex(n)) if n == index
        ));
    }
}

#[test]
fn test_overflow_policy_dispatch() {
    let beyond = (MAX_INDEX + 1) as i64;

    let err = run_fibonacci(beyond, RunnerOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Sequence(SequenceError::ValueOverflow { .. })
    ));

    let saturated = run_fibonacci(
        beyond,
        RunnerOptions {
            overflow: OverflowPolicy::Saturate,
        },
    )
    .unwrap();
    assert_eq!(saturated.value, u64::MAX);

    let wrapped = run_fibonacci(
        beyond,
        RunnerOptions {
            overflow: OverflowPolicy::Wrap,
        },
    )
    .unwrap();
    assert_eq!(wrapped.value, wrapping_nth(MAX_INDEX + 1).unwrap());
}

proptest! {
    #[test]
    fn test_matches_sequence_walk(index in 1i64..=MAX_INDEX as i64) {
        let output = run_fibonacci(index, RunnerOptions::default()).unwrap();
        assert_eq!(output.value, fibo_common::nth(index as u64).unwrap());
        assert_eq!(output.additions, (index as u64).saturating_sub(2));
    }
}

#[test]
fn test_binary_prints_single_line_eight() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibo-runner"))
        .output()
        .expect("failed to run fibo-runner");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "8\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_binary_evaluates_requested_index() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibo-runner"))
        .arg("10")
        .output()
        .expect("failed to run fibo-runner");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "34\n");
}

#[test]
fn test_binary_reports_invalid_index() {
    let output = Command::new(env!("CARGO_BIN_EXE_fibo-runner"))
        .args(["--", "-3"])
        .output()
        .expect("failed to run fibo-runner");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid index -3"), "stderr: {stderr}");
}
