// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `tracing_test_bin` binary and checks where its logs end up.
//!
//! Note that `Command::cargo_bin` only works if the binary has been built, which
//! `cargo test` does for integration tests.

use assert_cmd::Command;

const EXPECTED: [&str; 6] = [
    "error",
    "warn",
    "info",
    "debug",
    "Char is not in the code page",
    "Byte is not mapped",
];

const NOT_EXPECTED: &str = "trace";

#[test]
fn stdout() {
    let output = Command::cargo_bin("tracing_test_bin")
        .unwrap()
        .arg("stdout")
        .ok()
        .unwrap();

    let stdout = String::from_utf8_lossy(output.stdout.as_slice());
    for it in EXPECTED {
        assert!(stdout.contains(it), "missing {it:?} in {stdout}");
    }
    assert!(!stdout.contains(NOT_EXPECTED));
    assert!(output.stderr.is_empty());
}

#[test]
fn stderr() {
    let output = Command::cargo_bin("tracing_test_bin")
        .unwrap()
        .arg("stderr")
        .ok()
        .unwrap();

    let stderr = String::from_utf8_lossy(output.stderr.as_slice());
    for it in EXPECTED {
        assert!(stderr.contains(it), "missing {it:?} in {stderr}");
    }
    assert!(!stderr.contains(NOT_EXPECTED));
    assert!(output.stdout.is_empty());
}
