// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `harf` binary end to end. The clipboard is never touched here, since CI
//! machines usually have no display server.

use std::io::Write;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use test_case::test_case;

const EXPORT_TOKENS: &str = "\\u00CA\\u00D5\\u00CF\\u00ED\\u00D1";

fn harf() -> Command { Command::cargo_bin("harf").unwrap() }

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn encode_positional_text() {
    let output = harf().args(["encode", "تصدير"]).ok().unwrap();
    assert_eq!(stdout_of(&output), format!("{EXPORT_TOKENS}\n"));
    assert_eq!(stderr_of(&output), "");
}

#[test]
fn decode_from_stdin_drops_trailing_newline() {
    let output = harf()
        .arg("decode")
        .write_stdin(format!("{EXPORT_TOKENS}\n"))
        .ok()
        .unwrap();
    assert_eq!(stdout_of(&output), "تصدير\n");
}

#[test]
fn encode_from_stdin_drops_trailing_newline() {
    let output = harf().arg("encode").write_stdin("ا\r\n").ok().unwrap();
    assert_eq!(stdout_of(&output), "\\u00C7\n");
}

#[test]
fn encode_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "پاکستان").unwrap();
    let output = harf()
        .args(["encode", "--file"])
        .arg(file.path())
        .ok()
        .unwrap();
    let expected = "\\u0081\\u00C7\\u0098\\u00D3\\u00CA\\u00C7\\u00E4\n";
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn decode_skips_surrounding_text() {
    let output = harf()
        .args(["decode", "hello\\u00C7world"])
        .ok()
        .unwrap();
    assert_eq!(stdout_of(&output), "ا\n");
}

#[test]
fn lossy_encode_warns_on_stderr() {
    let output = harf().args(["encode", "😀"]).ok().unwrap();
    assert_eq!(
        stdout_of(&output),
        "\\u00F0\\u009F\\u0098\\u0080\n"
    );
    assert!(stderr_of(&output).contains("1 fallback(s)"));
}

#[test_case("encode", "€" ; "unmapped char")]
#[test_case("decode", "\\u0080" ; "unmapped byte")]
fn strict_lossy_conversion_fails(subcommand: &str, input: &str) {
    let output = harf()
        .args([subcommand, "--strict", input])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert!(stderr_of(&output).contains("is lossy"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = harf()
        .args(["encode", "--file"])
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Could not read input"));
}

#[test]
fn table_json_lists_every_entry() {
    let output = harf().args(["table", "--json"]).ok().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), harf_core::FORWARD_TABLE.len());
    assert!(rows.contains(&serde_json::json!({ "codepoint": "ے", "byte": 255 })));
}

#[test]
fn table_text() {
    let output = harf().arg("table").ok().unwrap();
    let stdout = stdout_of(&output);
    assert!(stdout.lines().any(|line| line == "0xA1  U+060C  ،"));
}

#[test]
fn no_args_prints_help_and_fails() {
    let output = harf().output().unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("USAGE"));
}

#[test]
fn enable_logging_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("harf_test_log.txt");
    harf()
        .args(["encode", "€", "-l", "--log-file"])
        .arg(&log_file)
        .ok()
        .unwrap();
    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Start logging..."), "log: {contents}");
    assert!(contents.contains("Char is not in the code page"), "log: {contents}");
}

#[test]
fn logging_is_off_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("harf_test_log.txt");
    harf()
        .args(["encode", "x", "--log-file"])
        .arg(&log_file)
        .ok()
        .unwrap();
    assert!(!log_file.exists());
}
