//! Integration tests for the expense settler CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_settler(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Output order is deterministic, so compare line by line without sorting.
fn lines(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn assert_matches_expected(input: &str, expected: &str) {
    let output = run_settler(&test_data_path(input));
    let expected = fs::read_to_string(test_data_path(expected)).unwrap();
    assert_eq!(lines(&output), lines(&expected));
}

#[test]
fn test_sample_a_four_way_split() {
    assert_matches_expected("sample_a.csv", "expected_a.csv");
}

#[test]
fn test_sample_b_group_with_remainders_and_skips() {
    assert_matches_expected("sample_b_group.csv", "expected_b.csv");
}

#[test]
fn test_sample_c_whitespace_handling() {
    assert_matches_expected("sample_c_whitespace.csv", "expected_c.csv");
}

#[test]
fn test_sample_d_full_offset_writes_header_only() {
    assert_matches_expected("sample_d_offset.csv", "expected_d.csv");
}

#[test]
fn test_reads_from_stdin() {
    let input = fs::read_to_string(test_data_path("sample_a.csv")).unwrap();
    let expected = fs::read_to_string(test_data_path("expected_a.csv")).unwrap();

    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    let assert = cmd.arg("-").write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(lines(&output), lines(&expected));
}

#[test]
fn test_negative_amount_rejected() {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg(test_data_path("invalid_negative.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Invalid amount: -100 (must be non-negative)",
        ));
}

#[test]
fn test_duplicate_beneficiary_rejected() {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg(test_data_path("invalid_duplicate.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate beneficiary: 'B'"));
}

#[test]
fn test_fractional_amount_rejected_with_row() {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg(test_data_path("invalid_fraction.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("row 3"));
}

#[test]
fn test_empty_payer_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "amount,payer,beneficiaries").unwrap();
    writeln!(file, "100,A,B").unwrap();
    writeln!(file, "100,,B").unwrap();

    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid payer: empty string"));
}

#[test]
fn test_empty_beneficiary_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "amount,payer,beneficiaries").unwrap();
    writeln!(file, "100,A,B;;C").unwrap();

    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid beneficiary: empty string"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("expense-settler").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_settler(&test_data_path("sample_a.csv"));
    assert!(output.starts_with("from,to,amount"));
}
