//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibmat() -> Command {
    Command::cargo_bin("fibmat").expect("binary not found")
}

#[test]
fn help_flag() {
    fibmat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn hex_f10() {
    fibmat()
        .args(["hex", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0000000000000037\n"));
}

#[test]
fn hex_f0_canonical_zero() {
    fibmat()
        .args(["hex", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0000000000000000\n"));
}

#[test]
fn hex_f100_multi_word() {
    fibmat()
        .args(["hex", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("000000000000001333db76a7c594bfc3\n"));
}

#[test]
fn hex_paired_algo_matches() {
    fibmat()
        .args(["hex", "100", "--algo", "paired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("000000000000001333db76a7c594bfc3\n"));
}

#[test]
fn hex_reports_size_on_stderr() {
    fibmat()
        .args(["hex", "100"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Result size: 16 B"));
}

#[test]
fn hex_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.hex");
    fibmat()
        .args(["hex", "20", path.to_str().unwrap()])
        .assert()
        .success();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "0000000000001a6d\n");
}

#[test]
fn invalid_index_rejected_before_compute() {
    fibmat().args(["hex", "ten"]).assert().failure();
    fibmat().args(["hex", "-5"]).assert().failure();
    fibmat().args(["hex", "0x10"]).assert().failure();
    // larger than u64
    fibmat()
        .args(["hex", "99999999999999999999999"])
        .assert()
        .failure();
}

#[test]
fn timeout_exits_with_timeout_code() {
    fibmat()
        .args(["hex", "50000000", "--timeout", "5ms"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn generous_timeout_still_computes() {
    fibmat()
        .args(["hex", "10", "--timeout", "1m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0000000000000037\n"));
}

#[test]
fn compare_agrees() {
    fibmat()
        .args(["compare", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results agree."));
}

#[test]
fn endianness_prints_byte_order() {
    fibmat()
        .arg("endianness")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^(little|big)\n$").unwrap());
}
