//! End-to-end CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn decmath() -> Command {
    Command::cargo_bin("decmath").expect("binary not found")
}

#[test]
fn help_flag() {
    decmath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal"));
}

#[test]
fn version_flag() {
    decmath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("decmath"));
}

#[test]
fn multiply_default_op() {
    decmath()
        .args(["1234", "9876"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12186984"));
}

#[test]
fn multiply_twelve_digit_operands() {
    decmath()
        .args(["123456789012", "987654321098"])
        .assert()
        .success()
        .stdout(predicate::str::contains("121932631136585886175176"));
}

#[test]
fn multiply_all_algorithms_agree() {
    decmath()
        .args(["--algo", "all", "-q", "123456789012", "987654321098"])
        .assert()
        .success()
        .stdout(predicate::str::contains("121932631136585886175176"));
}

#[test]
fn multiply_forced_fft() {
    decmath()
        .args(["--algo", "fft", "99999", "99999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9999800001"));
}

#[test]
fn add_mixed_signs() {
    decmath()
        .args(["--op", "add", "-12563", "12563"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

#[test]
fn sub_yields_negative() {
    decmath()
        .args(["--op", "sub", "2", "199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-197"));
}

#[test]
fn cmp_reports_ordering() {
    decmath()
        .args(["--op", "cmp", "-5", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("less"));

    decmath()
        .args(["--op", "cmp", "007", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("equal"));
}

#[test]
fn invalid_operand_exits_with_config_code() {
    decmath()
        .args(["12a4", "5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid operand"));
}

#[test]
fn unknown_op_exits_with_config_code() {
    decmath()
        .args(["--op", "div", "6", "3"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn sum_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "100").unwrap();
    writeln!(file, "# comment line").unwrap();
    writeln!(file, "-30").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "5").unwrap();
    file.flush().unwrap();

    decmath()
        .args(["--input", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("75"));
}

#[test]
fn sum_input_file_missing() {
    decmath()
        .args(["--input", "/nonexistent/numbers.txt"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn timings_go_to_stderr() {
    decmath()
        .args(["--timings", "--algo", "all", "1234", "9876"])
        .assert()
        .success()
        .stderr(predicate::str::contains("karatsuba"));
}

#[test]
fn completion_bash() {
    decmath()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decmath"));
}
