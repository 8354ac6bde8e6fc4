//! Integration tests for the `convert` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("gradescan").unwrap()
}

#[test]
fn convert_a_on_five_point_scale() {
    cmd()
        .args(["convert", "A", "--scale", "5"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn convert_plus_variant() {
    cmd()
        .args(["convert", "B+", "--scale", "4"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn convert_unknown_letter_is_zero() {
    cmd()
        .args(["convert", "X", "--scale", "5"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn convert_rejects_invalid_scale() {
    cmd()
        .args(["convert", "A", "--scale", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
