use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn bfhl() -> Command {
    let mut cmd = Command::cargo_bin("bfhl").unwrap();
    cmd.env_remove("BFHL_CONFIG").env_remove("BFHL_ENDPOINT");
    cmd
}

#[test]
fn test_help_lists_commands() {
    bfhl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("form"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_submit_help_lists_filters() {
    bfhl()
        .args(["submit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("highest_lowercase_alphabet"));
}

#[test]
fn test_no_command_prints_guidance() {
    bfhl()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"));
}

#[test]
fn test_unknown_filter_is_a_usage_error() {
    bfhl()
        .args(["submit", "--input", "{}", "--filter", "vowels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vowels"));
}
