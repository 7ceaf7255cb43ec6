use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn queryguard_cmd() -> Command {
    Command::cargo_bin("queryguard").expect("queryguard binary")
}

#[test]
fn help_works() {
    queryguard_cmd().arg("--help").assert().success();
}

#[test]
fn help_lists_subcommands() {
    queryguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("explain"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("connection"));
}

#[test]
fn validate_help_lists_flags() {
    queryguard_cmd()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target-id"))
        .stdout(predicate::str::contains("--emit-request"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn version_works() {
    queryguard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("queryguard"));
}

#[test]
fn missing_target_id_is_a_usage_error() {
    queryguard_cmd()
        .args(["validate", "--query", "SELECT 1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--target-id"));
}
