use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn basic_functions() -> assert_cmd::Command {
    cargo_bin_cmd!("basic-functions")
}

#[test]
fn prints_sum_greeting_and_factorial() {
    basic_functions()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("5 + 3 = 8\nHello, Alice!\n5! = 120\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn ignores_arguments() {
    basic_functions()
        .env_remove("RUST_LOG")
        .args(["--unused", "value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 + 3 = 8"))
        .stdout(predicate::str::contains("5! = 120"));
}

#[test]
fn debug_logging_stays_on_stderr() {
    basic_functions()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("5 + 3 = 8\nHello, Alice!\n5! = 120\n")
        .stderr(predicate::str::contains("5! = 120"));
}
