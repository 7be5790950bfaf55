use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn binary_prints_only_the_greeting() {
    Command::cargo_bin("hello-world")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn diagnostics_go_to_stderr() {
    Command::cargo_bin("hello-world")
        .unwrap()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::contains("wrote greeting"));
}

#[test]
fn unparsable_log_filter_falls_back_to_warnings() {
    Command::cargo_bin("hello-world")
        .unwrap()
        .env("RUST_LOG", "=not a filter=")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::is_empty());
}
