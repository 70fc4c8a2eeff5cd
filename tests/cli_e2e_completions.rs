//! E2E tests for the `completions` subcommand.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    let fixture = TestFixture::new();

    fixture
        .persona_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git-persona"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    let fixture = TestFixture::new();

    fixture
        .persona_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
