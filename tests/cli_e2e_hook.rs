//! E2E tests for the `hook` subcommand (post-checkout mode).

mod common;

use common::TestFixture;
use predicates::prelude::*;

const ZERO_OID: &str = "0000000000000000000000000000000000000000";
const SOME_OID: &str = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";

#[test]
fn test_hook_ignores_ordinary_branch_switch() {
    let fixture = TestFixture::new().with_local_identity();
    fixture.add_identity("jdoe@github.com", "John Doe", "jdoe@example.com");
    fixture.add_remote("origin", "git@github.com:jdoe/myrepo.git");

    fixture
        .persona_cmd()
        .args(["hook", SOME_OID, SOME_OID, "1"])
        .assert()
        .success();

    // Not a fresh checkout: nothing was applied.
    assert!(!fixture.local_config().contains("[user]"));
}

#[test]
fn test_hook_applies_on_fresh_checkout() {
    let fixture = TestFixture::new().with_local_identity();
    fixture.add_identity("jdoe@github.com", "John Doe", "jdoe@example.com");
    fixture.add_remote("origin", "git@github.com:jdoe/myrepo.git");

    fixture
        .persona_cmd()
        .args(["hook", ZERO_OID, SOME_OID, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jdoe@github.com"));

    let config = fixture.local_config();
    assert!(config.contains("name = John Doe"));
    assert!(config.contains("email = jdoe@example.com"));
}

#[test]
fn test_hook_accepts_sha256_zero_oid() {
    let fixture = TestFixture::new().with_local_identity();

    let zero_sha256 = "0".repeat(64);
    fixture
        .persona_cmd()
        .args(["hook", zero_sha256.as_str(), SOME_OID, "1"])
        .assert()
        .success();

    assert!(fixture.local_config().contains("name = Local User"));
}

#[test]
fn test_hook_never_prompts_on_ambiguity() {
    let fixture = TestFixture::new().with_local_identity();
    fixture
        .add_identity("jdoe@github.com", "John Doe", "jdoe@example.com")
        .add_identity("flurrycat@github.com", "Flurry Cat", "cat@example.com");
    fixture.add_remote("upstream", "https://github.com/c-alpha/gituser");

    fixture
        .persona_cmd()
        .args(["hook", ZERO_OID, SOME_OID, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("git-persona apply"));

    assert!(!fixture.local_config().contains("[user]"));
}

#[test]
fn test_hook_fresh_checkout_without_remotes_uses_local() {
    let fixture = TestFixture::new().with_local_identity();

    fixture
        .persona_cmd()
        .args(["hook", ZERO_OID, SOME_OID, "1"])
        .assert()
        .success();

    assert!(fixture.local_config().contains("email = local@home.example"));
}
