//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture that builds throwaway git repositories and
//! identity catalogs, plus a pre-wired command for the `git-persona` binary.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then:
//!
//! ```rust,ignore
//! mod common;
//! use common::TestFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_local_identity();
//!     fixture.persona_cmd().arg("apply").assert().success();
//! }
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use assert_fs::TempDir;

/// A throwaway git repository plus identity catalog.
pub struct TestFixture {
    temp: TempDir,
}

impl TestFixture {
    /// Create a fixture with an initialized git repository and an empty
    /// identity catalog directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let fixture = Self { temp };
        fs::create_dir_all(fixture.repo_dir()).expect("create repo dir");
        fs::create_dir_all(fixture.ids_dir()).expect("create identities dir");
        fixture.git(&["init", "-q"]);
        fixture
    }

    /// The working copy under test.
    pub fn repo_dir(&self) -> PathBuf {
        self.temp.path().join("repo")
    }

    /// The identity catalog root handed to the binary via `GIT_PERSONA_DIR`.
    pub fn ids_dir(&self) -> PathBuf {
        self.temp.path().join("identities")
    }

    /// Run a git command inside the repository.
    pub fn git(&self, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(self.repo_dir())
            .status()
            .expect("run git");
        assert!(status.success(), "git {args:?} failed");
    }

    /// Configure a remote on the repository.
    pub fn add_remote(&self, name: &str, url: &str) -> &Self {
        self.git(&["remote", "add", name, url]);
        self
    }

    /// Add an identity file to the catalog.
    pub fn add_identity(&self, key: &str, name: &str, email: &str) -> &Self {
        fs::write(
            self.ids_dir().join(key),
            format!("[user]\n\tname = {name}\n\temail = {email}\n"),
        )
        .expect("write identity file");
        self
    }

    /// Add a conventional `local` identity.
    pub fn with_local_identity(self) -> Self {
        self.add_identity("local", "Local User", "local@home.example");
        self
    }

    /// The `git-persona` binary, running inside the repository with the
    /// fixture's catalog selected.
    pub fn persona_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("git-persona").expect("binary under test");
        cmd.current_dir(self.repo_dir());
        cmd.env("GIT_PERSONA_DIR", self.ids_dir());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// The repository's local config file contents.
    pub fn local_config(&self) -> String {
        fs::read_to_string(self.repo_dir().join(".git/config")).expect("read local config")
    }
}
