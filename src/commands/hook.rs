//! # Hook Command Implementation
//!
//! This module implements the `hook` subcommand, intended to be invoked as a
//! git `post-checkout` hook:
//!
//! ```sh
//! #!/bin/sh
//! exec git-persona hook "$1" "$2" "$3"
//! ```
//!
//! Git passes the previous HEAD, the new HEAD, and a branch-checkout flag.
//! The hook only acts on a fresh checkout, recognizable by an all-zero
//! previous HEAD; on ordinary branch switches it exits silently. It never
//! prompts: identities are applied only when resolution is unambiguous, and
//! anything else leaves the configuration untouched and prints a reminder.

use anyhow::Result;
use clap::Args;

use git_persona::catalog::Catalog;
use git_persona::defaults;
use git_persona::output::OutputConfig;
use git_persona::walker;

use super::apply::report;

/// Run as a git post-checkout hook (never prompts)
#[derive(Args, Debug)]
pub struct HookArgs {
    /// Previous HEAD ref, as passed by git (all zeros on a fresh checkout)
    pub previous_head: String,

    /// New HEAD ref, as passed by git
    pub new_head: String,

    /// Branch-checkout flag, as passed by git (1 = branch, 0 = file)
    pub branch_flag: String,
}

/// Execute the `hook` command.
pub fn execute(args: HookArgs, out: &OutputConfig) -> Result<()> {
    // The zero OID is 40 characters for sha1 repositories and 64 for
    // sha256 ones; either way it is all zeros.
    let fresh_checkout =
        !args.previous_head.is_empty() && args.previous_head.chars().all(|c| c == '0');
    if !fresh_checkout {
        log::debug!(
            "not a fresh checkout ({} -> {}), nothing to do",
            args.previous_head,
            args.new_head
        );
        return Ok(());
    }

    let catalog_root = defaults::catalog_root();
    let catalog = Catalog::scan(&catalog_root)?;

    let root = std::env::current_dir()?;
    for workspace in &walker::discover(&root, ".")? {
        // No selector: hook mode is always batch.
        report(
            workspace,
            walker::resolve_workspace(workspace, &catalog, None)?,
            out,
        );
    }

    Ok(())
}
