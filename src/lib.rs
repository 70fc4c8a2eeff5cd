//! # git-persona Library
//!
//! This library provides the core functionality for resolving and applying
//! per-repository git commit identities. It is designed to be used by the
//! `git-persona` command-line tool but can also be integrated into other
//! applications that need to correlate repository remotes with a local
//! identity catalog.
//!
//! ## Quick Example
//!
//! ```
//! use git_persona::remote_url;
//!
//! let url = remote_url::parse("git@github.com:jdoe/myrepo.git");
//! assert_eq!(url.user.as_deref(), Some("jdoe"));
//! assert_eq!(url.authority, "github.com");
//! assert_eq!(url.path, "/myrepo.git");
//! ```
//!
//! ## Core Concepts
//!
//! - **Identity Catalog (`catalog`)**: a directory of identity files, one
//!   per forge account, scanned once per run into an immutable lookup keyed
//!   by `user@authority` (or the sentinel `local`).
//! - **URL Parser (`remote_url`)**: best-effort decomposition of remote URLs
//!   into `(user, authority, path)` across the four supported shapes.
//! - **Remote Matcher (`matcher`)**: substring correlation of a repository's
//!   remotes against catalog keys, with user/origin annotations.
//! - **Resolution Policy (`policy`)**: decides whether an unambiguous
//!   identity exists, or defers to a prompt (interactive) or a skip (batch).
//! - **Config Service (`gitconfig`)**: reads remotes from, and writes
//!   `user.name`/`user.email` into, a specific local config file.
//! - **Repository Walker (`walker`)**: drives one full resolution pass per
//!   repository, recursing through declared submodules.
//!
//! ## Execution Flow
//!
//! A run scans the catalog once, then for each discovered repository level:
//!
//! 1. Load the remotes from the repository's local config.
//! 2. Parse each remote URL and match it against the catalog.
//! 3. Evaluate the resolution policy.
//! 4. Apply the chosen identity, prompt for one, or skip with a diagnostic.
//!
//! The catalog is read-only after construction; repository configs are the
//! only thing mutated, and only ever their `user.name` and `user.email`
//! keys.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod gitconfig;
pub mod matcher;
pub mod output;
pub mod policy;
pub mod prompt;
pub mod remote_url;
pub mod walker;

#[cfg(test)]
mod remote_url_proptest;
