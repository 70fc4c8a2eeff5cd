//! # Git Configuration Service
//!
//! Thin access layer over the git configuration store, scoped to a specific
//! config file. Reads go through `rust-ini` (a git config file is an INI
//! dialect); writes shell out to the system `git config --file`, which
//! preserves the file's formatting, comments, and includes.
//!
//! Also resolves a working copy's git metadata directory, handling both
//! plain `.git` directories and the `gitdir:` pointer files used by
//! worktrees and submodules.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use ini::{Ini, ParseOption};

use crate::catalog::Identity;
use crate::error::{Error, Result};

/// Resolve the git metadata directory for a working copy.
///
/// A `.git` directory is returned as-is. A `.git` file (worktree or
/// submodule) is dereferenced through its `gitdir:` pointer, resolving
/// relative targets against the working copy.
pub fn resolve_git_dir(work_dir: &Path) -> Result<PathBuf> {
    let dot_git = work_dir.join(".git");

    if dot_git.is_dir() {
        return Ok(dot_git);
    }

    if dot_git.is_file() {
        let content = fs::read_to_string(&dot_git)?;
        let gitdir = content
            .strip_prefix("gitdir: ")
            .ok_or_else(|| Error::NotAGitRepository {
                path: work_dir.to_path_buf(),
            })?
            .trim();

        let path = if Path::new(gitdir).is_absolute() {
            PathBuf::from(gitdir)
        } else {
            work_dir.join(gitdir)
        };
        return Ok(path);
    }

    Err(Error::NotAGitRepository {
        path: work_dir.to_path_buf(),
    })
}

/// Whether `work_dir` is a git working copy.
pub fn is_repo(work_dir: &Path) -> bool {
    resolve_git_dir(work_dir).is_ok()
}

/// The local configuration file inside a git metadata directory.
pub fn config_file(git_dir: &Path) -> PathBuf {
    git_dir.join("config")
}

/// Parse options for git config files.
///
/// Quote and escape handling are disabled so that subsection headers like
/// `[remote "origin"]` keep their literal section name; everything else
/// stays at the crate defaults.
pub(crate) fn git_ini_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Load the remote name → URL map from a local config file.
///
/// Remotes live in `[remote "<name>"]` sections under the `url` key;
/// sections without a `url` are ignored.
pub fn load_remotes(config_file: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(config_file)?;
    let ini = Ini::load_from_str_opt(&content, git_ini_options())?;

    let mut remotes = BTreeMap::new();
    for (section, properties) in ini.iter() {
        let Some(section) = section else { continue };
        let Some(name) = section
            .strip_prefix("remote \"")
            .and_then(|rest| rest.strip_suffix('"'))
        else {
            continue;
        };
        if let Some(url) = properties.get("url") {
            remotes.insert(name.to_string(), url.to_string());
        }
    }

    Ok(remotes)
}

/// Set a dotted key in a specific config file via `git config --file`.
///
/// Using the system git keeps authentication-free, purely local semantics
/// while preserving everything else in the file.
pub fn set(config_file: &Path, key: &str, value: &str) -> Result<()> {
    let output = Command::new("git")
        .arg("config")
        .arg("--file")
        .arg(config_file)
        .arg(key)
        .arg(value)
        .output()
        .map_err(|e| Error::GitCommand {
            command: format!("git config --file {} {}", config_file.display(), key),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: format!("git config --file {} {}", config_file.display(), key),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Write an identity's name and email into a repository's local config.
///
/// Exactly `user.name` and `user.email` are written, never the global
/// configuration. The two writes are not transactional; a failure between
/// them leaves a partially applied pair, which is accepted.
pub fn apply_identity(config_file: &Path, identity: &Identity) -> Result<()> {
    set(config_file, "user.name", &identity.name)?;
    set(config_file, "user.email", &identity.email)
}
