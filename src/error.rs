//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `git-persona` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! Note that "no unambiguous match" is deliberately *not* an error variant:
//! in interactive mode it becomes a prompt, and in batch mode it degrades to
//! a skip with a printed reminder. Malformed remote URLs are likewise not
//! errors; they parse to best-effort fields that simply fail to match.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for git-persona operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory visited by the repository walker is not a git working copy.
    ///
    /// This is fatal for the whole walk; no configuration is mutated.
    #[error("Not a git repository: {path}")]
    NotAGitRepository { path: PathBuf },

    /// The identity catalog root could not be scanned.
    ///
    /// Fatal for the whole run; partial catalogs are never used.
    #[error("Cannot read identity catalog at {root}: {message}")]
    CatalogUnreadable { root: PathBuf, message: String },

    /// The fallback `local` identity was needed but is absent from the catalog.
    #[error("No 'local' identity found in {root} (required when a repository has no matching remotes)")]
    MissingLocalIdentity { root: PathBuf },

    /// An identity file exists but its contents could not be loaded.
    ///
    /// Identity files are minimal git-config fragments with a `[user]`
    /// section holding `name` and `email`.
    #[error("Identity file error for '{key}' at {path}: {message}")]
    IdentityFile {
        key: String,
        path: PathBuf,
        message: String,
    },

    /// An error occurred while executing a git command.
    #[error("Git command failed: {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An INI parsing error, wrapped from `ini::ParseError`.
    #[error("Config parsing error: {0}")]
    IniParse(#[from] ini::ParseError),

    /// An INI file error, wrapped from `ini::Error`.
    #[error("Config file error: {0}")]
    Ini(#[from] ini::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_a_git_repository() {
        let error = Error::NotAGitRepository {
            path: PathBuf::from("/tmp/somewhere"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Not a git repository"));
        assert!(display.contains("/tmp/somewhere"));
    }

    #[test]
    fn test_error_display_catalog_unreadable() {
        let error = Error::CatalogUnreadable {
            root: PathBuf::from("/home/user/.config/git-persona"),
            message: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Cannot read identity catalog"));
        assert!(display.contains("/home/user/.config/git-persona"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_error_display_missing_local_identity() {
        let error = Error::MissingLocalIdentity {
            root: PathBuf::from("/ids"),
        };
        let display = format!("{}", error);
        assert!(display.contains("'local' identity"));
        assert!(display.contains("/ids"));
    }

    #[test]
    fn test_error_display_identity_file() {
        let error = Error::IdentityFile {
            key: "jdoe@github.com".to_string(),
            path: PathBuf::from("/ids/jdoe@github.com"),
            message: "missing [user] section".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("jdoe@github.com"));
        assert!(display.contains("missing [user] section"));
    }

    #[test]
    fn test_error_display_git_command() {
        let error = Error::GitCommand {
            command: "git config --file .git/config user.name".to_string(),
            stderr: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Git command failed"));
        assert!(display.contains("user.name"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }
}
