//! Default paths and environment lookups.

use std::env;
use std::path::PathBuf;

/// Environment variable selecting the identity catalog root directory.
pub const CATALOG_DIR_ENV: &str = "GIT_PERSONA_DIR";

/// The conventional default remote name.
pub const ORIGIN_REMOTE: &str = "origin";

/// Identity key used when a repository has no (matching) remotes.
pub const LOCAL_KEY: &str = "local";

/// The default identity catalog root.
///
/// `~/.config/git-persona` on Linux, the platform config directory elsewhere.
/// Falls back to a relative `.git-persona` when no config directory can be
/// determined (e.g. stripped-down containers without `$HOME`).
pub fn default_catalog_root() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("git-persona"))
        .unwrap_or_else(|| PathBuf::from(".git-persona"))
}

/// Resolve the catalog root from the environment, else the default path.
///
/// An empty or whitespace-only value counts as absent.
pub fn catalog_root() -> PathBuf {
    match env::var(CATALOG_DIR_ENV) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => default_catalog_root(),
    }
}
