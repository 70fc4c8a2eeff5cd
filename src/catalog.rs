//! # Identity Catalog
//!
//! This module builds the in-memory catalog of known commit identities from a
//! directory tree. Each regular file under the catalog root contributes one
//! identity: the file's base name is the identity key (`user@authority`, or
//! the sentinel `local`), and the file itself is a minimal git-config
//! fragment holding the actual name and email:
//!
//! ```ini
//! [user]
//!     name = John Doe
//!     email = jdoe@example.com
//! ```
//!
//! Records are loaded lazily: the scan only captures keys and paths, and the
//! name/email pair is parsed when an identity is actually applied or listed.
//!
//! The scan follows symbolic links (with loop protection), skips hidden
//! entries, and visits shallower entries first so that duplicate base names
//! overwrite in depth order. Duplicates are a known weak point of the
//! catalog layout; every overwrite is logged as a warning naming both files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ini::Ini;
use log::warn;
use walkdir::WalkDir;

use crate::defaults::LOCAL_KEY;
use crate::error::{Error, Result};

/// A resolved commit identity: the (name, email) pair written to config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// A catalog entry: an identity key plus the file to load it from.
///
/// Immutable once created; the underlying file is only read by [`load`].
///
/// [`load`]: IdentityRecord::load
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    key: String,
    path: PathBuf,
}

impl IdentityRecord {
    /// The identity key (`user@authority` or `local`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The identity file backing this record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the name/email pair from the identity file.
    ///
    /// The file must contain a `[user]` section with `name` and `email`
    /// keys; anything else in the file is ignored. No further validation is
    /// performed.
    pub fn load(&self) -> Result<Identity> {
        let ini = Ini::load_from_file(&self.path).map_err(|e| Error::IdentityFile {
            key: self.key.clone(),
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let section = self
            .require(ini.section(Some("user")), "missing [user] section")?;
        let name = self.require(section.get("name"), "missing 'name' under [user]")?;
        let email = self.require(section.get("email"), "missing 'email' under [user]")?;

        Ok(Identity {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    fn require<T>(&self, value: Option<T>, message: &str) -> Result<T> {
        value.ok_or_else(|| Error::IdentityFile {
            key: self.key.clone(),
            path: self.path.clone(),
            message: message.to_string(),
        })
    }
}

/// The immutable identity lookup built once per run and shared read-only by
/// every repository pass.
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
    records: BTreeMap<String, IdentityRecord>,
}

impl Catalog {
    /// Recursively scan `root` and build the catalog.
    ///
    /// Follows symbolic links; link loops are skipped with a warning. Hidden
    /// files and directories are ignored. Any other traversal error is
    /// fatal: the run either gets a complete catalog or none at all.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root).follow_links(true).into_iter();
        for entry in walker.filter_entry(|e| {
            // Always allow the root itself, even if its name is dotted.
            if e.depth() == 0 {
                return true;
            }
            !e.file_name().to_string_lossy().starts_with('.')
        }) {
            match entry {
                Ok(e) if e.file_type().is_file() => files.push(e),
                Ok(_) => {}
                Err(err) => {
                    if err.loop_ancestor().is_some() {
                        warn!("skipping symlink loop in identity catalog: {}", err);
                        continue;
                    }
                    return Err(Error::CatalogUnreadable {
                        root: root.to_path_buf(),
                        message: err.to_string(),
                    });
                }
            }
        }

        // Shallower entries first; the sort is stable, so walk order is kept
        // within a depth level.
        files.sort_by_key(|e| e.depth());

        let mut records = BTreeMap::new();
        for entry in files {
            let Some(key) = entry.file_name().to_str().map(str::to_string) else {
                warn!(
                    "ignoring identity file with non-UTF-8 name: {}",
                    entry.path().display()
                );
                continue;
            };
            let record = IdentityRecord {
                key: key.clone(),
                path: entry.path().to_path_buf(),
            };
            if let Some(previous) = records.insert(key.clone(), record) {
                warn!(
                    "duplicate identity key '{}': {} overrides {}",
                    key,
                    entry.path().display(),
                    previous.path.display()
                );
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            records,
        })
    }

    /// The directory this catalog was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a record by identity key.
    pub fn get(&self, key: &str) -> Option<&IdentityRecord> {
        self.records.get(key)
    }

    /// The `local` fallback record, required when a repository has no
    /// matching remotes.
    pub fn local(&self) -> Result<&IdentityRecord> {
        self.records
            .get(LOCAL_KEY)
            .ok_or_else(|| Error::MissingLocalIdentity {
                root: self.root.clone(),
            })
    }

    /// All identity keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records, sorted by key.
    pub fn records(&self) -> impl Iterator<Item = &IdentityRecord> {
        self.records.values()
    }

    /// Number of identities in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no identities at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
