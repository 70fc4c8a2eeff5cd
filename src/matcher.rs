//! # Remote Matcher
//!
//! Correlates a repository's remotes with the identity catalog. For every
//! (remote, identity) pair, the remote matches the identity when the
//! identity's key contains the remote's authority as a substring. The check
//! is deliberately unanchored: an authority like `gitlab.com` matches an
//! identity key containing that text anywhere. This looseness is inherited
//! policy; it can produce false positives when a username happens to be a
//! substring of an unrelated authority, and it stays that way on purpose.
//!
//! Matching is O(remotes × identities). Catalogs hold one file per forge
//! account, so both sides are small.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::defaults::ORIGIN_REMOTE;
use crate::remote_url::{self, RemoteUrl};

/// A named remote and its parsed URL, created once per repository pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Remote name as configured (e.g. `origin`).
    pub name: String,
    /// Raw URL as configured.
    pub url: String,
    /// Parsed `(user, authority, path)`; never re-derived after creation.
    pub parsed: RemoteUrl,
}

impl RemoteDescriptor {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            parsed: remote_url::parse(url),
        }
    }
}

/// Per-identity flags derived during matching; transient, recomputed per
/// repository pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAnnotation {
    /// Some matching remote's parsed user appears in the identity key.
    pub user_match: bool,
    /// The user correlation held on a matching remote named exactly
    /// `origin`. Joint with the user check: an identity that merely shares
    /// the origin remote's authority does not earn this flag.
    pub origin_match: bool,
}

/// The authority/path of a remote that matched at least one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRemote {
    pub authority: String,
    pub path: String,
}

/// Output of a matching pass: remotes with at least one matching identity,
/// and identities matching at least one remote.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub matching_remotes: BTreeMap<String, MatchedRemote>,
    pub matching_identities: BTreeMap<String, MatchAnnotation>,
}

/// Correlate `remotes` against the catalog.
///
/// Remotes whose URL parsed without an authority never match; best-effort
/// parses of malformed URLs degrade to "matches nothing" rather than to an
/// error.
pub fn match_remotes(
    remotes: &BTreeMap<String, RemoteDescriptor>,
    catalog: &Catalog,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for (name, remote) in remotes {
        let authority = remote.parsed.authority.as_str();
        if authority.is_empty() {
            continue;
        }

        for key in catalog.keys() {
            if !key.contains(authority) {
                continue;
            }

            outcome
                .matching_remotes
                .entry(name.clone())
                .or_insert_with(|| MatchedRemote {
                    authority: authority.to_string(),
                    path: remote.parsed.path.clone(),
                });

            let user_hit = remote
                .parsed
                .user
                .as_deref()
                .is_some_and(|user| key.contains(user));

            let annotation = outcome
                .matching_identities
                .entry(key.to_string())
                .or_default();
            annotation.user_match |= user_hit;
            annotation.origin_match |= user_hit && name == ORIGIN_REMOTE;
        }
    }

    outcome
}
