//! # Resolution Policy
//!
//! Decides, once per repository, which identity to apply. The state machine:
//!
//! 1. Zero configured remotes → [`ResolutionOutcome::NoRemotes`]; the caller
//!    falls back to the `local` identity.
//! 2. Otherwise run the matcher.
//!    a. Zero matching remotes → `NoRemotes` again (same `local` fallback).
//!    b. Otherwise the matching identity keys are the candidates:
//!       - exactly one candidate wins outright, regardless of its flags;
//!       - else a sole candidate with both `user_match` and `origin_match`
//!         wins;
//!       - else the outcome is [`ResolutionOutcome::Ambiguous`], which an
//!         interactive caller turns into a prompt and a batch caller turns
//!         into a skip with a diagnostic.
//!
//! The single-candidate rule short-circuits before the origin/user heuristic
//! is consulted. A lone candidate is applied even when it carries no flags at
//! all; that ordering is contractual.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::matcher::{self, MatchOutcome, RemoteDescriptor};

/// The decision for one repository pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// An unambiguous (or, later, user-selected) identity key.
    UseIdentity(String),
    /// No remotes, or none that matched; fall back to `local`.
    NoRemotes,
    /// Several candidates and no unambiguous default.
    Ambiguous(Vec<String>),
}

/// A resolution decision together with the match data it was derived from.
///
/// The match data feeds the interactive prompt default and diagnostics; for
/// the `NoRemotes` case it is empty.
#[derive(Debug)]
pub struct Resolution {
    pub outcome: ResolutionOutcome,
    pub matches: MatchOutcome,
}

/// Evaluate the resolution policy for one repository.
pub fn resolve(remotes: &BTreeMap<String, RemoteDescriptor>, catalog: &Catalog) -> Resolution {
    if remotes.is_empty() {
        return Resolution {
            outcome: ResolutionOutcome::NoRemotes,
            matches: MatchOutcome::default(),
        };
    }

    let matches = matcher::match_remotes(remotes, catalog);
    if matches.matching_remotes.is_empty() {
        return Resolution {
            outcome: ResolutionOutcome::NoRemotes,
            matches,
        };
    }

    let candidates: Vec<String> = matches.matching_identities.keys().cloned().collect();

    // Single candidate total: applied unconditionally, before the
    // origin/user heuristic is even looked at.
    if candidates.len() == 1 {
        return Resolution {
            outcome: ResolutionOutcome::UseIdentity(candidates[0].clone()),
            matches,
        };
    }

    let flagged: Vec<&String> = matches
        .matching_identities
        .iter()
        .filter(|(_, annotation)| annotation.user_match && annotation.origin_match)
        .map(|(key, _)| key)
        .collect();

    if flagged.len() == 1 {
        let winner = flagged[0].clone();
        return Resolution {
            outcome: ResolutionOutcome::UseIdentity(winner),
            matches,
        };
    }

    Resolution {
        outcome: ResolutionOutcome::Ambiguous(candidates),
        matches,
    }
}

/// The prompt default among ambiguous candidates: any candidate carrying
/// both match flags, if one exists.
pub fn preferred_candidate(matches: &MatchOutcome) -> Option<&str> {
    matches
        .matching_identities
        .iter()
        .find(|(_, annotation)| annotation.user_match && annotation.origin_match)
        .map(|(key, _)| key.as_str())
}
