//! Property-based tests for the remote URL parser.
//!
//! The parser is best-effort by contract, so the properties are structural:
//! it never panics, the path is always leading-`/`-normalized, and stripped
//! credentials never survive into the authority.

use proptest::prelude::*;

use crate::remote_url;

proptest! {
    #[test]
    fn parse_never_panics(url in ".*") {
        let _ = remote_url::parse(&url);
    }

    #[test]
    fn path_is_normalized(url in ".*") {
        let parsed = remote_url::parse(&url);
        prop_assert!(parsed.path.starts_with('/'));
    }

    #[test]
    fn authority_never_keeps_credentials(url in "[a-z0-9@:/.~_-]{0,64}") {
        let parsed = remote_url::parse(&url);
        prop_assert!(!parsed.authority.contains('@'));
    }

    #[test]
    fn well_formed_https_round_trips(
        user in "[a-z][a-z0-9-]{0,15}",
        host in "[a-z][a-z0-9]{0,10}\\.(com|org|io)",
        repo in "[a-z][a-z0-9-]{0,15}",
    ) {
        let url = format!("https://{host}/{user}/{repo}.git");
        let parsed = remote_url::parse(&url);
        prop_assert_eq!(parsed.user.as_deref(), Some(user.as_str()));
        prop_assert_eq!(parsed.authority, host);
        prop_assert_eq!(parsed.path, format!("/{repo}.git"));
    }

    #[test]
    fn well_formed_scp_round_trips(
        user in "[a-z][a-z0-9-]{0,15}",
        host in "[a-z][a-z0-9]{0,10}\\.(com|org|io)",
        repo in "[a-z][a-z0-9-]{0,15}",
    ) {
        let url = format!("git@{host}:{user}/{repo}.git");
        let parsed = remote_url::parse(&url);
        prop_assert_eq!(parsed.user.as_deref(), Some(user.as_str()));
        prop_assert_eq!(parsed.authority, host);
    }
}
