//! Splits the text after `MAJOR.MINOR.PATCH-` into a suffix and/or a hash.
//!
//! The grammar alone cannot tell `beta`, `abc1234` and `beta-abc1234` apart, so the split is
//! decided by a fixed rule list, first match wins:
//!
//! 1. empty: neither
//! 2. lowercase hex, at least [`MIN_HASH_LEN`] long: hash
//! 3. any other tail without a `-`: suffix
//! 4. otherwise split at the last `-`; a hash-like right side makes `suffix-hash`, anything
//!    else leaves the whole tail as the suffix
//!
//! Short hex runs (`ab12`) stay suffixes because real commit hashes are practically never
//! shorter than six characters.
//!
//! [`MIN_HASH_LEN`]: crate::domain::version::MIN_HASH_LEN

use crate::domain::version::is_hash_like;

/// The resolved tail. Borrowed from the input; both parts may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tail<'a> {
    pub suffix: Option<&'a str>,
    pub hash: Option<&'a str>,
}

/// Resolve a dash-stripped tail. Never fails.
pub fn split_tail(tail: &str) -> Tail<'_> {
    if tail.is_empty() {
        return Tail::default();
    }
    if is_hash_like(tail) {
        return Tail {
            suffix: None,
            hash: Some(tail),
        };
    }
    if let Some((head, candidate)) = tail.rsplit_once('-') {
        if is_hash_like(candidate) {
            return Tail {
                suffix: Some(head),
                hash: Some(candidate),
            };
        }
    }
    Tail {
        suffix: Some(tail),
        hash: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(tail: &str) -> (Option<&str>, Option<&str>) {
        let Tail { suffix, hash } = split_tail(tail);
        (suffix, hash)
    }

    #[test]
    fn test_empty() {
        assert_eq!(split(""), (None, None));
    }

    #[test]
    fn test_hex_length_boundary() {
        assert_eq!(split("abcde"), (Some("abcde"), None));
        assert_eq!(split("abcdef"), (None, Some("abcdef")));
        assert_eq!(split("ab12"), (Some("ab12"), None));
    }

    #[test]
    fn test_full_length_hash() {
        let full = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(split(full), (None, Some(full)));
    }

    #[test]
    fn test_plain_suffix() {
        assert_eq!(split("rc"), (Some("rc"), None));
        assert_eq!(split("beta"), (Some("beta"), None));
    }

    #[test]
    fn test_short_candidate_is_not_split() {
        assert_eq!(split("rc-1"), (Some("rc-1"), None));
        assert_eq!(split("beta-2"), (Some("beta-2"), None));
        assert_eq!(split("beta-abcde"), (Some("beta-abcde"), None));
    }

    #[test]
    fn test_composite_split() {
        assert_eq!(split("beta-abc123"), (Some("beta"), Some("abc123")));
        assert_eq!(split("rc-abc123f"), (Some("rc"), Some("abc123f")));
    }

    #[test]
    fn test_splits_at_last_dash() {
        assert_eq!(
            split("pre-release-1a2b3c4d"),
            (Some("pre-release"), Some("1a2b3c4d"))
        );
    }

    #[test]
    fn test_uppercase_hex_is_a_suffix() {
        assert_eq!(split("ABCDEF"), (Some("ABCDEF"), None));
        assert_eq!(split("rc-ABCDEF"), (Some("rc-ABCDEF"), None));
    }
}
