//! Password validation against a [`PasswordPolicy`].
//!
//! Pure functions: no side effects, no mutation, same answer for the same
//! `(password, privileged)` pair. The generator calls [`is_valid`] on each
//! candidate; callers wanting to know *why* a password fails use [`check`].

use crate::charset::distinct_classes;
use crate::policy::PasswordPolicy;

/// The first rule a password failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Shorter than the tier's minimum length.
    TooShort { length: usize, minimum: usize },
    /// Covers fewer distinct character classes than required.
    TooFewClasses { present: usize, required: usize },
    /// Contains a blacklisted substring (case-insensitive).
    BlacklistedSubstring(String),
    /// Matches a forbidden pattern (case-insensitive, unanchored).
    ForbiddenPattern(String),
    /// Contains a forbidden personal/organizational token (case-insensitive).
    ForbiddenToken(String),
}

/// First failed rule, or `None` when `password` satisfies every rule.
///
/// Rules are checked in fixed order: length, class diversity, blacklist,
/// forbidden patterns, forbidden tokens.
#[must_use]
pub fn check(policy: &PasswordPolicy, password: &str, privileged: bool) -> Option<RuleViolation> {
    let minimum = policy.min_length(privileged);
    let length = password.chars().count();
    if length < minimum {
        return Some(RuleViolation::TooShort { length, minimum });
    }

    let present = distinct_classes(password);
    if present < policy.min_classes() {
        return Some(RuleViolation::TooFewClasses {
            present,
            required: policy.min_classes(),
        });
    }

    // Substring rules compare case-insensitively; the blacklist may carry
    // non-ASCII entries, so fold with full Unicode lowercasing.
    let folded = password.to_lowercase();
    for entry in policy.blacklist() {
        if folded.contains(entry.as_str()) {
            return Some(RuleViolation::BlacklistedSubstring(entry.clone()));
        }
    }

    for pattern in policy.forbidden_patterns() {
        if pattern.is_match(password) {
            return Some(RuleViolation::ForbiddenPattern(pattern.as_str().to_owned()));
        }
    }

    for token in policy.forbidden_tokens() {
        if folded.contains(token.as_str()) {
            return Some(RuleViolation::ForbiddenToken(token.clone()));
        }
    }

    None
}

/// Whether `password` satisfies every rule of `policy` for the given tier.
#[must_use]
pub fn is_valid(policy: &PasswordPolicy, password: &str, privileged: bool) -> bool {
    check(policy, password, privileged).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommended() -> PasswordPolicy {
        PasswordPolicy::recommended()
    }

    #[test]
    fn concrete_valid_scenario() {
        // Length 12, all four classes, no blacklist or pattern hit.
        assert!(is_valid(&recommended(), "Ab1!Ab1!Ab1!", false));
    }

    #[test]
    fn concrete_blacklist_scenario() {
        // Length and classes pass, but "aaaa" and "1234" are blacklisted.
        let policy = PasswordPolicy::builder()
            .blacklist(["1234", "aaaa"])
            .build()
            .unwrap();
        // Entries are checked in declaration order, so "1234" hits first.
        assert_eq!(
            check(&policy, "aaaa1234ABCD", false),
            Some(RuleViolation::BlacklistedSubstring("1234".to_owned()))
        );
    }

    #[test]
    fn length_floor_per_tier() {
        let policy = recommended();
        assert_eq!(
            check(&policy, "Ab1!Ab1!Ab1", false),
            Some(RuleViolation::TooShort {
                length: 11,
                minimum: 12
            })
        );
        // 12 chars pass the standard tier but not the privileged one.
        assert!(is_valid(&policy, "Ab1!Ab1!Ab1!", false));
        assert!(!is_valid(&policy, "Ab1!Ab1!Ab1!", true));
        assert!(is_valid(&policy, "Ab1!Ab1!Ab1!Ab1", true));
    }

    #[test]
    fn three_of_four_classes_suffice() {
        // Upper + lower + digit, no symbol.
        assert!(is_valid(&recommended(), "Abc123Abc123", false));
        // Only two classes.
        assert_eq!(
            check(&recommended(), "abcdefg12345", false),
            Some(RuleViolation::TooFewClasses {
                present: 2,
                required: 3
            })
        );
    }

    #[test]
    fn blacklist_is_case_insensitive_substring() {
        let policy = recommended();
        assert!(!is_valid(&policy, "XxAAAAxX9!aa", false));
        assert!(!is_valid(&policy, "GoodPw9!wÜrth", false));
        // "aaa" alone is not blacklisted.
        assert!(is_valid(&policy, "XxaaaYy9!Zz1", false));
    }

    #[test]
    fn forbidden_pattern_matches_substring_case_insensitively() {
        let policy = recommended();
        assert!(!is_valid(&policy, "Xherbst2020Yz!", false));
        assert!(!is_valid(&policy, "xHERBST1999yZ!", false));
        assert!(!is_valid(&policy, "PW4WGS12349aB!x", true));
        // Pattern requires four digits after the word.
        assert!(is_valid(&policy, "Xherbst20Yz9!", false));
    }

    #[test]
    fn forbidden_tokens_are_injectable_per_user() {
        let policy = PasswordPolicy::builder()
            .forbidden_tokens(["JohnDoe", "19900101"])
            .build()
            .unwrap();
        assert_eq!(
            check(&policy, "xxJOHNdoe42!A", false),
            Some(RuleViolation::ForbiddenToken("johndoe".to_owned()))
        );
        assert!(!is_valid(&policy, "Ab!x19900101x", false));
        assert!(is_valid(&policy, "Ab1!Ab1!Ab1!", false));
    }

    #[test]
    fn validator_is_deterministic() {
        let policy = recommended();
        for password in ["Ab1!Ab1!Ab1!", "too short", "aaaa1234ABCD"] {
            for privileged in [false, true] {
                let first = check(&policy, password, privileged);
                let second = check(&policy, password, privileged);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn rules_check_in_fixed_order() {
        // A password that is both too short and blacklisted reports the
        // length violation first.
        let policy = recommended();
        assert!(matches!(
            check(&policy, "aaaa", false),
            Some(RuleViolation::TooShort { .. })
        ));
    }
}
