//! Immutable password rule sets.
//!
//! A [`PasswordPolicy`] is built once, validated eagerly (malformed
//! patterns fail the build, not the first match), and then shared freely:
//! nothing in it mutates, so concurrent generators and validators can hold
//! the same policy without locks.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest accepted minimum length — one seeded character per class.
pub const MIN_LENGTH_FLOOR: usize = 4;

/// Largest accepted minimum length.
pub const MAX_LENGTH: usize = 128;

/// Default minimum length for non-privileged accounts.
pub const DEFAULT_MIN_LENGTH: usize = 12;

/// Default minimum length for privileged accounts.
pub const DEFAULT_PRIVILEGED_MIN_LENGTH: usize = 15;

/// Default number of distinct character classes required (3 of 4).
pub const DEFAULT_MIN_CLASSES: usize = 3;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Validated, immutable rule set shared by generator and validator.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    privileged_min_length: usize,
    min_classes: usize,
    /// Lowercased at build time; matched as case-insensitive substrings.
    blacklist: Vec<String>,
    /// Compiled with case-insensitive matching.
    patterns: Vec<Regex>,
    /// Lowercased personal/organizational identifiers, injected per caller.
    forbidden_tokens: Vec<String>,
}

impl PasswordPolicy {
    /// Start building a policy from the default tier lengths and class
    /// requirement, with no substring or pattern rules.
    #[must_use]
    pub fn builder() -> PasswordPolicyBuilder {
        PasswordPolicyBuilder::default()
    }

    /// The recommended rule set: default tiers, 3-of-4 class diversity,
    /// the stock blacklist and forbidden patterns, no personal tokens.
    #[must_use]
    pub fn recommended() -> Self {
        Self::recommended_builder()
            .build()
            .expect("built-in rules are well-formed")
    }

    /// Builder preloaded with the recommended rules, for callers that add
    /// their own tokens or tighten lengths before building.
    #[must_use]
    pub fn recommended_builder() -> PasswordPolicyBuilder {
        Self::builder()
            .blacklist(["1234", "aaaa", "würth"])
            .forbidden_patterns([r"herbst\d{4}", r"PW4WGS\d{4}"])
    }

    /// Minimum length for the given privilege tier.
    #[must_use]
    pub const fn min_length(&self, privileged: bool) -> usize {
        if privileged {
            self.privileged_min_length
        } else {
            self.min_length
        }
    }

    /// Number of distinct character classes a password must cover.
    #[must_use]
    pub const fn min_classes(&self) -> usize {
        self.min_classes
    }

    /// Blacklisted substrings, lowercased.
    #[must_use]
    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }

    /// Compiled forbidden patterns (case-insensitive, unanchored).
    #[must_use]
    pub fn forbidden_patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Forbidden personal/organizational tokens, lowercased.
    #[must_use]
    pub fn forbidden_tokens(&self) -> &[String] {
        &self.forbidden_tokens
    }
}

/// Builder for [`PasswordPolicy`] — also the serde shape of a rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordPolicyBuilder {
    pub min_length: usize,
    pub privileged_min_length: usize,
    pub min_classes: usize,
    pub blacklist: Vec<String>,
    pub forbidden_patterns: Vec<String>,
    pub forbidden_tokens: Vec<String>,
}

impl Default for PasswordPolicyBuilder {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            privileged_min_length: DEFAULT_PRIVILEGED_MIN_LENGTH,
            min_classes: DEFAULT_MIN_CLASSES,
            blacklist: Vec::new(),
            forbidden_patterns: Vec::new(),
            forbidden_tokens: Vec::new(),
        }
    }
}

impl PasswordPolicyBuilder {
    /// Set the minimum length for non-privileged accounts.
    #[must_use]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    /// Set the minimum length for privileged accounts.
    #[must_use]
    pub fn privileged_min_length(mut self, length: usize) -> Self {
        self.privileged_min_length = length;
        self
    }

    /// Set how many distinct character classes a password must cover (1–4).
    #[must_use]
    pub fn min_classes(mut self, classes: usize) -> Self {
        self.min_classes = classes;
        self
    }

    /// Add blacklisted substrings (matched case-insensitively).
    #[must_use]
    pub fn blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Add forbidden regex patterns (compiled case-insensitively at build).
    #[must_use]
    pub fn forbidden_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add forbidden personal/organizational tokens (matched
    /// case-insensitively). These are caller-supplied, per user — never
    /// baked into the policy constants.
    #[must_use]
    pub fn forbidden_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_tokens
            .extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Validate the rule parameters and compile every forbidden pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Policy`] if a length is outside
    /// [`MIN_LENGTH_FLOOR`]..=[`MAX_LENGTH`] or `min_classes` is outside
    /// 1..=4, and [`PolicyError::Pattern`] for the first pattern that
    /// fails to compile.
    pub fn build(self) -> Result<PasswordPolicy, PolicyError> {
        for (name, length) in [
            ("minLength", self.min_length),
            ("privilegedMinLength", self.privileged_min_length),
        ] {
            if !(MIN_LENGTH_FLOOR..=MAX_LENGTH).contains(&length) {
                return Err(PolicyError::Policy(format!(
                    "{name} must be between {MIN_LENGTH_FLOOR} and {MAX_LENGTH}, got {length}"
                )));
            }
        }
        if !(1..=4).contains(&self.min_classes) {
            return Err(PolicyError::Policy(format!(
                "minClasses must be between 1 and 4, got {}",
                self.min_classes
            )));
        }

        let mut patterns = Vec::with_capacity(self.forbidden_patterns.len());
        for pattern in self.forbidden_patterns {
            let compiled = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| PolicyError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            patterns.push(compiled);
        }

        Ok(PasswordPolicy {
            min_length: self.min_length,
            privileged_min_length: self.privileged_min_length,
            min_classes: self.min_classes,
            blacklist: self.blacklist.iter().map(|s| s.to_lowercase()).collect(),
            patterns,
            forbidden_tokens: self
                .forbidden_tokens
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        })
    }
}
