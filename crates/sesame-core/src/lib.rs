//! `sesame-core` — Policy-constrained password generation for SESAME.
//!
//! This crate is the audit target: zero I/O, zero async, zero UI
//! dependencies. It produces random passwords that satisfy an immutable
//! rule set (length tiers, 3-of-4 character-class diversity, blacklisted
//! substrings, forbidden regex patterns, caller-supplied personal tokens)
//! using the OS CSPRNG with rejection-sampled, unbiased draws throughout.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod charset;
pub mod error;

pub mod random;

pub mod policy;

pub mod validate;

pub mod generate;

pub use charset::{distinct_classes, CharClass};
pub use error::PolicyError;
pub use generate::{generate_valid_password, generate_valid_password_with, MAX_ATTEMPTS};
pub use policy::{
    PasswordPolicy, PasswordPolicyBuilder, DEFAULT_MIN_CLASSES, DEFAULT_MIN_LENGTH,
    DEFAULT_PRIVILEGED_MIN_LENGTH, MAX_LENGTH, MIN_LENGTH_FLOOR,
};
pub use validate::{check, is_valid, RuleViolation};
