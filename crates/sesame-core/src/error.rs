//! Error types for `sesame-core`.

use thiserror::Error;

/// Errors produced when building a rule set or generating a password.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A rule parameter is outside its allowed range.
    #[error("invalid policy: {0}")]
    Policy(String),

    /// A forbidden pattern failed to compile. The rule set is process-wide
    /// constant state, so this is fatal at startup.
    #[error("invalid forbidden pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The generate-and-reject loop hit its attempt cap — the rule set
    /// rejects essentially every candidate the alphabets can produce.
    #[error("no valid password found after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}
