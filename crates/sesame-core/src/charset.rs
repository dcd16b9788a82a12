//! The four fixed character classes.
//!
//! Alphabets are immutable, ordered byte sequences fixed at compile time.
//! They are used twice: to seed class diversity during generation, and to
//! count class coverage during validation.

// Character sets
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_-+=[{]};:'\",<.>/?";

/// One of the four disjoint password character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Uppercase letters (A-Z).
    Uppercase,
    /// Lowercase letters (a-z).
    Lowercase,
    /// Digits (0-9).
    Digit,
    /// Symbols (!@#$%^&*...).
    Symbol,
}

impl CharClass {
    /// All four classes, in seeding order: a fresh candidate starts with
    /// one character from each, appended in exactly this order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Symbol];

    /// The immutable alphabet backing this class.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class.
    ///
    /// Symbol membership means membership in the symbol alphabet itself,
    /// not "any non-alphanumeric character".
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Symbol => c.is_ascii() && SYMBOLS.contains(&(c as u8)),
        }
    }
}

/// Number of distinct character classes present in `password` (0–4).
#[must_use]
pub fn distinct_classes(password: &str) -> usize {
    CharClass::ALL
        .iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .count()
}
