//! Candidate generation and the generate-and-reject loop.
//!
//! A candidate seeds one character from each of the four classes (so class
//! diversity is structural, not probabilistic), fills the remaining
//! positions with uniform (class, character) draws, and is Fisher–Yates
//! shuffled so the seeded characters don't sit at fixed positions. The
//! loop then keeps the first candidate the validator accepts.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::charset::CharClass;
use crate::error::PolicyError;
use crate::policy::PasswordPolicy;
use crate::random::{choose, shuffle, uniform_index};
use crate::validate::is_valid;

/// Attempt cap for the generate-and-reject loop.
///
/// Class seeding makes each candidate structurally diverse, so acceptance
/// probability per attempt is high under any reasonable rule set; the cap
/// turns a rule set that rejects everything into [`PolicyError::AttemptsExhausted`]
/// instead of a hang.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Generate a password satisfying `policy` using the OS CSPRNG.
///
/// # Errors
///
/// Returns [`PolicyError::AttemptsExhausted`] when [`MAX_ATTEMPTS`]
/// candidates in a row were rejected.
pub fn generate_valid_password(
    policy: &PasswordPolicy,
    privileged: bool,
) -> Result<String, PolicyError> {
    generate_valid_password_with(policy, privileged, &mut OsRng)
}

/// Same loop over a caller-supplied cryptographically secure rng.
///
/// Each call owns its candidate buffer, so concurrent calls only share the
/// read-only policy.
///
/// # Errors
///
/// Returns [`PolicyError::AttemptsExhausted`] when [`MAX_ATTEMPTS`]
/// candidates in a row were rejected.
pub fn generate_valid_password_with<R>(
    policy: &PasswordPolicy,
    privileged: bool,
    rng: &mut R,
) -> Result<String, PolicyError>
where
    R: RngCore + CryptoRng,
{
    let min_length = policy.min_length(privileged);
    for _ in 0..MAX_ATTEMPTS {
        let bytes = generate_candidate(rng, min_length);
        // All alphabets are ASCII.
        let candidate = core::str::from_utf8(&bytes).expect("password bytes are ASCII");
        if is_valid(policy, candidate, privileged) {
            return Ok(candidate.to_owned());
        }
        // Rejected candidates are zeroized on drop; nothing partial escapes.
    }
    Err(PolicyError::AttemptsExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Build one candidate of `min_length` bytes.
fn generate_candidate<R>(rng: &mut R, min_length: usize) -> Zeroizing<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = Zeroizing::new(Vec::with_capacity(min_length.max(CharClass::ALL.len())));

    // One guaranteed character per class, in fixed seeding order.
    for class in CharClass::ALL {
        bytes.push(choose(rng, class.alphabet()));
    }

    // Fill to the minimum length: uniform class, then uniform character.
    while bytes.len() < min_length {
        let class = CharClass::ALL[uniform_index(rng, CharClass::ALL.len())];
        bytes.push(choose(rng, class.alphabet()));
    }

    // Mix so the seeded characters are not positionally predictable.
    shuffle(rng, &mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::distinct_classes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn test_rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x0DD5_EED5)
    }

    #[test]
    fn candidate_has_min_length_and_all_classes() {
        let mut rng = test_rng();
        for min_length in [4, 12, 15, 40] {
            let bytes = generate_candidate(&mut rng, min_length);
            assert_eq!(bytes.len(), min_length);
            let s = core::str::from_utf8(&bytes).unwrap();
            assert_eq!(distinct_classes(s), 4);
        }
    }

    #[test]
    fn short_minimum_still_seeds_four_classes() {
        // min_length below the seed count: candidate is 4 bytes, one per class.
        let mut rng = test_rng();
        let bytes = generate_candidate(&mut rng, 1);
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn generated_passwords_validate() {
        let policy = PasswordPolicy::recommended();
        let mut rng = test_rng();
        for privileged in [false, true] {
            for _ in 0..50 {
                let password =
                    generate_valid_password_with(&policy, privileged, &mut rng).unwrap();
                assert!(is_valid(&policy, &password, privileged), "{password}");
                assert!(password.chars().count() >= policy.min_length(privileged));
            }
        }
    }

    #[test]
    fn impossible_policy_exhausts_attempts() {
        // `.` matches any character, so every non-empty candidate is rejected.
        let policy = PasswordPolicy::builder()
            .forbidden_patterns(["."])
            .build()
            .unwrap();
        let mut rng = test_rng();
        match generate_valid_password_with(&policy, false, &mut rng) {
            Err(PolicyError::AttemptsExhausted { attempts }) => {
                assert_eq!(attempts, MAX_ATTEMPTS);
            }
            other => panic!("expected AttemptsExhausted, got {other:?}"),
        }
    }
}
