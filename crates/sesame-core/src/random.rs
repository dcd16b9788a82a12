//! Unbiased draws from a cryptographically secure random source.
//!
//! A raw byte encodes 256 values, so a naive `byte % n` over-weights the
//! low residues whenever `n` does not divide 256. Every selection in this
//! crate instead goes through [`uniform_index`], which redraws until the
//! byte falls below the largest multiple of `n` — each residue is then
//! exactly equally likely.
//!
//! All functions are generic over `RngCore + CryptoRng`; production code
//! passes `OsRng`, tests pass a seeded `ChaCha20Rng`.

use rand::{CryptoRng, RngCore};

/// Draw an unbiased index in `[0, n)` by single-byte rejection sampling.
///
/// Requires `1 <= n <= 256`. Callers in this crate only pass alphabet
/// sizes (at most 28) and candidate lengths (at most the policy length
/// cap of 128), so a single byte always suffices.
#[allow(clippy::arithmetic_side_effects)]
pub fn uniform_index<R>(rng: &mut R, n: usize) -> usize
where
    R: RngCore + CryptoRng,
{
    debug_assert!((1..=256).contains(&n));
    if n <= 1 {
        return 0;
    }
    // Largest multiple of n not exceeding 256; bytes at or above it are
    // redrawn.
    let zone = 256 - (256 % n);
    let mut buf = [0u8; 1];
    loop {
        rng.fill_bytes(&mut buf);
        let value = usize::from(buf[0]);
        if value < zone {
            return value % n;
        }
    }
}

/// One uniformly chosen byte of `alphabet`.
pub fn choose<R>(rng: &mut R, alphabet: &[u8]) -> u8
where
    R: RngCore + CryptoRng,
{
    alphabet[uniform_index(rng, alphabet.len())]
}

/// Fisher–Yates shuffle with rejection-sampled swap indices.
#[allow(clippy::arithmetic_side_effects)]
pub fn shuffle<R>(rng: &mut R, bytes: &mut [u8])
where
    R: RngCore + CryptoRng,
{
    let mut n = bytes.len();
    while n > 1 {
        let k = uniform_index(rng, n);
        n -= 1;
        bytes.swap(k, n);
    }
}
