//! Deterministic random suffixes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters a random suffix is drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates `length` lowercase letters from a generator seeded with `seed`.
///
/// The same `(length, seed)` pair always yields the same string. A
/// non-positive length yields an empty string.
pub fn random_suffix(length: i64, seed: i64) -> String {
    if length <= 0 {
        return String::new();
    }

    let mut rng = StdRng::seed_from_u64(seed as u64);
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
