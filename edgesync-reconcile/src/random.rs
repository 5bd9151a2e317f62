//! Random suffix/identifier generation.
//!
//! Collision-resistant in practice (uniform sampling), not
//! cryptographic. There is deliberately no uniqueness retry loop.

use rand::distributions::Alphanumeric;
use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Random string of uppercase/lowercase letters.
pub(crate) fn random_alphabetic(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Random string of letters and digits.
pub(crate) fn random_alphanumeric(len: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
