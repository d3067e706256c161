// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deterministic Random Suffix
//!
//! Not a source of entropy. The token only has to be reproducible: the same
//! `(length, seed)` yields the same letters on every platform and in every
//! process, so a name survives repeated plan/apply cycles unchanged.
//!
//! # Algorithm
//!
//! ```text
//! state_0     = seed
//! state_{n+1} = state_n * 6364136223846793005 + 1442695040888963407  (mod 2^64)
//! letter_n    = 'a' + (state_{n+1} >> 33) % 26
//! ```
//!
//! Implicit seeds are the first eight bytes (big-endian) of the SHA-256 of
//! the inputs joined with `0x1f`, masked to 63 bits.

use sha2::{Digest, Sha256};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;
const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const FIELD_SEPARATOR: u8 = 0x1f;

/// 64-bit linear congruential generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Next lowercase Latin letter
    pub fn next_letter(&mut self) -> char {
        let index = (self.next_u64() >> 33) % ALPHABET.len() as u64;
        char::from(ALPHABET[index as usize])
    }
}

/// Lowercase letters `a..z`, exactly `length` of them
pub fn random_string(length: usize, seed: u64) -> String {
    let mut rng = Lcg::new(seed);
    (0..length).map(|_| rng.next_letter()).collect()
}

/// Stable 63-bit seed over an ordered sequence of input fields
pub fn derive_seed<I, S>(fields: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            hasher.update([FIELD_SEPARATOR]);
        }
        hasher.update(field.as_ref());
    }
    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) & (u64::MAX >> 1)
}
