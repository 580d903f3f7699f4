// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Reduced SPECK-style ARX block cipher over pairs of 16-bit words.
//!
//! This is a single-key variant: the whole schedule is generated from one
//! 16-bit key by feeding each round key back into the generator, rather than
//! the published multi-word SPECK key expansion. 22 rounds, rotation amounts
//! 7 and 2, all arithmetic modulo 2^16.
//!
//! Decryption applies the exact algebraic inverse of each round step in
//! reverse round order. The rotation amounts must match the forward ones
//! (right-7 undone by left-7, left-2 undone by right-2) — a mismatched
//! inverse rotation still "runs" but silently breaks the round trip.
//!
//! Both operations are total over their 16-bit inputs; there is no error
//! path in this module.

pub mod rotate;

use rotate::{RotationStrategy, Rotations};

/// Number of cipher rounds and round keys.
pub const ROUNDS: usize = 22;

/// One instance of the cipher, holding the expanded round-key schedule.
///
/// Construction is pure CPU work; after it, the instance is immutable and
/// safe to share across threads.
pub struct SpeckCipher {
    round_keys: [u16; ROUNDS],
    rotations: Rotations,
}

impl SpeckCipher {
    /// Create a cipher for `key`, computing rotations directly.
    pub fn new(key: u16) -> Self {
        Self::with_rotation(key, RotationStrategy::Direct)
    }

    /// Create a cipher for `key` with an explicit rotation strategy.
    ///
    /// [`RotationStrategy::Table`] trades four 65536-entry lookup tables
    /// built at construction time for O(1) rotations; outputs are identical
    /// to [`RotationStrategy::Direct`] for every input.
    pub fn with_rotation(key: u16, strategy: RotationStrategy) -> Self {
        let mut round_keys = [0u16; ROUNDS];
        let mut l = key;
        for (i, rk) in round_keys.iter_mut().enumerate() {
            *rk = l;
            l = l.rotate_right(7).wrapping_add(*rk) ^ i as u16;
        }
        Self {
            round_keys,
            rotations: Rotations::new(strategy),
        }
    }

    /// The 22-entry round-key schedule. Deterministic per key.
    pub fn round_keys(&self) -> &[u16; ROUNDS] {
        &self.round_keys
    }

    /// Encrypt one block.
    ///
    /// Per round key `k`, in schedule order:
    /// `x = (ror7(x) + y) ^ k; y = rol2(y) ^ x`.
    pub fn encrypt_block(&self, mut x: u16, mut y: u16) -> (u16, u16) {
        let r = &self.rotations;
        for &k in &self.round_keys {
            x = r.ror7(x).wrapping_add(y) ^ k;
            y = r.rol2(y) ^ x;
        }
        (x, y)
    }

    /// Decrypt one block, inverting [`encrypt_block`](Self::encrypt_block)
    /// round by round in reverse schedule order:
    /// `y = ror2(y ^ x); x = rol7((x ^ k) - y)`.
    pub fn decrypt_block(&self, mut x: u16, mut y: u16) -> (u16, u16) {
        let r = &self.rotations;
        for &k in self.round_keys.iter().rev() {
            y = r.ror2(y ^ x);
            x = r.rol7((x ^ k).wrapping_sub(y));
        }
        (x, y)
    }
}
