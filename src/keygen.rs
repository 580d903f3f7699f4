// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Key generation and key-store serialization.
//!
//! The key is a single 16-bit value drawn uniformly from an injectable RNG.
//! How the serialized key is persisted (file, keyring, …) is the caller's
//! concern; this module only fixes the byte layout (little-endian, matching
//! the container format).

use rand::Rng;

/// Serialized key length in bytes.
pub const KEY_LEN: usize = 2;

/// Draw a uniform 16-bit key from `rng`.
pub fn generate_key<R: Rng>(rng: &mut R) -> u16 {
    rng.gen()
}

/// Serialize a key for the key store (little-endian).
pub fn key_to_bytes(key: u16) -> [u8; KEY_LEN] {
    key.to_le_bytes()
}

/// Deserialize a key from its key-store form.
pub fn key_from_bytes(bytes: [u8; KEY_LEN]) -> u16 {
    u16::from_le_bytes(bytes)
}
