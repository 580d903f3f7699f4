// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! One-call encrypt/decrypt orchestration.
//!
//! Wires the grid transform and the container codec together for callers
//! that hold a decoded pixel buffer and just want sealed bytes back (or the
//! reverse). The caller keeps ownership of its plaintext grid; encryption
//! works on a copy.

use crate::cipher::SpeckCipher;
use crate::codec::{self, Direction};
use crate::container::{self, ReadOutcome};
use crate::error::ContainerError;
use crate::grid::PixelGrid;

/// Encrypt `grid` under `cipher` and serialize it into container bytes.
pub fn encrypt_to_container(grid: &PixelGrid, cipher: &SpeckCipher) -> Vec<u8> {
    let mut work = grid.clone();
    codec::transform(&mut work, cipher, Direction::Encrypt);
    container::write(&work)
}

/// Parse container bytes and decrypt the grid under `cipher`.
///
/// A truncated payload decrypts anyway (the zero-filled tail decrypts to
/// garbage rows); the outcome's [`status`](ReadOutcome::status) says whether
/// the payload was complete.
pub fn decrypt_from_container(
    bytes: &[u8],
    cipher: &SpeckCipher,
) -> Result<ReadOutcome, ContainerError> {
    let mut outcome = container::read(bytes)?;
    codec::transform(&mut outcome.grid, cipher, Direction::Decrypt);
    Ok(outcome)
}
