// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Block-pairing transform driving the cipher across a pixel grid.
//!
//! Rows are consumed two at a time: for every channel and every column, the
//! cell pair `(grid[i][j][c], grid[i+1][j][c])` (even `i`) is one cipher
//! block. Channels are processed independently — there is no channel mixing.
//! If the height is odd, the final row belongs to no pair and passes through
//! untouched; that is the documented contract, not an error.
//!
//! Each block reads and writes a disjoint cell pair and consults only the
//! immutable round-key schedule, so row pairs are transformed in parallel
//! when the `parallel` feature is enabled. Decryption visits the same
//! physical pairs as encryption regardless of iteration order.

use crate::cipher::SpeckCipher;
use crate::grid::PixelGrid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Whether to run the cipher forward or inverse over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Transform `grid` in place under `cipher`.
///
/// Pairs even row `i` with row `i + 1` cell-by-cell across all columns and
/// channels; a trailing odd row is left untouched.
pub fn transform(grid: &mut PixelGrid, cipher: &SpeckCipher, direction: Direction) {
    let row_len = grid.width() * grid.channels();
    let pair_len = row_len * 2;
    if pair_len == 0 {
        return;
    }

    // Each chunk is one row pair; the top half is row i, the bottom half
    // row i + 1, with matching (column, channel) offsets. An odd final row
    // lands in the chunk remainder and is never visited.
    let apply = |pair: &mut [u16]| {
        let (top, bottom) = pair.split_at_mut(row_len);
        for cell in 0..row_len {
            let (x, y) = match direction {
                Direction::Encrypt => cipher.encrypt_block(top[cell], bottom[cell]),
                Direction::Decrypt => cipher.decrypt_block(top[cell], bottom[cell]),
            };
            top[cell] = x;
            bottom[cell] = y;
        }
    };

    #[cfg(feature = "parallel")]
    grid.data_mut().par_chunks_exact_mut(pair_len).for_each(apply);

    #[cfg(not(feature = "parallel"))]
    grid.data_mut().chunks_exact_mut(pair_len).for_each(apply);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_grid(width: usize, height: usize, channels: usize, seed: u64) -> PixelGrid {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let data = (0..width * height * channels).map(|_| rng.gen()).collect();
        PixelGrid::from_vec(data, width, height, channels)
    }

    #[test]
    fn grid_round_trip_even_height() {
        let original = random_grid(5, 6, 3, 1);
        let cipher = SpeckCipher::new(0x5EED);

        let mut grid = original.clone();
        transform(&mut grid, &cipher, Direction::Encrypt);
        assert_ne!(grid, original, "encryption must change the grid");

        transform(&mut grid, &cipher, Direction::Decrypt);
        assert_eq!(grid, original);
    }

    #[test]
    fn all_zero_grid_round_trips() {
        let original = PixelGrid::new(4, 4, 1);
        let cipher = SpeckCipher::new(0xABCD);

        let mut grid = original.clone();
        transform(&mut grid, &cipher, Direction::Encrypt);
        transform(&mut grid, &cipher, Direction::Decrypt);
        assert_eq!(grid, original);
    }

    #[test]
    fn odd_height_last_row_passes_through() {
        let original = random_grid(4, 5, 2, 2);
        let cipher = SpeckCipher::new(0x0FF0);

        let mut grid = original.clone();
        transform(&mut grid, &cipher, Direction::Encrypt);
        assert_eq!(
            grid.row(4),
            original.row(4),
            "unpaired final row must be untouched by encryption"
        );
        assert_ne!(grid.row(0), original.row(0));

        transform(&mut grid, &cipher, Direction::Decrypt);
        assert_eq!(grid, original);
    }

    #[test]
    fn height_one_grid_is_untouched() {
        let original = random_grid(8, 1, 3, 3);
        let mut grid = original.clone();
        transform(&mut grid, &SpeckCipher::new(1), Direction::Encrypt);
        assert_eq!(grid, original);
    }

    #[test]
    fn channels_are_independent() {
        // Two channels carrying identical samples must produce identical
        // ciphertext per channel — blocks never mix across channels.
        let cipher = SpeckCipher::new(0x7777);
        let mut grid = PixelGrid::new(3, 4, 2);
        for row in 0..4 {
            for col in 0..3 {
                let v = (row * 3 + col) as u16;
                grid.set(row, col, 0, v);
                grid.set(row, col, 1, v);
            }
        }

        transform(&mut grid, &cipher, Direction::Encrypt);
        for row in 0..4 {
            for col in 0..3 {
                assert_eq!(grid.get(row, col, 0), grid.get(row, col, 1));
            }
        }
    }

    #[test]
    fn matches_per_block_cipher_calls() {
        let original = random_grid(3, 4, 2, 4);
        let cipher = SpeckCipher::new(0x1359);

        let mut grid = original.clone();
        transform(&mut grid, &cipher, Direction::Encrypt);

        for chan in 0..2 {
            for row in (0..4).step_by(2) {
                for col in 0..3 {
                    let (x, y) = cipher.encrypt_block(
                        original.get(row, col, chan),
                        original.get(row + 1, col, chan),
                    );
                    assert_eq!(grid.get(row, col, chan), x);
                    assert_eq!(grid.get(row + 1, col, chan), y);
                }
            }
        }
    }
}
