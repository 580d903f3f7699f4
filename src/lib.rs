// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! # pixelseal
//!
//! Image encryption with a reduced ARX (Add-Rotate-XOR) block cipher, plus
//! tooling to corrupt ciphertext for robustness experiments.
//!
//! The cipher is a single-key 16-bit SPECK-style construction: 22 rounds over
//! a pair of 16-bit words, with a self-feeding key schedule derived from one
//! 16-bit key. It is a pedagogical design — its correctness contract is exact
//! reversibility, not cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! cipher      (atomic unit — 22-round ARX transform of one (x, y) word pair)
//!     ↕ driven across every (column, channel) cell of each row pair
//! codec       (pairs pixel rows two at a time; channels processed independently)
//!     ↕ serialized with a 12-byte dimension header
//! container   (little-endian header + payload wire format)
//!     ↕ optionally damaged in transit
//! attack      (noise / bitflip / block-corruption fault models)
//! ```
//!
//! Image file I/O, resizing, 8↔16-bit sample conversion and quality metrics
//! are the caller's concern; this crate only sees decoded [`PixelGrid`]
//! buffers and already-parsed parameters.
//!
//! # Quick start
//!
//! ```
//! use pixelseal::{PixelGrid, SpeckCipher, pipeline};
//!
//! let grid = PixelGrid::from_vec(vec![10, 20, 30, 40, 50, 60], 3, 2, 1);
//! let cipher = SpeckCipher::new(0xBEEF);
//!
//! let sealed = pipeline::encrypt_to_container(&grid, &cipher);
//! let opened = pipeline::decrypt_from_container(&sealed, &cipher).unwrap();
//! assert_eq!(opened.grid, grid);
//! ```

pub mod attack;
pub mod cipher;
pub mod codec;
pub mod container;
pub mod error;
pub mod grid;
pub mod keygen;
pub mod pipeline;

pub use attack::{AttackKind, AttackPlan};
pub use cipher::rotate::RotationStrategy;
pub use cipher::SpeckCipher;
pub use codec::Direction;
pub use container::{PayloadStatus, ReadOutcome};
pub use error::{AttackError, ContainerError};
pub use grid::PixelGrid;
