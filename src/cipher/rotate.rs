// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Rotation strategy: direct computation vs. precomputed lookup tables.
//!
//! The cipher uses exactly four rotations (right-7, left-2 forward; right-2,
//! left-7 inverse). [`RotationStrategy::Table`] materializes each as a full
//! 65536-entry table at construction time — a pure implementation-strategy
//! switch, required to be bit-identical to the direct computation.

/// How the cipher computes its 16-bit rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    /// Compute rotations with `rotate_left`/`rotate_right` on demand.
    #[default]
    Direct,
    /// Precompute all four rotations over the full 16-bit domain
    /// (4 × 128 KiB of tables per cipher instance).
    Table,
}

/// Resolved rotation backend held by a cipher instance.
pub(crate) enum Rotations {
    Direct,
    Table(Tables),
}

pub(crate) struct Tables {
    ror7: Vec<u16>,
    rol2: Vec<u16>,
    ror2: Vec<u16>,
    rol7: Vec<u16>,
}

fn build_table(f: impl Fn(u16) -> u16) -> Vec<u16> {
    (0..=u16::MAX).map(f).collect()
}

impl Rotations {
    pub(crate) fn new(strategy: RotationStrategy) -> Self {
        match strategy {
            RotationStrategy::Direct => Self::Direct,
            RotationStrategy::Table => Self::Table(Tables {
                ror7: build_table(|x| x.rotate_right(7)),
                rol2: build_table(|x| x.rotate_left(2)),
                ror2: build_table(|x| x.rotate_right(2)),
                rol7: build_table(|x| x.rotate_left(7)),
            }),
        }
    }

    #[inline]
    pub(crate) fn ror7(&self, x: u16) -> u16 {
        match self {
            Self::Direct => x.rotate_right(7),
            Self::Table(t) => t.ror7[x as usize],
        }
    }

    #[inline]
    pub(crate) fn rol2(&self, x: u16) -> u16 {
        match self {
            Self::Direct => x.rotate_left(2),
            Self::Table(t) => t.rol2[x as usize],
        }
    }

    #[inline]
    pub(crate) fn ror2(&self, x: u16) -> u16 {
        match self {
            Self::Direct => x.rotate_right(2),
            Self::Table(t) => t.ror2[x as usize],
        }
    }

    #[inline]
    pub(crate) fn rol7(&self, x: u16) -> u16 {
        match self {
            Self::Direct => x.rotate_left(7),
            Self::Table(t) => t.rol7[x as usize],
        }
    }
}
