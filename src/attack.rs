// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Ciphertext corruption simulator.
//!
//! Emulates transmission and storage faults against a serialized container
//! to measure how much visual damage each fault model causes after
//! decryption. The simulator knows nothing about the cipher — it only sees
//! 16-bit payload values and the image width (used to scale corruption runs).
//!
//! Three fault models:
//!
//! - **noise** — adds a bounded random offset to a severity-scaled number of
//!   distinct values, clamped to the 16-bit range.
//! - **bitflip** — flips one random bit in the same number of distinct values.
//! - **block_corruption** — overwrites up to five contiguous runs (each
//!   between `width*2` and `width*10` values) with random data or a single
//!   repeated constant.
//!
//! All randomness comes from an injectable [`rand::Rng`] source so tests can
//! pin exact corrupted indices and values with a seeded generator.

use std::str::FromStr;

use rand::seq::index;
use rand::Rng;

use crate::container::{self, HEADER_LEN};
use crate::error::AttackError;

/// Fault model applied to a container payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Noise,
    BitFlip,
    BlockCorruption,
}

impl FromStr for AttackKind {
    type Err = AttackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noise" => Ok(Self::Noise),
            "bitflip" => Ok(Self::BitFlip),
            "block_corruption" => Ok(Self::BlockCorruption),
            other => Err(AttackError::UnsupportedKind(other.to_owned())),
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Noise => "noise",
            Self::BitFlip => "bitflip",
            Self::BlockCorruption => "block_corruption",
        })
    }
}

/// One corruption request: what to do and how hard.
///
/// `severity` is the fraction (0.0–1.0) of payload values to target; values
/// outside that range are the caller's responsibility to reject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPlan {
    pub kind: AttackKind,
    pub severity: f64,
}

/// Largest absolute offset the noise attack adds to a value.
const NOISE_RANGE: i32 = 5000;

/// Maximum number of corruption runs per block_corruption attack.
const MAX_CORRUPTION_RUNS: usize = 5;

/// Corrupt `values` in place according to `plan`.
///
/// `width` is the image width from the container header; only the
/// block-corruption model uses it, to scale run offsets and lengths.
pub fn corrupt_payload<R: Rng>(values: &mut [u16], width: u32, plan: AttackPlan, rng: &mut R) {
    debug_assert!(
        (0.0..=1.0).contains(&plan.severity),
        "severity out of range: {}",
        plan.severity
    );
    match plan.kind {
        AttackKind::Noise => add_noise(values, plan.severity, rng),
        AttackKind::BitFlip => flip_bits(values, plan.severity, rng),
        AttackKind::BlockCorruption => corrupt_runs(values, width as usize, plan.severity, rng),
    }
}

/// Corrupt a serialized container, preserving its header bytes exactly.
///
/// Returns the corrupted container, or an error (and no output) if the input
/// has no parseable header. An odd trailing payload byte cannot form a
/// sample and is dropped.
pub fn corrupt_container<R: Rng>(
    bytes: &[u8],
    plan: AttackPlan,
    rng: &mut R,
) -> Result<Vec<u8>, AttackError> {
    let header = container::read_header(bytes)?;

    let payload = &bytes[HEADER_LEN..];
    let mut values: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    log::debug!(
        "attack {} severity {:.2}: {} payload values, width {}",
        plan.kind,
        plan.severity,
        values.len(),
        header.width
    );
    corrupt_payload(&mut values, header.width, plan, rng);

    let mut out = Vec::with_capacity(HEADER_LEN + values.len() * 2);
    out.extend_from_slice(&bytes[..HEADER_LEN]);
    for v in &values {
        out.extend_from_slice(&v.to_le_bytes());
    }
    Ok(out)
}

/// `floor(len * severity)` — the per-value attack budget.
fn corruption_budget(len: usize, severity: f64) -> usize {
    (len as f64 * severity) as usize
}

fn add_noise<R: Rng>(values: &mut [u16], severity: f64, rng: &mut R) {
    let count = corruption_budget(values.len(), severity);
    for idx in index::sample(rng, values.len(), count) {
        let offset = rng.gen_range(-NOISE_RANGE..=NOISE_RANGE);
        values[idx] = (values[idx] as i32 + offset).clamp(0, u16::MAX as i32) as u16;
    }
}

fn flip_bits<R: Rng>(values: &mut [u16], severity: f64, rng: &mut R) {
    let count = corruption_budget(values.len(), severity);
    for idx in index::sample(rng, values.len(), count) {
        let bit = rng.gen_range(0..16);
        values[idx] ^= 1 << bit;
    }
}

fn corrupt_runs<R: Rng>(values: &mut [u16], width: usize, severity: f64, rng: &mut R) {
    let num_runs = MAX_CORRUPTION_RUNS.min((severity * 20.0) as usize + 1);
    let len = values.len();

    for _ in 0..num_runs {
        // Runs only make sense when the payload comfortably exceeds the
        // largest possible run; smaller payloads are skipped entirely.
        if len <= width * 10 {
            continue;
        }
        let start = rng.gen_range(0..=len - width * 10);
        let run_len = rng.gen_range(width * 2..=width * 10);
        let run = &mut values[start..start + run_len];

        if rng.gen_bool(0.5) {
            for v in run.iter_mut() {
                *v = rng.gen();
            }
        } else {
            run.fill(rng.gen());
        }
    }
}
