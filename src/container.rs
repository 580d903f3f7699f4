// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Length-prefixed binary container for encrypted pixel grids.
//!
//! Wire layout, little-endian throughout:
//!
//! ```text
//! offset 0   u32  width
//! offset 4   u32  height
//! offset 8   u32  channels
//! offset 12  u16 × (width * height * channels)   samples, row-major
//! ```
//!
//! Reading is deliberately lenient about payload length: a payload shorter
//! than the header declares is zero-padded to full size and reported via
//! [`PayloadStatus::Truncated`] (and a `log::warn!`), never raised as an
//! error. Downstream tooling relies on partially damaged containers still
//! decoding; callers that want strictness can check the status themselves.
//! Only a header shorter than 12 bytes is fatal.

use crate::error::ContainerError;
use crate::grid::PixelGrid;

/// Size of the dimension header in bytes.
pub const HEADER_LEN: usize = 12;

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl Header {
    /// Number of 16-bit samples the payload should carry.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}

/// Whether the payload matched the length the header declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStatus {
    /// Payload carried at least the declared number of samples.
    Complete,
    /// Payload was short; the missing tail was zero-filled.
    Truncated { expected: usize, actual: usize },
}

/// A decoded container: the grid plus the recovery status of its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    pub grid: PixelGrid,
    pub status: PayloadStatus,
}

/// Serialize `grid` into the container wire format.
pub fn write(grid: &PixelGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + grid.len() * 2);
    out.extend_from_slice(&(grid.width() as u32).to_le_bytes());
    out.extend_from_slice(&(grid.height() as u32).to_le_bytes());
    out.extend_from_slice(&(grid.channels() as u32).to_le_bytes());
    for &sample in grid.data() {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Parse just the 12-byte header.
pub fn read_header(bytes: &[u8]) -> Result<Header, ContainerError> {
    if bytes.len() < HEADER_LEN {
        return Err(ContainerError::TruncatedHeader(bytes.len()));
    }
    let u32_at = |off: usize| u32::from_le_bytes(bytes[off..off + 4].try_into().unwrap());
    Ok(Header {
        width: u32_at(0),
        height: u32_at(4),
        channels: u32_at(8),
    })
}

/// Deserialize a container back into a [`PixelGrid`].
///
/// A short payload is zero-padded (see module docs); trailing bytes beyond
/// the declared sample count are ignored. An odd trailing byte cannot form a
/// 16-bit sample and counts as missing.
pub fn read(bytes: &[u8]) -> Result<ReadOutcome, ContainerError> {
    let header = read_header(bytes)?;
    let expected = header.sample_count();

    let payload = &bytes[HEADER_LEN..];
    let available = payload.len() / 2;

    // zip stops at whichever side is shorter: a long payload is cut to
    // `expected`, a short one leaves the zero-filled tail in place.
    let mut data = vec![0u16; expected];
    for (sample, pair) in data.iter_mut().zip(payload.chunks_exact(2)) {
        *sample = u16::from_le_bytes([pair[0], pair[1]]);
    }

    let status = if available < expected {
        log::warn!(
            "container payload truncated: expected {expected} samples, got {available}; \
             zero-filling the remainder"
        );
        PayloadStatus::Truncated {
            expected,
            actual: available,
        }
    } else {
        PayloadStatus::Complete
    };

    let grid = PixelGrid::from_vec(
        data,
        header.width as usize,
        header.height as usize,
        header.channels as usize,
    );
    Ok(ReadOutcome { grid, status })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> PixelGrid {
        let data: Vec<u16> = (0..24).map(|v| v * 1000).collect();
        PixelGrid::from_vec(data, 4, 3, 2)
    }

    #[test]
    fn round_trip() {
        let grid = sample_grid();
        let bytes = write(&grid);
        assert_eq!(bytes.len(), HEADER_LEN + 24 * 2);

        let outcome = read(&bytes).unwrap();
        assert_eq!(outcome.status, PayloadStatus::Complete);
        assert_eq!(outcome.grid, grid);
    }

    #[test]
    fn header_layout_is_little_endian() {
        let grid = PixelGrid::new(258, 1, 1);
        let bytes = write(&grid);
        assert_eq!(&bytes[0..4], &[0x02, 0x01, 0x00, 0x00]);
        assert_eq!(&bytes[4..8], &[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn header_256x256x3_reads_back() {
        let grid = PixelGrid::new(256, 256, 3);
        let bytes = write(&grid);
        let header = read_header(&bytes).unwrap();
        assert_eq!(header.width, 256);
        assert_eq!(header.height, 256);
        assert_eq!(header.channels, 3);
        assert_eq!(header.sample_count(), 196_608);
        assert_eq!(read(&bytes).unwrap().grid.len(), 196_608);
    }

    #[test]
    fn short_header_is_fatal() {
        let err = read(&[1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err, ContainerError::TruncatedHeader(5));
    }

    #[test]
    fn short_payload_is_zero_padded() {
        let grid = sample_grid();
        let mut bytes = write(&grid);
        bytes.truncate(HEADER_LEN + 10); // 5 of 24 samples survive

        let outcome = read(&bytes).unwrap();
        assert_eq!(
            outcome.status,
            PayloadStatus::Truncated {
                expected: 24,
                actual: 5
            }
        );
        assert_eq!(&outcome.grid.data()[..5], &grid.data()[..5]);
        assert!(outcome.grid.data()[5..].iter().all(|&v| v == 0));
    }

    #[test]
    fn odd_trailing_byte_counts_as_missing() {
        let grid = sample_grid();
        let mut bytes = write(&grid);
        bytes.pop();

        let outcome = read(&bytes).unwrap();
        assert_eq!(
            outcome.status,
            PayloadStatus::Truncated {
                expected: 24,
                actual: 23
            }
        );
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let grid = sample_grid();
        let mut bytes = write(&grid);
        bytes.extend_from_slice(&[0xFF; 8]);

        let outcome = read(&bytes).unwrap();
        assert_eq!(outcome.status, PayloadStatus::Complete);
        assert_eq!(outcome.grid, grid);
    }
}
