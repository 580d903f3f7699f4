// Copyright (c) 2026 Pixelseal Contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/pixelseal/pixelseal

//! Pixel grid carried as 16-bit words.
//!
//! A [`PixelGrid`] is a dense `[row][column][channel]` array backed by a flat
//! row-major `Vec<u16>`. The true sample depth is 8 bits (values conceptually
//! 0–255 before encryption), but samples are carried as 16-bit words so two
//! vertically adjacent pixels form one cipher block. Decoding back to a
//! display format is the image-I/O caller's job.

/// Dense 3-D grid of 16-bit samples, row-major `[row][column][channel]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u16>,
}

impl PixelGrid {
    /// Create a zero-filled grid. Dimensions must be positive.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; width * height * channels],
        }
    }

    /// Wrap an existing flat sample buffer.
    ///
    /// # Panics
    /// If `data.len() != width * height * channels`.
    pub fn from_vec(data: Vec<u16>, width: usize, height: usize, channels: usize) -> Self {
        assert_eq!(
            data.len(),
            width * height * channels,
            "sample buffer does not match grid dimensions"
        );
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of samples (`width * height * channels`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize, chan: usize) -> usize {
        debug_assert!(row < self.height && col < self.width && chan < self.channels);
        (row * self.width + col) * self.channels + chan
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize, chan: usize) -> u16 {
        self.data[self.index(row, col, chan)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, chan: usize, value: u16) {
        let i = self.index(row, col, chan);
        self.data[i] = value;
    }

    /// Flat row-major sample slice.
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    /// One full row of samples (`width * channels` values).
    pub fn row(&self, row: usize) -> &[u16] {
        let stride = self.width * self.channels;
        &self.data[row * stride..(row + 1) * stride]
    }
}
