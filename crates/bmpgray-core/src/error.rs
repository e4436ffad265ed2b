//! Error types for bmpgray-core
//!
//! Covers the construction invariants of [`BitmapImage`](crate::BitmapImage)
//! and [`PixelBuffer`](crate::PixelBuffer). I/O failures live in
//! `bmpgray-io`, which wraps this type.

use thiserror::Error;

/// bmpgray-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `width * height` (times channel count) does not fit in memory sizes
    #[error("pixel count overflows for {width}x{height} ({channels} channels)")]
    PixelCountOverflow {
        width: u32,
        height: u32,
        channels: usize,
    },

    /// The sample buffer does not hold exactly the expected number of bytes
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Color table presence disagrees with the header bit depth
    #[error("color table mismatch for {bit_depth} bpp: expected present={expected}")]
    ColorTableMismatch { bit_depth: u32, expected: bool },
}

/// Result type alias for bmpgray-core operations
pub type Result<T> = std::result::Result<T, Error>;
