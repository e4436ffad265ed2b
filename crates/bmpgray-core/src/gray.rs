//! Luminance-weighted grayscale conversion
//!
//! Three-channel pixels are reduced to
//!
//! ```text
//! floor(0.30 * red + 0.59 * green + 0.11 * blue)
//! ```
//!
//! and the result is written back to all three channels, so the output
//! keeps the three-byte-per-pixel shape. Single-channel buffers have no
//! transform and pass through unchanged.

use crate::pixel::{Bgr, PixelBuffer};

/// Red weight, in hundredths
pub const RED_WEIGHT: u32 = 30;
/// Green weight, in hundredths
pub const GREEN_WEIGHT: u32 = 59;
/// Blue weight, in hundredths
pub const BLUE_WEIGHT: u32 = 11;

const WEIGHT_SCALE: u32 = 100;

/// Luminance of a pixel, truncated toward zero.
///
/// The weights are applied by role, so the byte order the pixel was read
/// in does not matter. Integer arithmetic gives the exact floor of the
/// decimal formula; white (255, 255, 255) maps to 255.
#[inline]
pub fn luminance(px: Bgr) -> u8 {
    let sum = RED_WEIGHT * px.red as u32
        + GREEN_WEIGHT * px.green as u32
        + BLUE_WEIGHT * px.blue as u32;
    // weights sum to WEIGHT_SCALE, so the quotient is at most 255
    (sum / WEIGHT_SCALE) as u8
}

impl PixelBuffer {
    /// Produce the grayscale version of this buffer.
    ///
    /// For three-channel buffers every pixel is replaced by
    /// `Bgr::gray(luminance(px))`. Single-channel buffers are copied as-is.
    /// `self` is left untouched.
    pub fn to_grayscale(&self) -> PixelBuffer {
        self.map_bgr(|px| Bgr::gray(luminance(px)))
    }

    /// True if every pixel is neutral. Single-channel buffers always are.
    pub fn is_grayscale(&self) -> bool {
        self.bgr_pixels().all(Bgr::is_gray)
    }
}
