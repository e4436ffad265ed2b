//! Bitmap file header
//!
//! The minimal bitmap subset handled here has a fixed 54-byte header
//! (14-byte file header followed by a 40-byte info header). Only three
//! fields are interpreted: width, height and bit depth. The raw bytes are
//! kept verbatim so the header can be written back unchanged.
//!
//! No magic-signature or compression checks are performed.

use crate::pixel::PixelFormat;

/// Size of the raw header in bytes
pub const HEADER_SIZE: usize = 54;

/// Size of the color table that follows the header for bit depths <= 8
pub const COLOR_TABLE_SIZE: usize = 1024;

/// Byte offset of the image width
pub const WIDTH_OFFSET: usize = 18;
/// Byte offset of the image height
pub const HEIGHT_OFFSET: usize = 22;
/// Byte offset of the bit depth
pub const BIT_DEPTH_OFFSET: usize = 28;

/// Highest bit depth that still carries a color table
pub const MAX_PALETTE_DEPTH: u32 = 8;

/// Assemble a little-endian `u32` from four bytes starting at `offset`.
///
/// Works byte by byte, so the result does not depend on host byte order
/// or on the alignment of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `offset + 4`.
#[inline]
pub fn read_le_u32(bytes: &[u8], offset: usize) -> u32 {
    (bytes[offset] as u32)
        | ((bytes[offset + 1] as u32) << 8)
        | ((bytes[offset + 2] as u32) << 16)
        | ((bytes[offset + 3] as u32) << 24)
}

/// Parsed bitmap header.
///
/// Immutable once parsed. `raw` is the exact byte sequence read from the
/// source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapHeader {
    raw: [u8; HEADER_SIZE],
    width: u32,
    height: u32,
    bit_depth: u32,
}

impl BitmapHeader {
    /// Interpret a raw 54-byte header.
    pub fn parse(raw: [u8; HEADER_SIZE]) -> Self {
        let width = read_le_u32(&raw, WIDTH_OFFSET);
        let height = read_le_u32(&raw, HEIGHT_OFFSET);
        let bit_depth = read_le_u32(&raw, BIT_DEPTH_OFFSET);
        Self {
            raw,
            width,
            height,
            bit_depth,
        }
    }

    /// The header bytes exactly as read.
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.raw
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per pixel, as declared in the header
    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Low bit depths carry a palette by format convention.
    pub fn has_color_table(&self) -> bool {
        self.bit_depth <= MAX_PALETTE_DEPTH
    }

    /// Pixel layout implied by the bit depth.
    pub fn pixel_format(&self) -> PixelFormat {
        PixelFormat::from_bit_depth(self.bit_depth)
    }

    /// `width * height`, or `None` if it overflows `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}
