//! BitmapImage - the decoded image
//!
//! A `BitmapImage` is built once by the decoder and is immutable from then
//! on. The grayscale stage takes it by value and returns a new image that
//! shares the same header and color table.

use crate::error::{Error, Result};
use crate::header::{BitmapHeader, COLOR_TABLE_SIZE, HEADER_SIZE};
use crate::pixel::{PixelBuffer, PixelFormat};

/// The 1024-byte palette that follows the header for bit depths <= 8.
///
/// Carried verbatim; its entries are never interpreted.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorTable(pub [u8; COLOR_TABLE_SIZE]);

impl ColorTable {
    /// Raw palette bytes
    pub fn as_bytes(&self) -> &[u8; COLOR_TABLE_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for ColorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorTable")
            .field("len", &COLOR_TABLE_SIZE)
            .finish()
    }
}

/// A decoded bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapImage {
    header: BitmapHeader,
    color_table: Option<ColorTable>,
    pixels: PixelBuffer,
}

impl BitmapImage {
    /// Assemble an image from its decoded parts.
    ///
    /// # Errors
    ///
    /// - [`Error::ColorTableMismatch`] if a color table is given for a deep
    ///   image or missing for a palette image.
    /// - [`Error::PixelCountOverflow`] if `width * height` overflows.
    /// - [`Error::BufferSizeMismatch`] if `pixels` does not hold exactly
    ///   `width * height` pixels.
    pub fn new(
        header: BitmapHeader,
        color_table: Option<ColorTable>,
        pixels: PixelBuffer,
    ) -> Result<Self> {
        if color_table.is_some() != header.has_color_table() {
            return Err(Error::ColorTableMismatch {
                bit_depth: header.bit_depth(),
                expected: header.has_color_table(),
            });
        }
        let pixel_count = header.pixel_count().ok_or(Error::PixelCountOverflow {
            width: header.width(),
            height: header.height(),
            channels: pixels.format().channels(),
        })?;
        if pixels.pixel_count() != pixel_count {
            let channels = pixels.format().channels();
            return Err(Error::BufferSizeMismatch {
                expected: pixel_count.saturating_mul(channels),
                actual: pixels.as_bytes().len(),
            });
        }
        Ok(Self {
            header,
            color_table,
            pixels,
        })
    }

    /// Parsed header
    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.header.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Declared bits per pixel
    pub fn bit_depth(&self) -> u32 {
        self.header.bit_depth()
    }

    /// Palette, present iff the bit depth is <= 8
    pub fn color_table(&self) -> Option<&ColorTable> {
        self.color_table.as_ref()
    }

    /// Pixel samples
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Layout of the pixel samples
    pub fn format(&self) -> PixelFormat {
        self.pixels.format()
    }

    /// Size of this image once encoded: header, palette and samples.
    pub fn encoded_len(&self) -> usize {
        let table = if self.color_table.is_some() {
            COLOR_TABLE_SIZE
        } else {
            0
        };
        HEADER_SIZE + table + self.pixels.as_bytes().len()
    }

    /// Consume the image and return its grayscale version.
    ///
    /// Header and color table move over unchanged.
    pub fn into_grayscale(self) -> BitmapImage {
        let pixels = self.pixels.to_grayscale();
        BitmapImage {
            header: self.header,
            color_table: self.color_table,
            pixels,
        }
    }

    /// Split into header, color table and pixels.
    pub fn into_parts(self) -> (BitmapHeader, Option<ColorTable>, PixelBuffer) {
        (self.header, self.color_table, self.pixels)
    }
}
