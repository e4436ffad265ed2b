//! Pixel formats and the owned pixel buffer
//!
//! # Buffer layout
//!
//! A [`PixelBuffer`] is one contiguous allocation. Sample `c` of pixel `i`
//! lives at `i * channels + c`. Three-channel pixels are stored in file
//! order, which for bitmaps is blue, green, red.

use crate::error::{Error, Result};
use crate::header::MAX_PALETTE_DEPTH;

/// Channel layout of the pixel payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One byte per pixel (palette index or gray level)
    SingleChannel,
    /// Three bytes per pixel, blue-green-red
    ThreeChannel,
}

impl PixelFormat {
    /// Select the layout from a header bit depth.
    ///
    /// Depths up to 8 bpp are palette images and are read one byte per
    /// pixel; anything deeper is read as three-channel color.
    pub fn from_bit_depth(bits: u32) -> Self {
        if bits <= MAX_PALETTE_DEPTH {
            PixelFormat::SingleChannel
        } else {
            PixelFormat::ThreeChannel
        }
    }

    /// Number of bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::SingleChannel => 1,
            PixelFormat::ThreeChannel => 3,
        }
    }

    /// Bytes needed for `pixel_count` pixels, or `None` on overflow.
    pub fn buffer_len(self, pixel_count: usize) -> Option<usize> {
        pixel_count.checked_mul(self.channels())
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelFormat::SingleChannel => f.write_str("single-channel"),
            PixelFormat::ThreeChannel => f.write_str("three-channel"),
        }
    }
}

/// A three-channel pixel, named by color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bgr {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Bgr {
    /// Build from the three bytes of a pixel as they appear in the file.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
        }
    }

    /// Bytes in file order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// A neutral pixel with every channel set to `value`.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Self {
            blue: value,
            green: value,
            red: value,
        }
    }

    /// True when all three channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.blue == self.green && self.green == self.red
    }
}

/// Owned pixel samples for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] unless `data` holds exactly
    /// `pixel_count` pixels of `format`.
    pub fn from_raw(format: PixelFormat, pixel_count: usize, data: Vec<u8>) -> Result<Self> {
        let expected = format
            .buffer_len(pixel_count)
            .ok_or(Error::BufferSizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { format, data })
    }

    /// Layout of the samples.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Number of pixels held.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.format.channels()
    }

    /// Raw samples in file order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw samples.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Samples of pixel `index`, or `None` if out of range.
    pub fn pixel(&self, index: usize) -> Option<&[u8]> {
        let channels = self.format.channels();
        let start = index.checked_mul(channels)?;
        let end = start.checked_add(channels)?;
        self.data.get(start..end)
    }

    /// Iterate three-channel pixels.
    ///
    /// Yields nothing for a single-channel buffer.
    pub fn bgr_pixels(&self) -> impl Iterator<Item = Bgr> + '_ {
        let chunks: &[u8] = match self.format {
            PixelFormat::ThreeChannel => self.data.as_slice(),
            PixelFormat::SingleChannel => &[],
        };
        chunks
            .chunks_exact(3)
            .map(|c| Bgr::from_bytes([c[0], c[1], c[2]]))
    }

    /// Build a new buffer of the same shape by applying `f` to every
    /// three-channel pixel. Single-channel buffers are copied unchanged.
    pub fn map_bgr(&self, f: impl Fn(Bgr) -> Bgr) -> PixelBuffer {
        match self.format {
            PixelFormat::SingleChannel => self.clone(),
            PixelFormat::ThreeChannel => {
                let mut data = Vec::with_capacity(self.data.len());
                for px in self.bgr_pixels() {
                    data.extend_from_slice(&f(px).to_bytes());
                }
                PixelBuffer {
                    format: self.format,
                    data,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_bit_depth() {
        assert_eq!(PixelFormat::from_bit_depth(1), PixelFormat::SingleChannel);
        assert_eq!(PixelFormat::from_bit_depth(8), PixelFormat::SingleChannel);
        assert_eq!(PixelFormat::from_bit_depth(16), PixelFormat::ThreeChannel);
        assert_eq!(PixelFormat::from_bit_depth(24), PixelFormat::ThreeChannel);
    }

    #[test]
    fn test_buffer_len_overflow() {
        assert_eq!(PixelFormat::ThreeChannel.buffer_len(4), Some(12));
        assert_eq!(PixelFormat::ThreeChannel.buffer_len(usize::MAX), None);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(PixelFormat::ThreeChannel, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_pixel_indexing() {
        let buf =
            PixelBuffer::from_raw(PixelFormat::ThreeChannel, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.pixel_count(), 2);
        assert_eq!(buf.pixel(1), Some(&[4u8, 5, 6][..]));
        assert_eq!(buf.pixel(2), None);

        let px: Vec<Bgr> = buf.bgr_pixels().collect();
        assert_eq!(px[0].blue, 1);
        assert_eq!(px[0].red, 3);
    }

    #[test]
    fn test_single_channel_has_no_bgr_pixels() {
        let buf = PixelBuffer::from_raw(PixelFormat::SingleChannel, 3, vec![7, 8, 9]).unwrap();
        assert_eq!(buf.pixel(2), Some(&[9u8][..]));
        assert_eq!(buf.bgr_pixels().count(), 0);
    }

    #[test]
    fn test_bgr_gray() {
        assert!(Bgr::gray(42).is_gray());
        assert!(!Bgr::from_bytes([1, 2, 3]).is_gray());
        assert_eq!(Bgr::from_bytes([1, 2, 3]).to_bytes(), [1, 2, 3]);
    }
}
