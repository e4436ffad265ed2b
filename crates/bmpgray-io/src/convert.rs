//! The bitmap-to-grayscale pipeline
//!
//! `convert` decodes the whole source first, then transforms and writes.
//! Every decode failure therefore happens before the destination is
//! created.

use crate::ConvertResult;
use crate::bmp::{DecodeOptions, decode_file, encode_file};
use bmpgray_core::{BitmapImage, PixelFormat};
use log::info;
use std::path::Path;

/// Options for [`convert_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// How the source is decoded
    pub decode: DecodeOptions,
}

impl ConvertOptions {
    /// Default options: the pixel layout follows the header bit depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the pixel layout used to read the source.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.decode = self.decode.with_format(format);
        self
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Width read from the source header
    pub width: u32,
    /// Height read from the source header
    pub height: u32,
    /// Bit depth read from the source header
    pub bit_depth: u32,
    /// Pixel layout the source was decoded with
    pub format: PixelFormat,
    /// Whether a color table was carried over
    pub has_color_table: bool,
    /// Size of the destination file
    pub bytes_written: u64,
}

impl ConvertStats {
    fn from_image(image: &BitmapImage, bytes_written: u64) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            bit_depth: image.bit_depth(),
            format: image.format(),
            has_color_table: image.color_table().is_some(),
            bytes_written,
        }
    }
}

impl std::fmt::Display for ConvertStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "height: {}", self.height)?;
        write!(f, "bitDepth: {}", self.bit_depth)
    }
}

/// Convert the bitmap at `input` to grayscale and write it to `output`.
///
/// The pixel layout follows the source bit depth. See [`convert_with`].
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> ConvertResult<ConvertStats> {
    convert_with(input, output, &ConvertOptions::default())
}

/// Convert the bitmap at `input` to grayscale with explicit options.
///
/// No naming conventions are enforced on either path.
///
/// # Errors
///
/// Any [`ConvertError`](crate::ConvertError). When decoding fails,
/// `output` is neither created nor modified.
pub fn convert_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> ConvertResult<ConvertStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let image = decode_file(input, &options.decode)?;
    let gray = image.into_grayscale();
    let bytes_written = encode_file(&gray, output)?;

    let stats = ConvertStats::from_image(&gray, bytes_written);
    info!(
        "converted {} -> {} ({}x{}, {} bpp, {})",
        input.display(),
        output.display(),
        stats.width,
        stats.height,
        stats.bit_depth,
        stats.format
    );
    Ok(stats)
}
