//! Bitmap pixel codec
//!
//! Decodes the minimal bitmap subset into a [`BitmapImage`] and writes it
//! back. The layout on disk is
//!
//! ```text
//! header (54) | color table (1024, bit depth <= 8 only) | pixels
//! ```
//!
//! Pixels are a flat run of `width * height` samples: one byte each for
//! single-channel images, three (blue, green, red) for three-channel ones.
//! Rows are assumed unpadded.
//!
//! Encoding writes the header and color table back byte-for-byte; header
//! fields are never recomputed.

use crate::header::{Section, read_color_table, read_header};
use crate::{ConvertError, ConvertResult};
use bmpgray_core::{BitmapHeader, BitmapImage, PixelBuffer, PixelFormat};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Decoder options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Force a pixel layout instead of deriving it from the bit depth.
    pub format: Option<PixelFormat>,
}

impl DecodeOptions {
    /// Derive the layout from the header (the default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Force `format` regardless of the header bit depth.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Layout to use for an image with this header.
    pub fn format_for(&self, header: &BitmapHeader) -> PixelFormat {
        self.format.unwrap_or_else(|| header.pixel_format())
    }
}

/// Read `width * height` pixels of `format` following the header.
///
/// The buffer is a single allocation sized up front; it is dropped if
/// the stream runs out, so nothing partial escapes.
///
/// # Errors
///
/// - [`ConvertError::AllocationFailed`] if the buffer size overflows or
///   cannot be reserved.
/// - [`ConvertError::TruncatedPixelData`] if the stream ends early.
pub fn read_pixels<R: Read>(
    reader: &mut R,
    header: &BitmapHeader,
    format: PixelFormat,
) -> ConvertResult<PixelBuffer> {
    let alloc_failed = || ConvertError::AllocationFailed {
        width: header.width(),
        height: header.height(),
        channels: format.channels(),
    };
    let pixel_count = header.pixel_count().ok_or_else(alloc_failed)?;
    let len = format.buffer_len(pixel_count).ok_or_else(alloc_failed)?;

    // Reserve only; pages are touched as bytes arrive.
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| alloc_failed())?;
    reader
        .by_ref()
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(ConvertError::ReadFailed)?;
    if data.len() < len {
        return Err(Section::PixelData.truncated(len, data.len()));
    }

    debug!("read {} pixels ({}, {} bytes)", pixel_count, format, len);
    Ok(PixelBuffer::from_raw(format, pixel_count, data)?)
}

/// Decode a bitmap from a byte stream positioned at its first byte.
///
/// # Errors
///
/// Any of the truncation kinds, [`ConvertError::AllocationFailed`], or
/// [`ConvertError::ReadFailed`] for other I/O errors.
pub fn decode<R: Read>(mut reader: R, options: &DecodeOptions) -> ConvertResult<BitmapImage> {
    let header = read_header(&mut reader)?;
    let color_table = if header.has_color_table() {
        Some(read_color_table(&mut reader)?)
    } else {
        None
    };
    let format = options.format_for(&header);
    let pixels = read_pixels(&mut reader, &header, format)?;
    Ok(BitmapImage::new(header, color_table, pixels)?)
}

/// Decode a bitmap file.
///
/// # Errors
///
/// [`ConvertError::SourceOpenFailed`] if the file cannot be opened, plus
/// everything [`decode`] reports.
pub fn decode_file<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> ConvertResult<BitmapImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConvertError::SourceOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("decoding {}", path.display());
    decode(BufReader::new(file), options)
}

/// Write `image` as held: header, color table if present, then pixels.
///
/// Apply [`BitmapImage::into_grayscale`] first to write the gray version.
pub fn encode<W: Write>(image: &BitmapImage, mut writer: W) -> ConvertResult<()> {
    writer
        .write_all(image.header().as_bytes())
        .map_err(ConvertError::WriteFailed)?;
    if let Some(table) = image.color_table() {
        writer
            .write_all(table.as_bytes())
            .map_err(ConvertError::WriteFailed)?;
    }
    writer
        .write_all(image.pixels().as_bytes())
        .map_err(ConvertError::WriteFailed)?;
    writer.flush().map_err(ConvertError::WriteFailed)?;
    Ok(())
}

/// Write `image` to a new file at `path`, returning the bytes written.
///
/// The file is flushed and synced before this returns. If writing fails
/// after the file was created, the partial file is removed.
///
/// # Errors
///
/// [`ConvertError::DestinationOpenFailed`] if the file cannot be created,
/// [`ConvertError::WriteFailed`] if writing it fails.
pub fn encode_file<P: AsRef<Path>>(image: &BitmapImage, path: P) -> ConvertResult<u64> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ConvertError::DestinationOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(err) = write_and_sync(image, file) {
        warn!("removing partial output {}: {}", path.display(), err);
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove {}: {}", path.display(), e);
        }
        return Err(err);
    }

    let written = image.encoded_len() as u64;
    debug!("wrote {} bytes to {}", written, path.display());
    Ok(written)
}

fn write_and_sync(image: &BitmapImage, file: File) -> ConvertResult<()> {
    let mut writer = BufWriter::new(file);
    encode(image, &mut writer)?;
    let file = writer
        .into_inner()
        .map_err(|e| ConvertError::WriteFailed(e.into_error()))?;
    file.sync_all().map_err(ConvertError::WriteFailed)
}
