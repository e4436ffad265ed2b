//! Bitmap header reading
//!
//! Consumes the fixed 54-byte header and, for bit depths <= 8, the
//! 1024-byte color table that follows it.

use crate::{ConvertError, ConvertResult};
use bmpgray_core::{BitmapHeader, COLOR_TABLE_SIZE, ColorTable, HEADER_SIZE};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Part of the file being read, used to pick the truncation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Header,
    ColorTable,
    PixelData,
}

impl Section {
    pub(crate) fn truncated(self, expected: usize, found: usize) -> ConvertError {
        match self {
            Section::Header => ConvertError::TruncatedHeader { expected, found },
            Section::ColorTable => ConvertError::TruncatedColorTable { expected, found },
            Section::PixelData => ConvertError::TruncatedPixelData { expected, found },
        }
    }
}

/// Read exactly `buf.len()` bytes of `section` into `buf`.
///
/// Unlike `read_exact`, a short stream is reported with the number of
/// bytes that were actually available.
pub(crate) fn fill_section<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    section: Section,
) -> ConvertResult<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(section.truncated(buf.len(), filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(ConvertError::ReadFailed(e)),
        }
    }
    Ok(())
}

/// Read and parse the 54-byte header.
///
/// The reader must be positioned at the start of the file.
///
/// # Errors
///
/// [`ConvertError::TruncatedHeader`] if the stream ends early.
pub fn read_header<R: Read>(reader: &mut R) -> ConvertResult<BitmapHeader> {
    let mut raw = [0u8; HEADER_SIZE];
    fill_section(reader, &mut raw, Section::Header)?;
    let header = BitmapHeader::parse(raw);
    debug!(
        "bitmap header: {}x{}, {} bpp, color table: {}",
        header.width(),
        header.height(),
        header.bit_depth(),
        header.has_color_table()
    );
    Ok(header)
}

/// Read the 1024-byte color table that follows the header.
///
/// # Errors
///
/// [`ConvertError::TruncatedColorTable`] if the stream ends early.
pub fn read_color_table<R: Read>(reader: &mut R) -> ConvertResult<ColorTable> {
    let mut table = [0u8; COLOR_TABLE_SIZE];
    fill_section(reader, &mut table, Section::ColorTable)?;
    Ok(ColorTable(table))
}

/// Read only the header of a bitmap file, without touching pixel data.
///
/// # Errors
///
/// [`ConvertError::SourceOpenFailed`] if the file cannot be opened, or
/// [`ConvertError::TruncatedHeader`] if it is shorter than a header.
pub fn read_header_file<P: AsRef<Path>>(path: P) -> ConvertResult<BitmapHeader> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConvertError::SourceOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    read_header(&mut BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::io::Cursor;

    fn header_bytes(width: u32, height: u32, bit_depth: u32) -> Vec<u8> {
        let mut raw = vec![0u8; HEADER_SIZE];
        raw[0] = b'B';
        raw[1] = b'M';
        raw[18..22].copy_from_slice(&width.to_le_bytes());
        raw[22..26].copy_from_slice(&height.to_le_bytes());
        raw[28..32].copy_from_slice(&bit_depth.to_le_bytes());
        raw
    }

    /// Reader that hands out one byte per call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let data = self.0;
            match data.split_first() {
                Some((&b, rest)) if !buf.is_empty() => {
                    buf[0] = b;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_read_header() {
        let bytes = header_bytes(0x0102_0304, 7, 24);
        let header = read_header(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(header.width(), 0x0102_0304);
        assert_eq!(header.height(), 7);
        assert_eq!(header.bit_depth(), 24);
        assert_eq!(&header.as_bytes()[..], &bytes[..]);
    }

    #[test]
    fn test_read_header_consumes_exactly_54_bytes() {
        let mut bytes = header_bytes(1, 1, 24);
        bytes.extend_from_slice(&[9, 8, 7]);
        let mut cursor = Cursor::new(&bytes);
        read_header(&mut cursor).unwrap();
        assert_eq!(cursor.position(), HEADER_SIZE as u64);
    }

    #[test]
    fn test_read_header_short_reads() {
        let bytes = header_bytes(5, 6, 8);
        let header = read_header(&mut Trickle(&bytes)).unwrap();
        assert_eq!((header.width(), header.height()), (5, 6));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = header_bytes(1, 1, 24);
        let err = read_header(&mut Cursor::new(&bytes[..40])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedHeader);
        assert!(matches!(
            err,
            ConvertError::TruncatedHeader {
                expected: 54,
                found: 40
            }
        ));
    }

    #[test]
    fn test_truncated_color_table() {
        let err = read_color_table(&mut Cursor::new(vec![0u8; 1000])).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::TruncatedColorTable {
                expected: 1024,
                found: 1000
            }
        ));
    }

    #[test]
    fn test_read_header_file_missing() {
        let err = read_header_file("/nonexistent/bmpgray/header.bmp").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceOpenFailed);
    }
}
