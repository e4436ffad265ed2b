//! bmpgray I/O - Bitmap reading, writing and grayscale conversion
//!
//! - [`read_header`] / [`read_header_file`] - header and metadata only
//! - [`decode`] / [`decode_file`] - full decode into a [`BitmapImage`]
//! - [`encode`] / [`encode_file`] - byte-exact write-back
//! - [`convert`] / [`convert_with`] - decode, grayscale, encode
//!
//! All operations return [`ConvertResult`].
//!
//! [`BitmapImage`]: bmpgray_core::BitmapImage

pub mod bmp;
pub mod convert;
mod error;
pub mod header;

pub use bmp::{DecodeOptions, decode, decode_file, encode, encode_file, read_pixels};
pub use convert::{ConvertOptions, ConvertStats, convert, convert_with};
pub use error::{ConvertError, ConvertResult, ErrorKind};
pub use header::{read_color_table, read_header, read_header_file};

pub use bmpgray_core::PixelFormat;
