//! bmpgray Core - Data structures for minimal bitmap images
//!
//! This crate holds the in-memory side of the bitmap-to-grayscale
//! pipeline:
//!
//! - [`BitmapHeader`] - the raw 54-byte header and the fields read from it
//! - [`BitmapImage`] - header, optional [`ColorTable`] and [`PixelBuffer`]
//! - [`PixelFormat`] - single-channel or three-channel (blue-green-red) layout
//! - [`gray::luminance`] - the luminance-weighted grayscale mix
//!
//! Reading and writing files lives in `bmpgray-io`.

pub mod error;
pub mod gray;
pub mod header;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use gray::luminance;
pub use header::{BitmapHeader, COLOR_TABLE_SIZE, HEADER_SIZE, read_le_u32};
pub use image::{BitmapImage, ColorTable};
pub use pixel::{Bgr, PixelBuffer, PixelFormat};
