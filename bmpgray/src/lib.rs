//! bmpgray - Convert minimal bitmap files to grayscale
//!
//! Reads an uncompressed bitmap (54-byte header, optional 1024-byte color
//! table, unpadded pixels), replaces every color pixel with its luminance
//! and writes the result with the header and color table unchanged.
//!
//! # Example
//!
//! ```no_run
//! let stats = bmpgray::convert("photo.bmp", "photo_copy.bmp")?;
//! println!("{}x{} at {} bpp", stats.width, stats.height, stats.bit_depth);
//! # Ok::<(), bmpgray::io::ConvertError>(())
//! ```

// Re-export core types
pub use bmpgray_core::*;

// Re-export the codec as a module to keep its error type namespaced
pub use bmpgray_io as io;
pub use bmpgray_io::{ConvertOptions, ConvertStats, convert, convert_with};

pub mod paths;
