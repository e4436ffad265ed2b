//! bmpgray-test - Regression test helpers for bmpgray
//!
//! - [`RegParams`] collects checks and reports every failure at the end
//!   instead of stopping at the first one
//! - [`BmpBuilder`] assembles minimal bitmap files byte by byte
//! - [`regout_path`] hands out scratch paths under `tests/regout`
//!
//! # Usage
//!
//! ```ignore
//! use bmpgray_test::{BmpBuilder, RegParams};
//!
//! let mut rp = RegParams::new("bmpio");
//! let bytes = BmpBuilder::rgb(1, 1).pixels(&[0, 0, 0]).build();
//! rp.compare_values(57.0, bytes.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use bmpgray_core::{COLOR_TABLE_SIZE, HEADER_SIZE};
use std::fs;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bmpgray-test is at crates/bmpgray-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Path of a scratch file in the regout directory, creating the directory.
pub fn regout_path(name: &str) -> TestResult<String> {
    let dir = regout_dir();
    fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(format!("{}/{}", dir, name))
}

/// Write `data` to a scratch file and return its path.
pub fn write_regout(name: &str, data: &[u8]) -> TestResult<String> {
    let path = regout_path(name)?;
    fs::write(&path, data).map_err(|e| TestError::FileWrite {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Builder for minimal bitmap files: 54-byte header, optional color
/// table, then unpadded pixel bytes.
///
/// The header carries a plausible `BM` signature, data offset and
/// info-header size; only width, height and bit depth matter to the
/// decoder.
#[derive(Debug, Clone)]
pub struct BmpBuilder {
    width: u32,
    height: u32,
    bit_depth: u32,
    color_table: Option<Vec<u8>>,
    pixels: Vec<u8>,
}

impl BmpBuilder {
    /// An image with the given dimensions and bit depth.
    ///
    /// Bit depths <= 8 get a gray ramp color table.
    pub fn new(width: u32, height: u32, bit_depth: u32) -> Self {
        let color_table = (bit_depth <= 8).then(gray_ramp_table);
        Self {
            width,
            height,
            bit_depth,
            color_table,
            pixels: Vec::new(),
        }
    }

    /// A 24 bpp image.
    pub fn rgb(width: u32, height: u32) -> Self {
        Self::new(width, height, 24)
    }

    /// An 8 bpp palette image.
    pub fn palette(width: u32, height: u32) -> Self {
        Self::new(width, height, 8)
    }

    /// Replace the color table bytes. Any length is accepted, so
    /// truncated tables can be built.
    pub fn color_table(mut self, table: &[u8]) -> Self {
        self.color_table = Some(table.to_vec());
        self
    }

    /// Raw pixel bytes, in file order.
    pub fn pixels(mut self, pixels: &[u8]) -> Self {
        self.pixels = pixels.to_vec();
        self
    }

    /// Pixels given as (red, green, blue) triples, stored blue first.
    pub fn rgb_pixels(mut self, pixels: &[(u8, u8, u8)]) -> Self {
        self.pixels = pixels.iter().flat_map(|&(r, g, b)| [b, g, r]).collect();
        self
    }

    /// The 54 header bytes alone.
    pub fn header_bytes(&self) -> Vec<u8> {
        let table_len = self.color_table.as_ref().map_or(0, Vec::len);
        let data_offset = (HEADER_SIZE + table_len) as u32;
        let file_size = data_offset + self.pixels.len() as u32;

        let mut h = vec![0u8; HEADER_SIZE];
        h[0..2].copy_from_slice(b"BM");
        h[2..6].copy_from_slice(&file_size.to_le_bytes());
        h[10..14].copy_from_slice(&data_offset.to_le_bytes());
        h[14..18].copy_from_slice(&40u32.to_le_bytes());
        h[18..22].copy_from_slice(&self.width.to_le_bytes());
        h[22..26].copy_from_slice(&self.height.to_le_bytes());
        h[26..28].copy_from_slice(&1u16.to_le_bytes());
        h[28..32].copy_from_slice(&self.bit_depth.to_le_bytes());
        h[34..38].copy_from_slice(&(self.pixels.len() as u32).to_le_bytes());
        h
    }

    /// The complete file.
    pub fn build(&self) -> Vec<u8> {
        let mut bytes = self.header_bytes();
        if let Some(table) = &self.color_table {
            bytes.extend_from_slice(table);
        }
        bytes.extend_from_slice(&self.pixels);
        bytes
    }
}

/// 256 gray BGRA palette entries.
fn gray_ramp_table() -> Vec<u8> {
    let mut table = Vec::with_capacity(COLOR_TABLE_SIZE);
    for i in 0..=255u8 {
        table.extend_from_slice(&[i, i, i, 0]);
    }
    table
}
