//! File conversion regression test
//!
//! Runs the full `convert` pipeline against files on disk:
//!   - boundary 1x1 image (tests 0-3)
//!   - missing source leaves the destination alone (tests 4-5)
//!   - decode failures never create the destination (tests 6-7)
//!   - unwritable destination (test 8)
//!   - forced three-channel layout on a palette image (tests 9-11)
//!   - interoperability with a third-party BMP encoder/decoder (tests 12-15)
//!
//! Run with:
//! ```
//! cargo test -p bmpgray-io --test convert_reg -- --nocapture
//! ```

use bmpgray_core::{Bgr, COLOR_TABLE_SIZE, HEADER_SIZE, PixelFormat, luminance};
use bmpgray_io::{ConvertOptions, ErrorKind, convert, convert_with, read_header_file};
use bmpgray_test::{BmpBuilder, RegParams, regout_path, write_regout};
use std::fs;
use std::path::Path;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn remove_if_exists(path: &str) {
    if Path::new(path).exists() {
        fs::remove_file(path).expect("remove stale output");
    }
}

// ============================================================================
// Tests 0-3: a 1x1 black pixel converts to a 57-byte file of luminance 0
// ============================================================================
#[test]
fn convert_reg_single_pixel() {
    init_logger();
    let mut rp = RegParams::new("convert_single_pixel");

    let input = write_regout(
        "convert_single_pixel.bmp",
        &BmpBuilder::rgb(1, 1).rgb_pixels(&[(0, 0, 0)]).build(),
    )
    .expect("write input");
    let output = regout_path("convert_single_pixel_copy.bmp").expect("output path");
    remove_if_exists(&output);

    let stats = convert(&input, &output).expect("convert");
    rp.compare_values(1.0, stats.width as f64, 0.0);
    rp.compare_values(1.0, stats.height as f64, 0.0);

    let out = fs::read(&output).expect("read output");
    rp.compare_values((HEADER_SIZE + 3) as f64, out.len() as f64, 0.0);
    rp.compare_strings(&[0, 0, 0], &out[HEADER_SIZE..]);

    assert_eq!(stats.bit_depth, 24);
    assert_eq!(stats.format, PixelFormat::ThreeChannel);
    assert_eq!(stats.bytes_written, out.len() as u64);
    assert!(rp.cleanup());
}

// ============================================================================
// Tests 4-5: a missing source is reported and the destination untouched
// ============================================================================
#[test]
fn convert_reg_missing_source() {
    init_logger();
    let mut rp = RegParams::new("convert_missing_source");

    let output = regout_path("convert_missing_source_out.bmp").expect("output path");
    remove_if_exists(&output);

    let err = convert("/nonexistent.bmp", &output).unwrap_err();
    rp.check(
        err.kind() == ErrorKind::SourceOpenFailed,
        "missing source kind",
    );
    rp.check(!Path::new(&output).exists(), "destination not created");

    // an existing destination keeps its contents
    fs::write(&output, b"keep me").expect("seed output");
    let err = convert("/nonexistent.bmp", &output).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceOpenFailed);
    assert_eq!(fs::read(&output).expect("read output"), b"keep me");

    assert!(rp.cleanup());
}

// ============================================================================
// Tests 6-7: a truncated source fails before the destination exists
// ============================================================================
#[test]
fn convert_reg_truncated_source() {
    init_logger();
    let mut rp = RegParams::new("convert_truncated_source");

    let input = write_regout(
        "convert_truncated.bmp",
        &BmpBuilder::palette(2, 2).build(),
    )
    .expect("write input");
    let output = regout_path("convert_truncated_copy.bmp").expect("output path");
    remove_if_exists(&output);

    let err = convert(&input, &output).unwrap_err();
    rp.check(
        err.kind() == ErrorKind::TruncatedPixelData,
        "truncated pixel kind",
    );
    rp.check(!Path::new(&output).exists(), "destination not created");

    assert!(rp.cleanup());
}

// ============================================================================
// Test 8: a destination in a missing directory cannot be opened
// ============================================================================
#[test]
fn convert_reg_bad_destination() {
    init_logger();
    let mut rp = RegParams::new("convert_bad_destination");

    let input = write_regout(
        "convert_bad_destination.bmp",
        &BmpBuilder::rgb(1, 1).pixels(&[1, 2, 3]).build(),
    )
    .expect("write input");
    let err = convert(&input, "/nonexistent/dir/out.bmp").unwrap_err();
    rp.check(
        err.kind() == ErrorKind::DestinationOpenFailed,
        "destination open kind",
    );

    assert!(rp.cleanup());
}

// ============================================================================
// Tests 9-11: forcing three channels on a palette image keeps the table
// and converts the pixels
// ============================================================================
#[test]
fn convert_reg_forced_three_channel() {
    init_logger();
    let mut rp = RegParams::new("convert_forced_three_channel");

    let bytes = BmpBuilder::palette(1, 1)
        .rgb_pixels(&[(10, 20, 30)])
        .build();
    let input = write_regout("convert_forced.bmp", &bytes).expect("write input");
    let output = regout_path("convert_forced_copy.bmp").expect("output path");

    let opts = ConvertOptions::new().with_format(PixelFormat::ThreeChannel);
    let stats = convert_with(&input, &output, &opts).expect("convert");
    let out = fs::read(&output).expect("read output");

    rp.compare_values(
        (HEADER_SIZE + COLOR_TABLE_SIZE + 3) as f64,
        out.len() as f64,
        0.0,
    );
    let prefix = HEADER_SIZE + COLOR_TABLE_SIZE;
    rp.compare_strings(&bytes[..prefix], &out[..prefix]);
    rp.compare_strings(&[18, 18, 18], &out[prefix..]);

    assert!(stats.has_color_table);
    assert_eq!(stats.format, PixelFormat::ThreeChannel);
    assert!(rp.cleanup());
}

// ============================================================================
// Tests 12-15: files written by the `image` crate convert, and the result
// decodes with it again
//
// Widths are multiples of four so rows carry no padding.
// ============================================================================
#[test]
fn convert_reg_image_crate_interop() {
    init_logger();
    let mut rp = RegParams::new("convert_image_interop");

    // 24 bpp
    let src = image::RgbImage::from_fn(4, 3, |x, y| {
        image::Rgb([(x * 60) as u8, (y * 80 + 15) as u8, ((x + y) * 37) as u8])
    });
    let input = regout_path("interop_rgb.bmp").expect("input path");
    let output = regout_path("interop_rgb_copy.bmp").expect("output path");
    src.save(&input).expect("save rgb bmp");

    let header = read_header_file(&input).expect("read header");
    rp.compare_values(24.0, header.bit_depth() as f64, 0.0);

    let stats = convert(&input, &output).expect("convert rgb");
    rp.compare_values(4.0, stats.width as f64, 0.0);

    let gray = image::open(&output).expect("decode output").to_rgb8();
    let all_match = src.enumerate_pixels().all(|(x, y, px)| {
        let expected = luminance(Bgr {
            red: px[0],
            green: px[1],
            blue: px[2],
        });
        gray.get_pixel(x, y).0 == [expected; 3]
    });
    rp.check(all_match, "every pixel equals its luminance");

    // 8 bpp: palette images pass through unchanged
    let src = image::GrayImage::from_fn(4, 2, |x, y| image::Luma([(x * 50 + y * 9) as u8]));
    let input = regout_path("interop_gray.bmp").expect("input path");
    let output = regout_path("interop_gray_copy.bmp").expect("output path");
    src.save(&input).expect("save gray bmp");

    convert(&input, &output).expect("convert gray");
    rp.compare_files(&input, &output);

    assert!(rp.cleanup());
}
