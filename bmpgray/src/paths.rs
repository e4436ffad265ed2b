//! Command-line path handling
//!
//! Both paths must end in `.bmp`. When no output is given it is derived
//! from the input by replacing the extension with `_copy.bmp`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Required file extension, including the dot
pub const EXTENSION: &str = ".bmp";

/// Token inserted before the extension of a derived output path
pub const OUTPUT_SUFFIX: &str = "_copy";

/// Path validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path does not end in `.bmp`
    #[error("{} does not end with .bmp", .0.display())]
    BadExtension(PathBuf),

    /// No output was given and the input has no extension to replace
    #[error("\".\" not found in file name {}", .0.display())]
    NoExtension(PathBuf),
}

/// True if `path` ends with `.bmp` (case-sensitive).
pub fn has_bmp_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(EXTENSION)
}

/// Derive `<stem>_copy.bmp` next to `input`.
///
/// The stem is everything before the last `.` of the file name, so a
/// dot file such as `.bmp` has an empty stem. Returns `None` if the file
/// name has no `.` at all.
pub fn output_path_for(input: &Path) -> Option<PathBuf> {
    let file_name = input.file_name()?;
    let stem = match input.extension() {
        Some(_) => input.file_stem()?,
        None if file_name.to_string_lossy().starts_with('.') => OsStr::new(""),
        None => return None,
    };
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(EXTENSION);
    Some(input.with_file_name(name))
}

/// Validate the input and the optional output, deriving the output when
/// it is missing.
pub fn resolve_paths(input: &Path, output: Option<&Path>) -> Result<(PathBuf, PathBuf), PathError> {
    if !has_bmp_extension(input) {
        return Err(PathError::BadExtension(input.to_path_buf()));
    }
    let output = match output {
        Some(path) if !has_bmp_extension(path) => {
            return Err(PathError::BadExtension(path.to_path_buf()));
        }
        Some(path) => path.to_path_buf(),
        None => output_path_for(input).ok_or_else(|| PathError::NoExtension(input.to_path_buf()))?,
    };
    Ok((input.to_path_buf(), output))
}
