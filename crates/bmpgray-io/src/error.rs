//! I/O error types
//!
//! Every way a conversion can fail maps to one `ConvertError` variant.
//! All of them are terminal for the attempt; nothing is retried.
//! [`ConvertError::kind`] gives a fieldless discriminant for callers that
//! only need to branch on the failure class.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for bitmap decoding, encoding and conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path is missing or unreadable
    #[error("cannot open source '{}': {source}", .path.display())]
    SourceOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than 54 header bytes were available
    #[error("truncated header: expected {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    /// Fewer than 1024 color-table bytes were available
    #[error("truncated color table: expected {expected} bytes, found {found}")]
    TruncatedColorTable { expected: usize, found: usize },

    /// The stream ended before every pixel was read
    #[error("truncated pixel data: expected {expected} bytes, found {found}")]
    TruncatedPixelData { expected: usize, found: usize },

    /// The pixel buffer could not be sized
    #[error("cannot allocate pixel buffer for {width}x{height} ({channels} channels)")]
    AllocationFailed {
        width: u32,
        height: u32,
        channels: usize,
    },

    /// The output path could not be created
    #[error("cannot open destination '{}': {source}", .path.display())]
    DestinationOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error other than end-of-stream while decoding
    #[error("read error: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// An I/O error while writing an opened destination
    #[error("write error: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// A decoded image violated a core invariant
    #[error("core error: {0}")]
    Core(#[from] bmpgray_core::Error),
}

/// Failure class of a [`ConvertError`], without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceOpenFailed,
    TruncatedHeader,
    TruncatedColorTable,
    TruncatedPixelData,
    AllocationFailed,
    DestinationOpenFailed,
    ReadFailed,
    WriteFailed,
    Core,
}

impl ConvertError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceOpenFailed { .. } => ErrorKind::SourceOpenFailed,
            Self::TruncatedHeader { .. } => ErrorKind::TruncatedHeader,
            Self::TruncatedColorTable { .. } => ErrorKind::TruncatedColorTable,
            Self::TruncatedPixelData { .. } => ErrorKind::TruncatedPixelData,
            Self::AllocationFailed { .. } => ErrorKind::AllocationFailed,
            Self::DestinationOpenFailed { .. } => ErrorKind::DestinationOpenFailed,
            Self::ReadFailed(_) => ErrorKind::ReadFailed,
            Self::WriteFailed(_) => ErrorKind::WriteFailed,
            Self::Core(_) => ErrorKind::Core,
        }
    }

    /// True for the truncation kinds (header, color table or pixels).
    pub fn is_truncation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::TruncatedHeader
                | ErrorKind::TruncatedColorTable
                | ErrorKind::TruncatedPixelData
        )
    }
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = Result<T, ConvertError>;
