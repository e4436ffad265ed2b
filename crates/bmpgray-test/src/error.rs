//! Error types for the test helpers

use thiserror::Error;

/// Errors that can occur while preparing or checking regression data
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a scratch file
    #[error("failed to write file '{path}': {message}")]
    FileWrite { path: String, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
