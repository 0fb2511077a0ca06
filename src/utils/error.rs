//! Error types for icon conversion.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for input tasks and settings.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// The file extension is not one of the accepted source formats
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the converter.
///
/// Every per-file failure ends up as one of these variants and is reported
/// on the file's [`ConversionResult`](crate::core::ConversionResult).
#[derive(Error, Debug, Serialize)]
pub enum IconError {
    /// Task or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Source image could not be read or decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Image processing failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// Writing an icon or PNG failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// The icns packaging step failed
    #[error("Packaging error: {0}")]
    Packaging(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for conversion operations.
pub type IconResult<T> = Result<T, IconError>;

// Helper methods for error creation
impl IconError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn packaging<T: Into<String>>(msg: T) -> Self {
        Self::Packaging(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to IconError
impl From<io::Error> for IconError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to IconError
impl From<PathError> for IconError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
