//! Output Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An output path error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for output path operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing usable was left of the filename after sanitization.
    #[display("invalid filename: {_0:?}")]
    InvalidFilename(#[error(not(source))] String),
    /// Not allowed to create the destination directory.
    #[display("no permission to create directory {}", _0.display())]
    PermissionDenied(#[error(not(source))] PathBuf),
    /// The destination directory could not be created for any other reason,
    /// including something other than a directory already being in the way.
    #[display("could not create directory {}", _0.display())]
    CreateDirectory(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
