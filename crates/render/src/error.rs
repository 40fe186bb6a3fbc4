//! Render Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A render error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("wkhtmltopdf not detected on your system")]
    RendererNotFound,
    /// The input looked like a URL but couldn't be parsed as one.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
    /// The local input file doesn't exist, or isn't a regular file.
    #[display("input file not found: {}", _0.display())]
    InvalidSource(#[error(not(source))] PathBuf),
    /// The renderer executable exists but could not be started.
    #[display("could not start renderer: {}", _0.display())]
    Spawn(#[error(not(source))] PathBuf),
    /// The renderer exited with a non-zero exit code.
    #[display("wkhtmltopdf exited with code: {_0}")]
    RendererFailed(#[error(not(source))] i32),
    /// The renderer didn't exit by itself (killed by signal, or crashed).
    #[display("wkhtmltopdf was terminated before finishing")]
    RendererKilled,
    /// The renderer reported success but never produced the output file.
    #[display("no PDF was written to {}", _0.display())]
    MissingOutput(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RendererKilled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::RendererNotFound.to_string(), "wkhtmltopdf not detected on your system");
        assert_eq!(ErrorKind::RendererFailed(1).to_string(), "wkhtmltopdf exited with code: 1");
        assert_eq!(
            ErrorKind::InvalidSource(PathBuf::from("missing.html")).to_string(),
            "input file not found: missing.html"
        );
    }

    #[test]
    fn error_kind_retryable() {
        assert!(ErrorKind::RendererKilled.is_retryable());
        assert!(!ErrorKind::RendererFailed(1).is_retryable());
        assert!(!ErrorKind::RendererNotFound.is_retryable());
    }
}
