//! Application Error Types
//!
//! Every library crate reports through its own `exn` error tree; this is the
//! top of that tree, one variant per way an invocation can fail.

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for the application pipeline.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("{_0}")]
    Config(#[error(not(source))] String),
    #[display("missing required dependencies")]
    MissingDependency,
    #[display("{_0}")]
    InvalidInput(#[error(not(source))] String),
    #[display("{_0}")]
    InvalidFilename(#[error(not(source))] String),
    #[display("{_0}")]
    DirectoryCreation(#[error(not(source))] String),
    #[display("{_0}")]
    Render(#[error(not(source))] String),
}

/// Raises `err` into the application tree, carrying its message along so the
/// final report doesn't need to walk the tree.
#[track_caller]
pub(crate) fn wrap<E>(err: exn::Exn<E>, kind: impl FnOnce(String) -> ErrorKind) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let message = (*err).to_string();
    err.raise(kind(message))
}
