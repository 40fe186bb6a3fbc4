//! Probe Error Types
//!
//! Probing itself never fails (failures are reported as a
//! [`Reachability::Unreachable`](crate::Reachability::Unreachable) warning);
//! these errors only cover setting the prober up.

use derive_more::{Display, Error};

/// A probe error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("failed to build HTTP client")]
    Client,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
