//! Error type for the fallible collection helpers.

use thiserror::Error;

/// Errors returned by collection helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Two collections that must be combined index-by-index differ in length.
    #[error("collections must be of same length (left={left}, right={right})")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
