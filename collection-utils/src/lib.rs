//! Generic higher-order helpers for hash maps and slices.
//!
//! The crate replaces the transform/filter/lookup loops that otherwise get
//! written inline wherever a collection needs reshaping:
//!
//! - **[`maps`]**: map, filter and membership tests over `HashMap`.
//!   Iteration order is whatever the map yields, so no ordering is promised.
//! - **[`slices`]**: map, filter, membership, pairwise merge and group-by over
//!   slices. Input order is always preserved.
//!
//! Every helper borrows its input and returns a freshly allocated container.
//! The only fallible operation is [`slices::merge`], which rejects inputs of
//! different lengths with [`Error::LengthMismatch`].
//!
//! Helpers never mutate their input, so one slice or map may be shared by
//! several threads calling helpers at once.
//!
//! The `logging` feature adds the `logging` module for installing a
//! development tracing subscriber; `test-support` enables it.

pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod maps;
pub mod slices;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, Result};
