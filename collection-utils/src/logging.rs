//! Development-time tracing for callers and tests of this crate.
//!
//! Library code only emits `debug`/`trace` events (for example when
//! [`crate::slices::merge`] rejects its input). Nothing is printed unless a
//! subscriber is installed, either by the embedding application or by
//! [`init`].
//!
//! Only compiled with the `logging` feature, so library users do not pull in
//! `tracing-subscriber` unless they ask for it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Returns `false` if a global subscriber was already installed, which is the
/// common case when several tests in one binary call this.
///
/// # Example
/// ```bash
/// RUST_LOG=collection_utils=trace cargo test
/// ```
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
