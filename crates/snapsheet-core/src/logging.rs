//! Logging setup.
//!
//! Library crates only emit `tracing` events. Binaries and tests call
//! [`init`] (or [`init_with_filter`]) once to install a subscriber.

use tracing_subscriber::EnvFilter;

/// Default filter directives when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,snapsheet_drawer=debug";

/// Install a fmt subscriber, honouring `RUST_LOG` when present.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install a fmt subscriber with explicit filter directives.
///
/// Calling this more than once is harmless; only the first subscriber wins.
pub fn init_with_filter(directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_test_writer()
        .try_init();
}
