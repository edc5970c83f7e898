//! Tracing setup.
//!
//! Library code only emits events; binaries decide where they go. The browser
//! build installs its own console writer (see the landing crate).

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "agency=info";

/// `RUST_LOG`-style filter, falling back to `fallback` when the variable is
/// missing or unparsable.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a stderr `fmt` subscriber for native binaries and tools.
/// Returns `false` when a global subscriber was already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_native() -> bool {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .try_init()
        .is_ok()
}
