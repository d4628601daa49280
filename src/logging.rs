//! Structured logging setup — component I.
//!
//! The reference crate narrates progress with bare `println!`; this repository instead installs a
//! `tracing_subscriber::fmt` subscriber once in `main`, the way the wider example pool handles
//! per-run diagnostics, so iteration counts and bound progression are filterable (`RUST_LOG`)
//! rather than baked into stdout.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `verbose` raises the default filter from `info` to
/// `debug` when `RUST_LOG` is unset.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
