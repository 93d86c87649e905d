//! Diagnostic tracing for the `spiral` binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so that embedders keep control of their own output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output goes to stderr so
/// that stdout carries only the matrices.
///
/// # Example
/// ```bash
/// RUST_LOG=spiral_matrix=debug cargo run -- 5 6 12
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
