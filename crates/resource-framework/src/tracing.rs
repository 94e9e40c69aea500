//! # Observability
//!
//! The framework emits `tracing` events and never installs a subscriber itself.
//! Applications call [`setup_tracing`] once at startup:
//!
//! ```bash
//! # Registrations only (the default when RUST_LOG is unset)
//! cargo run
//!
//! # Encode/decode and unload events
//! RUST_LOG=debug cargo run
//!
//! # Every generic field write
//! RUST_LOG=resource_framework=trace cargo run
//! ```
//!
//! Events carry `resource_type` and `id` as structured fields, so module paths are hidden
//! (`with_target(false)`).

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
