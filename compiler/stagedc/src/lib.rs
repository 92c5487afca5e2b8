//! Staged C Container Generator - CLI driver
//!
//! Reads a JSON generation manifest and writes the emitted header:
//!
//! ```text
//! manifest.json ──► Manifest ──► staged_codegen ──► header text ──► file / stdout
//! ```
//!
//! ```json
//! {
//!   "prefix": "core_",
//!   "arena": true,
//!   "requests": [
//!     { "kind": "slice", "ty": "int" },
//!     { "kind": "sparse_set", "ty": "Entity" },
//!     { "kind": "tagged_union", "name": "Shape",
//!       "fields": [ { "name": "circle", "ty": "float" } ] }
//!   ]
//! }
//! ```

use std::sync::Once;

pub mod commands;
mod error;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=staged_codegen=debug` or `RUST_LOG=stagedc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
