//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - **Level** via the `RUST_LOG` environment variable; only errors are logged when unset.
//! - **Compact format** without module paths (`with_target(false)`); the actor tags its
//!   own lines with `entity_type`.
//! - **stderr only**, so log lines never land in the middle of a console prompt on
//!   stdout.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Store changes (Added, Updated, Deleted, Shutdown)
//! RUST_LOG=info cargo run 2>inventory.log
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run 2>inventory.log
//! ```
//!
//! ## What Gets Traced
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Added entity_type="Product" id=1 size=1
//! WARN Update failed entity_type="Product" id=1 error=ID #2 already exists
//! INFO Deleted entity_type="Product" id=1 outcome=Removed size=0
//! INFO Shutdown entity_type="Product" size=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
