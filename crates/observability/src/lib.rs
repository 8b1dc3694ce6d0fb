//! Diagnostics setup for binaries and tests that use the value object crates.
//!
//! The library crates only emit `tracing` events (rejected natives, unknown
//! country codes); nothing is recorded until a subscriber is installed here.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
