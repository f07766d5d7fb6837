//! Shared helpers for fieldsort integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
///
/// Honors `RUST_LOG`; defaults to `fieldsort_core=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("fieldsort_core=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}
