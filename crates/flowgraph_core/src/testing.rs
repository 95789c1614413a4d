// SPDX-License-Identifier: MIT OR Apache-2.0
//! Test helpers.

/// Route `tracing` output to the test harness. Honors `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
