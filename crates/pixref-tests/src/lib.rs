//! End-to-end tests for the pixref crates.
//!
//! - `scenarios` - fixed inputs with hand-computed expectations
//! - `cross` - reference kernels checked against independent direct
//!   implementations through the validator, the way a driver would
//!
//! Set `RUST_LOG=pixref_ops=debug,pixref_lut=debug` to see per-kernel logging while the tests run.

#[cfg(test)]
mod cross;
#[cfg(test)]
mod scenarios;

/// Installs a test-writer `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
