// Tracing setup for scenario runs
//
// Page objects log every step at `info` and every primitive at `debug`.
// Filter with RUST_LOG, e.g. `RUST_LOG=shop_e2e=debug cargo test`.

use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "shop_e2e=info";

/// Installs a `fmt` subscriber writing through the test harness' capture.
///
/// Safe to call from every test: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
