//! Shared test logging initialization.
//!
//! One guarded entry point used by every crate's unit and integration
//! tests, so a test binary never races itself setting a subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
///
/// Safe to call from any number of tests. The filter comes from `TEST_LOG`
/// if set, then `RUST_LOG`, and defaults to `warn` so passing runs stay
/// quiet. Output goes through the test writer so cargo captures it per
/// test, with timestamps suppressed for stable output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        // TEST_LOG wins over RUST_LOG; default stays quiet.
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
