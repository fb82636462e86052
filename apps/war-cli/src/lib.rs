#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod game;
pub mod output;

// Re-exports for public API
pub use game::{GameSummary, WarGame};
pub use output::RoundLog;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
