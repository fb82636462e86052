#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::cards::{Card, JOKER_VALUE};
pub use domain::dealing::deal_two;
pub use domain::deck::Deck;
pub use domain::deck_parsing::{parse_deck, read_deck_from_path};
pub use domain::rounds::{play_round, Player, RoundOutcome, MAX_ROUNDS};
pub use errors::domain::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
