//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod dealing;
pub mod deck;
pub mod deck_parsing;
pub mod rounds;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_parsing;

// Re-exports for ergonomics
pub use cards::{Card, JOKER_VALUE};
pub use dealing::deal_two;
pub use deck::Deck;
pub use deck_parsing::{parse_deck, read_deck_from_path};
pub use rounds::{play_round, Player, RoundOutcome, MAX_ROUNDS};
