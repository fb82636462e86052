//! Single-round resolution: both players draw, higher value captures both.

use std::cmp::Ordering;
use std::fmt;

use crate::domain::deck::Deck;
use crate::errors::domain::DomainError;

/// Default cap on rounds per game.
///
/// Tied rounds return both cards to their owners, so a game is not
/// guaranteed to converge; the cap turns a cycling game into a verdict by
/// deck size.
pub const MAX_ROUNDS: u32 = 10_000;

/// The two fixed seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    A,
    B,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => f.write_str("Player A"),
            Player::B => f.write_str("Player B"),
        }
    }
}

/// What happened in one round, for narration and logging.
///
/// The plays are captured as renderings because the cards themselves have
/// already moved on to their new deck by the time the round returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Round winner, `None` for a tied round.
    pub winner: Option<Player>,
    /// Rendering of the card player A drew.
    pub card_a: String,
    /// Rendering of the card player B drew.
    pub card_b: String,
}

/// Play one round of War.
///
/// Both players draw their top card. The higher value captures both cards
/// at the bottom of the winner's deck, the winner's own card first. On a
/// tie each card returns to the bottom of its owner's deck. The total card
/// count across both decks never changes.
///
/// Fails with [`DomainError::EmptyDeck`] before anything moves if either
/// deck is empty; callers check sizes first and treat an empty deck as end
/// of game.
pub fn play_round(deck_a: &mut Deck, deck_b: &mut Deck) -> Result<RoundOutcome, DomainError> {
    if deck_a.is_empty() || deck_b.is_empty() {
        return Err(DomainError::EmptyDeck);
    }

    let card_a = deck_a.draw_from_top()?;
    let card_b = deck_b.draw_from_top()?;

    let winner = match card_a.cmp(&card_b) {
        Ordering::Greater => Some(Player::A),
        Ordering::Less => Some(Player::B),
        Ordering::Equal => None,
    };
    let outcome = RoundOutcome {
        winner,
        card_a: card_a.to_string(),
        card_b: card_b.to_string(),
    };

    match winner {
        Some(Player::A) => {
            deck_a.add_to_bottom(card_a);
            deck_a.add_to_bottom(card_b);
        }
        Some(Player::B) => {
            deck_b.add_to_bottom(card_b);
            deck_b.add_to_bottom(card_a);
        }
        None => {
            deck_a.add_to_bottom(card_a);
            deck_b.add_to_bottom(card_b);
        }
    }

    Ok(outcome)
}
