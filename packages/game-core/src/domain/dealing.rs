//! Splitting one loaded deck between the two players.

use crate::domain::deck::Deck;

/// Deal a deck round-robin into two player decks.
///
/// The top card goes to player A, the next to player B, and so on until
/// the source is exhausted. Relative order survives within each resulting
/// deck, so the deal is fully determined by the source order. With an odd
/// count player A ends up one card ahead.
pub fn deal_two(deck: Deck) -> (Deck, Deck) {
    let mut deck_a = Deck::new();
    let mut deck_b = Deck::new();

    for (i, card) in deck.into_iter().enumerate() {
        if i % 2 == 0 {
            deck_a.add_to_bottom(card);
        } else {
            deck_b.add_to_bottom(card);
        }
    }

    (deck_a, deck_b)
}
