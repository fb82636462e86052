//! Owned, ordered deck container: draw from the top, insert at the bottom.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;

use crate::domain::cards::Card;
use crate::errors::domain::DomainError;

/// An ordered sequence of exclusively owned cards.
///
/// The front is the top of the deck (drawn first), the back is the bottom
/// (insertion target). Gameplay only ever moves cards between decks, so
/// adding a card means giving it up and drawing one means receiving it.
#[derive(Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one card at the bottom of the deck. Never fails.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    ///
    /// Fails with [`DomainError::EmptyDeck`] when the deck holds no cards;
    /// the deck is left untouched in that case.
    pub fn draw_from_top(&mut self) -> Result<Card, DomainError> {
        self.cards.pop_front().ok_or(DomainError::EmptyDeck)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visit the cards top to bottom without moving them.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Renders the cards top to bottom, space-separated. An empty deck renders
/// as the empty string.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
