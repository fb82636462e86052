//! Core card types: the closed set of variants and their comparison value.

use std::fmt;

/// Comparison value of every joker, strictly above any standard rank.
pub const JOKER_VALUE: u8 = 14;

/// One playing card.
///
/// The variant set is closed: a card is standard (rank 1..=10), a face
/// card (rank 11..=13), or a joker. Jokers carry a free-form label instead
/// of a suit and always compare above the other two variants.
#[derive(Debug, Clone)]
pub enum Card {
    Standard { suit: String, rank: u8 },
    Face { suit: String, rank: u8 },
    Joker { label: String },
}

impl Card {
    /// Build a standard card. Rank must be 1..=10.
    pub fn standard(suit: impl Into<String>, rank: u8) -> Self {
        debug_assert!(
            (1..=10).contains(&rank),
            "standard card rank must be 1..=10, got {rank}"
        );
        Card::Standard {
            suit: suit.into(),
            rank,
        }
    }

    /// Build a face card. Rank must be 11..=13.
    pub fn face(suit: impl Into<String>, rank: u8) -> Self {
        debug_assert!(
            (11..=13).contains(&rank),
            "face card rank must be 11..=13, got {rank}"
        );
        Card::Face {
            suit: suit.into(),
            rank,
        }
    }

    /// Build a joker with an arbitrary label.
    pub fn joker(label: impl Into<String>) -> Self {
        Card::Joker {
            label: label.into(),
        }
    }

    /// The numeric value this card compares by.
    ///
    /// Standard and face cards report their rank; jokers report
    /// [`JOKER_VALUE`]. Suit and label play no part in comparison.
    pub fn value(&self) -> u8 {
        match self {
            Card::Standard { rank, .. } | Card::Face { rank, .. } => *rank,
            Card::Joker { .. } => JOKER_VALUE,
        }
    }
}

// Note: all four comparison impls project onto value() alone. Two cards of
// equal rank in different suits are equal, which is exactly the tie the
// round rules act on.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Card {}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { suit, rank } => write!(f, "{suit}:{rank}"),
            Card::Face { suit, rank } => write!(f, "{suit}:{}", face_name(*rank)),
            Card::Joker { label } => write!(f, "Joker:{label}"),
        }
    }
}

fn face_name(rank: u8) -> &'static str {
    match rank {
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => unreachable!("face card rank must be 11..=13"),
    }
}
