//! Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::cards::Card;

/// Generate one of the four standard suit names.
pub fn suit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Clubs".to_string()),
        Just("Diamonds".to_string()),
        Just("Hearts".to_string()),
        Just("Spades".to_string()),
    ]
}

/// Generate a joker label.
pub fn joker_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Red".to_string()),
        Just("Black".to_string()),
        Just("Gold".to_string()),
    ]
}

/// Generate a standard (rank 1..=10) card.
pub fn standard_card() -> impl Strategy<Value = Card> {
    (suit(), 1u8..=10).prop_map(|(suit, rank)| Card::standard(suit, rank))
}

/// Generate a face (rank 11..=13) card.
pub fn face_card() -> impl Strategy<Value = Card> {
    (suit(), 11u8..=13).prop_map(|(suit, rank)| Card::face(suit, rank))
}

/// Generate a joker.
pub fn joker_card() -> impl Strategy<Value = Card> {
    joker_label().prop_map(Card::joker)
}

/// Generate any card variant.
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![standard_card(), face_card(), joker_card()]
}

/// Generate a non-joker card, so never value 14.
pub fn ranked_card() -> impl Strategy<Value = Card> {
    prop_oneof![standard_card(), face_card()]
}

/// Generate the source line a card would be loaded from.
pub fn card_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (suit(), 1u8..=13).prop_map(|(s, r)| format!("{s},{r}")),
        joker_label().prop_map(|l| format!("Joker,{l}")),
    ]
}

/// Generate a small well-formed deck source of 1..=16 lines.
pub fn deck_source() -> impl Strategy<Value = String> {
    prop::collection::vec(card_line(), 1..=16).prop_map(|lines| {
        let mut source = lines.join("\n");
        source.push('\n');
        source
    })
}

/// Generate a deck of up to `max_cards` arbitrary cards.
pub fn deck(max_cards: usize) -> impl Strategy<Value = crate::domain::deck::Deck> {
    prop::collection::vec(card(), 0..=max_cards).prop_map(|cards| cards.into_iter().collect())
}
