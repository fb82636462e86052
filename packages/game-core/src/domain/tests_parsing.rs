use std::io;

use crate::domain::cards::Card;
use crate::domain::deck_parsing::parse_deck;
use crate::errors::domain::DomainError;

fn parse_str(source: &str) -> Result<crate::domain::deck::Deck, DomainError> {
    parse_deck(source.as_bytes())
}

#[test]
fn parses_a_mixed_deck_in_order() {
    let mut deck = parse_str("Hearts,2\nJoker,Red\nClubs,12\n").unwrap();
    assert_eq!(deck.size(), 3);
    assert_eq!(deck.to_string(), "Hearts:2 Joker:Red Clubs:Queen");

    // Drawing takes the first source line and leaves the rest in order.
    let top = deck.draw_from_top().unwrap();
    assert_eq!(top.to_string(), "Hearts:2");
    assert_eq!(deck.size(), 2);
    assert_eq!(deck.to_string(), "Joker:Red Clubs:Queen");
}

#[test]
fn rank_band_selects_the_variant() {
    let mut deck = parse_str("Spades,10\nSpades,11\nSpades,13\n").unwrap();
    assert!(matches!(
        deck.draw_from_top().unwrap(),
        Card::Standard { rank: 10, .. }
    ));
    assert!(matches!(
        deck.draw_from_top().unwrap(),
        Card::Face { rank: 11, .. }
    ));
    assert!(matches!(
        deck.draw_from_top().unwrap(),
        Card::Face { rank: 13, .. }
    ));
}

#[test]
fn joker_token_skips_rank_validation() {
    let mut deck = parse_str("Joker,Red\nJoker,Anything Goes\n").unwrap();
    let first = deck.draw_from_top().unwrap();
    assert_eq!(first.value(), 14);
    assert_eq!(first.to_string(), "Joker:Red");
    assert_eq!(deck.draw_from_top().unwrap().to_string(), "Joker:Anything Goes");
}

#[test]
fn joker_label_may_itself_contain_commas() {
    // Split happens on the first comma only.
    let deck = parse_str("Joker,Red,Special\n").unwrap();
    assert_eq!(deck.to_string(), "Joker:Red,Special");
}

#[test]
fn lowercase_joker_is_an_ordinary_suit() {
    let mut deck = parse_str("joker,5\n").unwrap();
    let card = deck.draw_from_top().unwrap();
    assert!(matches!(&card, Card::Standard { suit, rank: 5 } if suit == "joker"));
    assert_eq!(card.value(), 5);
}

#[test]
fn empty_lines_are_skipped_anywhere() {
    let deck = parse_str("\nHearts,3\n\n\nSpades,4\n\n").unwrap();
    assert_eq!(deck.size(), 2);
    assert_eq!(deck.to_string(), "Hearts:3 Spades:4");
}

#[test]
fn crlf_line_endings_are_accepted() {
    let deck = parse_str("Hearts,3\r\nSpades,4\r\n").unwrap();
    assert_eq!(deck.to_string(), "Hearts:3 Spades:4");
}

#[test]
fn missing_final_newline_is_accepted() {
    let deck = parse_str("Hearts,3\nSpades,4").unwrap();
    assert_eq!(deck.size(), 2);
}

#[test]
fn malformed_lines_reject_the_whole_source() {
    // One bad line poisons an otherwise valid deck.
    let err = parse_str("Hearts,2\nSpades\nClubs,3\n").unwrap_err();
    assert!(matches!(
        err,
        DomainError::MalformedInput { line: 2, .. }
    ));
}

#[test]
fn malformed_line_numbers_count_raw_lines() {
    // Skipped empty lines still advance the line counter.
    let err = parse_str("\n\nHearts,99\n").unwrap_err();
    assert!(matches!(err, DomainError::MalformedInput { line: 3, .. }));
}

#[test]
fn structural_failures_are_malformed_input() {
    for source in [
        "Spades\n",        // no separator
        " \n",             // whitespace-only line has no separator
        ",5\n",            // empty suit
        "Hearts,\n",       // empty value
        "Joker,\n",        // empty label
        ",\n",             // both fields empty
    ] {
        let err = parse_str(source).unwrap_err();
        assert!(
            matches!(err, DomainError::MalformedInput { line: 1, .. }),
            "source {source:?} gave {err:?}"
        );
    }
}

#[test]
fn rank_failures_are_malformed_input() {
    for source in [
        "Hearts,abc\n",  // not an integer
        "Hearts, 5\n",   // no trimming
        "Hearts,5 \n",   // no trimming
        "Hearts,0\n",    // below range
        "Hearts,14\n",   // above range; joker rank is never written out
        "Hearts,99\n",   // above range
        "Hearts,-2\n",   // negative
        "Hearts,300\n",  // overflows the rank type
        "Hearts,1.5\n",  // not an integer
        "Hearts,++5\n",  // only one sign allowed
    ] {
        let err = parse_str(source).unwrap_err();
        assert!(
            matches!(err, DomainError::MalformedInput { line: 1, .. }),
            "source {source:?} gave {err:?}"
        );
    }
}

#[test]
fn leading_plus_rank_is_accepted() {
    // The one relaxation from digit-only input: str::parse::<u8> takes an
    // optional leading plus sign.
    let mut deck = parse_str("Hearts,+5\n").unwrap();
    let card = deck.draw_from_top().unwrap();
    assert!(matches!(&card, Card::Standard { suit, rank: 5 } if suit == "Hearts"));
    assert_eq!(card.value(), 5);
}

#[test]
fn empty_source_is_its_own_failure() {
    assert!(matches!(parse_str("").unwrap_err(), DomainError::EmptySource));
    assert!(matches!(
        parse_str("\n\n\n").unwrap_err(),
        DomainError::EmptySource
    ));
}

#[test]
fn rank_boundaries_round_trip() {
    let deck = parse_str("Clubs,1\nClubs,10\nClubs,11\nClubs,13\n").unwrap();
    let values: Vec<u8> = deck.iter().map(Card::value).collect();
    assert_eq!(values, vec![1, 10, 11, 13]);
}

#[test]
fn mid_stream_read_failures_are_unreadable_source() {
    struct FailingReader {
        fed: bool,
    }

    impl io::Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fed {
                return Err(io::Error::other("wire cut"));
            }
            self.fed = true;
            let bytes = b"Hearts,2\n";
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    let reader = io::BufReader::new(FailingReader { fed: false });
    let err = parse_deck(reader).unwrap_err();
    assert!(matches!(err, DomainError::UnreadableSource { .. }), "got {err:?}");
}
