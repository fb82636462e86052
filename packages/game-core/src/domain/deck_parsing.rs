//! Strict deck loading from line-oriented `Suit,Rank` / `Joker,Label` text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::cards::Card;
use crate::domain::deck::Deck;
use crate::errors::domain::DomainError;

/// Decode a whole deck from a line-oriented reader.
///
/// One record per line, split on the first comma: `Hearts,7`, `Clubs,12`,
/// `Joker,Red`. Lines are taken strictly as-is (no trimming, exact-case
/// `Joker` token), empty lines are skipped, and the load is all-or-nothing:
/// the first offending line rejects the entire source with
/// [`DomainError::MalformedInput`]. A source that yields no cards at all
/// is rejected with [`DomainError::EmptySource`].
pub fn parse_deck<R: BufRead>(reader: R) -> Result<Deck, DomainError> {
    let mut deck = Deck::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line
            .map_err(|e| DomainError::unreadable(format!("read failed at line {line_no}"), e))?;
        if line.is_empty() {
            continue;
        }
        deck.add_to_bottom(parse_line(&line, line_no)?);
    }

    if deck.is_empty() {
        return Err(DomainError::EmptySource);
    }
    Ok(deck)
}

/// Open `path` and decode it with [`parse_deck`].
///
/// A file that cannot be opened fails with [`DomainError::UnreadableSource`]
/// carrying the underlying I/O error.
pub fn read_deck_from_path(path: &Path) -> Result<Deck, DomainError> {
    let file = File::open(path)
        .map_err(|e| DomainError::unreadable(path.display().to_string(), e))?;
    parse_deck(BufReader::new(file))
}

fn parse_line(line: &str, line_no: usize) -> Result<Card, DomainError> {
    let Some((suit, value)) = line.split_once(',') else {
        return Err(DomainError::malformed(line_no, "missing field separator"));
    };
    if suit.is_empty() || value.is_empty() {
        return Err(DomainError::malformed(line_no, "empty field"));
    }

    // Exact-case token. A lowercase "joker" is an ordinary suit name.
    if suit == "Joker" {
        return Ok(Card::joker(value));
    }

    // str::parse does no trimming, so " 5" and "5 " stay malformed.
    let rank: u8 = value
        .parse()
        .map_err(|_| DomainError::malformed(line_no, "rank is not an integer"))?;
    if !(1..=13).contains(&rank) {
        return Err(DomainError::malformed(line_no, "rank outside 1..=13"));
    }

    Ok(if rank >= 11 {
        Card::face(suit, rank)
    } else {
        Card::standard(suit, rank)
    })
}
