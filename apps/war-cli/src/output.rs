//! Per-round CSV log of the game.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use game_core::Deck;
use serde::Serialize;

/// One log row: the state of both decks after a completed round.
#[derive(Debug, Serialize)]
struct RoundRecord {
    round: u32,
    player_a_count: usize,
    player_b_count: usize,
    player_a_cards: String,
    player_b_cards: String,
}

/// Round-by-round CSV log.
///
/// Deck renderings are always quoted so the space-separated card lists
/// read back unambiguously; counts stay bare numbers.
pub struct RoundLog {
    writer: csv::Writer<BufWriter<File>>,
}

impl RoundLog {
    /// Create (or truncate) the log file at `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let mut buf = BufWriter::new(file);
        // The header goes out bare, before the csv writer owns the stream;
        // quoting applies to the data records only, and serialize must not
        // add a header of its own.
        writeln!(buf, "Round,PlayerA_Count,PlayerB_Count,PlayerA_Cards,PlayerB_Cards")?;
        buf.flush()?;
        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .has_headers(false)
            .from_writer(buf);
        Ok(Self { writer })
    }

    /// Append one record with the post-round state of both decks.
    pub fn write_round(
        &mut self,
        round: u32,
        deck_a: &Deck,
        deck_b: &Deck,
    ) -> Result<(), Box<dyn Error>> {
        let record = RoundRecord {
            round,
            player_a_count: deck_a.size(),
            player_b_count: deck_b.size(),
            player_a_cards: deck_a.to_string(),
            player_b_cards: deck_b.to_string(),
        };
        self.writer.serialize(&record)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush anything still buffered.
    pub fn finish(mut self) -> Result<(), Box<dyn Error>> {
        self.writer.flush()?;
        Ok(())
    }
}
