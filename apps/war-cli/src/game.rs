//! The game loop: round sequencing, console narration, and the verdict.

use std::cmp::Ordering;
use std::error::Error;

use game_core::{play_round, Deck, Player};
use tracing::debug;

use crate::output::RoundLog;

/// Final standing of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Overall winner, `None` when both decks ended the same size.
    pub winner: Option<Player>,
    pub rounds_played: u32,
    pub final_count_a: usize,
    pub final_count_b: usize,
}

/// A game of War between the two fixed seats.
pub struct WarGame {
    deck_a: Deck,
    deck_b: Deck,
    rounds_played: u32,
}

impl WarGame {
    pub fn new(deck_a: Deck, deck_b: Deck) -> Self {
        Self {
            deck_a,
            deck_b,
            rounds_played: 0,
        }
    }

    /// Run rounds until one deck empties or `max_rounds` is reached.
    ///
    /// Each round is narrated to stdout and appended to `log`. Tied rounds
    /// return both cards, so the cap is what guarantees termination; a game
    /// stopped by the cap is decided by remaining deck size.
    pub fn run(
        &mut self,
        log: &mut RoundLog,
        max_rounds: u32,
    ) -> Result<GameSummary, Box<dyn Error>> {
        println!(
            "Starting War! Player A holds {} cards, Player B holds {} cards.",
            self.deck_a.size(),
            self.deck_b.size()
        );

        while !self.deck_a.is_empty() && !self.deck_b.is_empty() && self.rounds_played < max_rounds
        {
            let round = self.rounds_played + 1;
            let outcome = play_round(&mut self.deck_a, &mut self.deck_b)?;
            self.rounds_played = round;

            println!("Round {round}:");
            println!("  Player A plays {}", outcome.card_a);
            println!("  Player B plays {}", outcome.card_b);
            match outcome.winner {
                Some(player) => println!("  {player} takes the round."),
                None => println!("  Tie! Both cards return to their decks."),
            }
            debug!(
                "round {} done: A holds {}, B holds {}",
                round,
                self.deck_a.size(),
                self.deck_b.size()
            );

            log.write_round(round, &self.deck_a, &self.deck_b)?;
        }

        let summary = self.summary();
        println!("Game Over after {} round(s).", summary.rounds_played);
        match summary.winner {
            Some(player) => println!("{player} wins!"),
            None => println!("It's a tie!"),
        }
        Ok(summary)
    }

    // Verdict by remaining deck size. Covers both a cleared-out opponent
    // and a game stopped at the round cap.
    fn summary(&self) -> GameSummary {
        let winner = match self.deck_a.size().cmp(&self.deck_b.size()) {
            Ordering::Greater => Some(Player::A),
            Ordering::Less => Some(Player::B),
            Ordering::Equal => None,
        };
        GameSummary {
            winner,
            rounds_played: self.rounds_played,
            final_count_a: self.deck_a.size(),
            final_count_b: self.deck_b.size(),
        }
    }
}
