//! War CLI - two-player War from a deck file, with a round-by-round CSV log.

use std::path::PathBuf;

use clap::Parser;
use game_core::{deal_two, read_deck_from_path, MAX_ROUNDS};
use tracing::info;
use war_cli::{RoundLog, WarGame};

#[derive(Parser)]
#[command(name = "war-cli")]
#[command(about = "Two-player War card game simulator")]
struct Args {
    /// Input deck file, one card per line: Suit,Rank or Joker,Label
    input: PathBuf,

    /// Output CSV file for the round-by-round log
    output: PathBuf,

    /// Maximum number of rounds before the game is called on deck size
    #[arg(long, default_value_t = MAX_ROUNDS)]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            // Missing or extra arguments; clap's message carries the usage text.
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Silent by default, diagnostics on stderr only when asked for
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let deck = read_deck_from_path(&args.input)?;
    info!("loaded {} cards from {}", deck.size(), args.input.display());

    let (deck_a, deck_b) = deal_two(deck);
    let mut log = RoundLog::create(&args.output)?;

    let mut game = WarGame::new(deck_a, deck_b);
    let summary = game.run(&mut log, args.max_rounds)?;
    log.finish()?;

    info!(
        "round log written to {} ({} rounds)",
        args.output.display(),
        summary.rounds_played
    );
    Ok(())
}
