//! Plays one round of console blackjack.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use ppt_blackjack::{GameOptions, SeededRandom, StdConsole, play_round};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ppt-blackjack")]
#[command(about = "Play one round of blackjack against the dealer")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long, env = "PPT_BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Dealer stops drawing at this total (1 to 21)
    #[arg(long, default_value_t = 17, value_parser = clap::value_parser!(u8).range(1..=21))]
    stand_at: u8,

    /// Longest accepted input line in bytes
    #[arg(long, default_value_t = 64)]
    max_line: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the transcript.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = GameOptions::default()
        .with_dealer_stands_at(args.stand_at)
        .with_max_line_len(args.max_line);
    let mut rng = args.seed.map_or_else(SeededRandom::from_time, SeededRandom::new);
    debug!(seed = rng.seed(), ?options, "starting round");

    let mut console = StdConsole::new(
        io::stdin().lock(),
        io::stdout().lock(),
        options.max_line_len,
    );
    match play_round(&mut console, &mut rng, options) {
        Ok(result) => {
            debug!(?result, "round complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "round aborted");
            ExitCode::FAILURE
        }
    }
}
