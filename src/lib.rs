//! A single-deck, single-player console blackjack round.
//!
//! The crate is split into a pure engine and a console driver:
//!
//! - [`Card`], [`Deck`] and [`Hand`] hold the card codec, the shuffle and the
//!   running soft-ace score.
//! - [`Game`] is the round state machine (deal, naturals check, player turn,
//!   dealer turn, settlement). It performs no I/O.
//! - [`play_round`] drives a [`Game`] against a [`Console`] and writes the
//!   round transcript.
//!
//! # Example
//!
//! ```
//! use ppt_blackjack::{GameOptions, SeededRandom, StdConsole, play_round};
//!
//! let options = GameOptions::default();
//! let mut rng = SeededRandom::new(42);
//! let mut console = StdConsole::new(&b"s\n"[..], Vec::new(), options.max_line_len);
//! let result = play_round(&mut console, &mut rng, options).unwrap();
//! let (_, transcript) = console.into_inner();
//! let transcript = String::from_utf8(transcript).unwrap();
//! assert!(transcript.starts_with("D: "));
//! assert!(transcript.ends_with(&format!("{}\n", result.outcome)));
//! ```

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod random;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS};
pub use console::{Console, StdConsole};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DeckError, InputError, RandomError, RoundError, ShowdownError,
};
pub use game::{Game, InitialDeal, Phase};
pub use hand::Hand;
pub use options::GameOptions;
pub use random::{RandomSource, SeededRandom};
pub use result::{Outcome, RoundResult};
pub use table::{play_deck, play_round};
