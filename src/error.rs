//! Error types for round operations.

use std::io;

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    Exhausted,
    /// The card order is not a permutation of the 52 identifiers.
    #[error("card order is not a permutation of the deck")]
    NotAPermutation,
}

/// Errors raised by a random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The random source cannot produce a value.
    #[error("random source unavailable")]
    Unavailable,
    /// The random source returned a value outside the requested range.
    #[error("random value {value} outside 0..={bound}")]
    OutOfRange {
        /// Inclusive upper bound that was requested.
        bound: u32,
        /// Value that was returned.
        value: u32,
    },
}

/// Errors raised while reading console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line was longer than allowed.
    #[error("malformed input: line longer than {limit} bytes")]
    MalformedInput {
        /// Maximum accepted line length.
        limit: usize,
    },
    /// The line was not a number where one was expected.
    #[error("expected a number")]
    NotANumber,
    /// The underlying reader failed.
    #[error("input failed: {0}")]
    Io(io::ErrorKind),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer turn.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that abort a round played through [`crate::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The shuffle could not obtain random values.
    #[error("shuffle failed: {0}")]
    Random(#[from] RandomError),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player turn failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer turn failed.
    #[error("dealer turn failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// Reading input failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Writing the transcript failed.
    #[error("output failed: {0}")]
    Output(io::ErrorKind),
}

impl From<io::Error> for RoundError {
    fn from(err: io::Error) -> Self {
        Self::Output(err.kind())
    }
}

impl RoundError {
    /// Returns whether the round ran out of cards.
    #[must_use]
    pub const fn is_deck_exhausted(&self) -> bool {
        matches!(
            self,
            Self::Deal(DealError::NotEnoughCards)
                | Self::Action(ActionError::NoCards)
                | Self::Showdown(ShowdownError::NoCards)
        )
    }
}
