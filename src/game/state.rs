//! Round phase types.

/// Phase of a round.
///
/// A round moves forward only: `Dealing`, `OpenBlackjackCheck`, then either
/// straight to `Settled` on a natural or through `PlayerTurn` and
/// `DealerTurn`. A player bust also jumps from `PlayerTurn` to `Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the opening four cards.
    Dealing,
    /// Opening cards dealt; naturals not yet checked.
    OpenBlackjackCheck,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over and the result is known.
    Settled,
}

impl Phase {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }
}
