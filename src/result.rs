//! Round outcome types.

use core::fmt;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins (higher total, natural, or dealer bust).
    PlayerWins,
    /// The dealer wins (higher total, natural, or player bust).
    DealerWins,
    /// Push: equal totals or two naturals.
    Tie,
}

impl Outcome {
    /// Compares two final, non-bust totals.
    #[must_use]
    pub const fn compare(player_total: u8, dealer_total: u8) -> Self {
        if dealer_total > player_total {
            Self::DealerWins
        } else if dealer_total == player_total {
            Self::Tie
        } else {
            Self::PlayerWins
        }
    }

    /// Returns the verdict as announced at the table.
    #[must_use]
    pub const fn announcement(&self) -> &'static str {
        match self {
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.announcement())
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the player had a natural 21.
    pub player_natural: bool,
    /// Whether the dealer had a natural 21.
    pub dealer_natural: bool,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns whether the round ended on the opening naturals check.
    #[must_use]
    pub const fn settled_on_naturals(&self) -> bool {
        self.player_natural || self.dealer_natural
    }
}
