//! Card identifiers and their display ranks.

use core::fmt;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS: u8 = 13;

const FACES: [&str; 3] = ["J", "Q", "K"];

/// A playing card, identified by an integer in `0..52`.
///
/// Suits are not modelled; only the rank derived from the identifier matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identifier.
    ///
    /// Returns `None` if `id` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Identifier already known to be in range.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8)
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.0 % RANKS + 1
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank() == 1
    }

    /// Returns the scoring value, counting an Ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank() {
            1 => 11,
            rank @ 2..=10 => rank,
            _ => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            1 => f.write_str("A"),
            rank @ 11..=13 => f.write_str(FACES[(rank - 11) as usize]),
            rank => write!(f, "{rank}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u8) -> Card {
        Card::new(id).unwrap()
    }

    #[test]
    fn display_cycles_every_thirteen() {
        for (id, text) in [
            (0, "A"),
            (12, "K"),
            (13, "A"),
            (25, "K"),
            (26, "A"),
            (38, "K"),
            (39, "A"),
            (50, "Q"),
            (51, "K"),
        ] {
            assert_eq!(card(id).to_string(), text, "card {id}");
        }
        assert_eq!(card(1).to_string(), "2");
        assert_eq!(card(9).to_string(), "10");
        assert_eq!(card(10).to_string(), "J");
        assert_eq!(card(11).to_string(), "Q");
    }

    #[test]
    fn values() {
        assert_eq!(card(0).value(), 11);
        assert_eq!(card(4).value(), 5);
        assert_eq!(card(9).value(), 10);
        assert_eq!(card(24).value(), 10);
        assert!(card(26).is_ace());
    }

    #[test]
    fn rejects_out_of_range_ids() {
        assert!(Card::new(51).is_some());
        assert!(Card::new(52).is_none());
        assert!(Card::new(u8::MAX).is_none());
    }
}
