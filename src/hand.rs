//! Running hand score with soft-ace tracking.

use crate::card::Card;

/// Total above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// A hand's running score.
///
/// Only the total and whether an Ace is currently counted as 11 are kept.
/// The score is updated card by card and never re-evaluated from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    /// Sum of all cards after ace demotion.
    total: u8,
    /// Whether an Ace currently counts as 11.
    soft_ace: bool,
    /// Number of cards added.
    len: u8,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            soft_ace: false,
            len: 0,
        }
    }

    /// Adds a card to the hand.
    ///
    /// An Ace is counted as 11 and marks the hand soft. If the new total goes
    /// over 21 while soft, one Ace is demoted to 1. The demotion runs once
    /// per added card, so the total may still exceed 21.
    pub const fn add_card(&mut self, card: Card) {
        if card.is_ace() {
            self.soft_ace = true;
        }
        self.total = self.total.saturating_add(card.value());

        if self.total > BLACKJACK && self.soft_ace {
            self.soft_ace = false;
            self.total -= 10;
        }
        self.len = self.len.saturating_add(1);
    }

    /// Returns the current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether an Ace currently counts as 11.
    #[must_use]
    pub const fn has_soft_ace(&self) -> bool {
        self.soft_ace
    }

    /// Returns the number of cards added.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns whether no card has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether the total is exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.total == BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        self.len == 2 && self.is_twenty_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(ids: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &id in ids {
            hand.add_card(Card::new(id).unwrap());
        }
        hand
    }

    #[test]
    fn face_cards_count_ten() {
        let hand = score(&[10, 24, 38]);
        assert_eq!(hand.total(), 30);
        assert!(hand.is_bust());
        assert!(!hand.has_soft_ace());
    }

    #[test]
    fn ten_and_ace_is_a_soft_natural() {
        let hand = score(&[9, 13]);
        assert_eq!(hand.total(), 21);
        assert!(hand.has_soft_ace());
        assert!(hand.is_natural());
    }

    #[test]
    fn ace_demotes_when_over_21() {
        let mut hand = score(&[0, 5]);
        assert_eq!((hand.total(), hand.has_soft_ace()), (17, true));

        hand.add_card(Card::new(7).unwrap());
        assert_eq!((hand.total(), hand.has_soft_ace()), (15, false));
        assert!(!hand.is_natural());
    }

    #[test]
    fn two_aces_make_hard_twelve() {
        let hand = score(&[0, 13]);
        assert_eq!((hand.total(), hand.has_soft_ace()), (12, false));
    }

    #[test]
    fn demotion_runs_once_per_card() {
        // A, A -> 12 hard; a King then busts since no soft ace is left.
        let hand = score(&[0, 13, 12]);
        assert_eq!((hand.total(), hand.has_soft_ace()), (22, false));
        assert!(hand.is_bust());
    }

    #[test]
    fn soft_total_never_exceeds_21() {
        for first in 0..52 {
            for second in 0..52 {
                for third in [0, 5, 9, 12, 26] {
                    let hand = score(&[first, second, third]);
                    if hand.has_soft_ace() {
                        assert!(hand.total() <= BLACKJACK);
                    }
                }
            }
        }
    }

    #[test]
    fn replay_is_deterministic() {
        let ids = [0, 3, 13, 7, 26];
        assert_eq!(score(&ids), score(&ids));
    }
}
