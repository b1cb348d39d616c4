//! Round engine and state management.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

/// The four opening cards, in the order they were dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialDeal {
    /// Dealer's up card and hole card.
    pub dealer: [Card; 2],
    /// Player's two cards.
    pub player: [Card; 2],
}

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands for the whole round. Each operation
/// is valid in exactly one [`Phase`] and fails with an `InvalidState` error
/// otherwise.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards for this round.
    deck: Deck,
    /// Round options.
    options: GameOptions,
    /// Current phase.
    phase: Phase,
    /// Dealer's running score.
    dealer: Hand,
    /// Player's running score.
    player: Hand,
    /// Dealer's cards in dealing order.
    dealer_cards: Vec<Card>,
    /// Player's cards in dealing order.
    player_cards: Vec<Card>,
    /// Set once settled.
    result: Option<RoundResult>,
}

impl Game {
    /// Creates a round that will deal from `deck`.
    ///
    /// # Example
    ///
    /// ```
    /// use ppt_blackjack::{Deck, Game, GameOptions, Phase, SeededRandom};
    ///
    /// let deck = Deck::shuffle(&mut SeededRandom::new(42)).unwrap();
    /// let game = Game::new(deck, GameOptions::default());
    /// assert_eq!(game.phase(), Phase::Dealing);
    /// ```
    #[must_use]
    pub const fn new(deck: Deck, options: GameOptions) -> Self {
        Self {
            deck,
            options,
            phase: Phase::Dealing,
            dealer: Hand::new(),
            player: Hand::new(),
            dealer_cards: Vec::new(),
            player_cards: Vec::new(),
            result: None,
        }
    }

    /// Deals two cards to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing phase or the deck
    /// runs out.
    pub fn deal(&mut self) -> Result<InitialDeal, DealError> {
        if self.phase != Phase::Dealing {
            return Err(DealError::InvalidState);
        }
        if self.deck.remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut draw = || self.deck.draw().map_err(|_| DealError::NotEnoughCards);
        let dealer = [draw()?, draw()?];
        let player = [draw()?, draw()?];

        for card in dealer {
            self.dealer.add_card(card);
            self.dealer_cards.push(card);
        }
        for card in player {
            self.player.add_card(card);
            self.player_cards.push(card);
        }

        debug!(
            dealer = self.dealer.total(),
            player = self.player.total(),
            "opening cards dealt"
        );
        self.set_phase(Phase::OpenBlackjackCheck);

        Ok(InitialDeal { dealer, player })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's cards in dealing order.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    /// Returns the player's cards in dealing order.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the result once the round is settled.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
    }

    fn settle(&mut self, outcome: Outcome) -> RoundResult {
        let result = RoundResult {
            outcome,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            player_natural: self.player.is_natural(),
            dealer_natural: self.dealer.is_natural(),
            player_bust: self.player.is_bust(),
            dealer_bust: self.dealer.is_bust(),
        };
        self.result = Some(result);
        self.set_phase(Phase::Settled);
        result
    }
}
