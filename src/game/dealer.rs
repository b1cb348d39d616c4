use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::Outcome;

use super::{Game, Phase};

impl Game {
    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer draws while their total is below
    /// [`GameOptions::dealer_stands_at`](crate::GameOptions::dealer_stands_at)
    /// (17 by default). A dealer bust wins for the player; otherwise the
    /// higher total wins and equal totals tie.
    ///
    /// Returns the cards drawn by the dealer, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.phase != Phase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer.total() < self.options.dealer_stands_at {
            let card = self.deck.draw().map_err(|_| ShowdownError::NoCards)?;
            self.dealer.add_card(card);
            self.dealer_cards.push(card);
            drawn_cards.push(card);
            debug!(%card, total = self.dealer.total(), "dealer draws");
        }

        let outcome = if self.dealer.is_bust() {
            Outcome::PlayerWins
        } else {
            Outcome::compare(self.player.total(), self.dealer.total())
        };

        debug!(?outcome, "settled after dealer turn");
        self.settle(outcome);

        Ok(drawn_cards)
    }
}
