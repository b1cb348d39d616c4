use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Game, Phase};

impl Game {
    fn ensure_phase(&self, phase: Phase) -> Result<(), ActionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Checks both opening hands for a natural 21.
    ///
    /// A player natural wins outright unless the dealer also has one, which
    /// is a tie. A dealer natural against no player natural loses for the
    /// player. Otherwise the round moves on to the player's turn and `None`
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening cards have not just been dealt.
    pub fn check_naturals(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_phase(Phase::OpenBlackjackCheck)?;

        let outcome = match (self.player.is_twenty_one(), self.dealer.is_twenty_one()) {
            (true, true) => Outcome::Tie,
            (true, false) => Outcome::PlayerWins,
            (false, true) => Outcome::DealerWins,
            (false, false) => {
                self.set_phase(Phase::PlayerTurn);
                return Ok(None);
            }
        };

        debug!(?outcome, "settled on naturals");
        Ok(Some(self.settle(outcome)))
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting settles the round for the dealer. Reaching exactly 21 ends the
    /// player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let card = self.deck.draw().map_err(|_| ActionError::NoCards)?;
        self.player.add_card(card);
        self.player_cards.push(card);
        debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_bust() {
            self.settle(Outcome::DealerWins);
        } else if self.player.is_twenty_one() {
            self.set_phase(Phase::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        debug!(total = self.player.total(), "player stands");
        self.set_phase(Phase::DealerTurn);
        Ok(())
    }
}
