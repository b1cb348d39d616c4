//! The 52-card deck and its shuffle.

use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckError, RandomError};
use crate::random::RandomSource;

/// An ordered deck of 52 distinct cards with a cursor to the next undealt card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    next: usize,
}

impl Deck {
    /// Shuffles a fresh deck.
    ///
    /// Builds the permutation inside-out: identifier `i` is swapped into a
    /// position drawn from `0..=i`, starting from identifier 0 at position 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the random source fails or returns a value outside
    /// the requested range.
    pub fn shuffle<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, RandomError> {
        let mut order = [0usize; DECK_SIZE];
        for i in 1..DECK_SIZE {
            let bound = i as u32;
            let value = rng.uniform(bound)?;
            if value > bound {
                return Err(RandomError::OutOfRange { bound, value });
            }
            let j = value as usize;
            order[i] = order[j];
            order[j] = i;
        }

        debug!("deck shuffled");
        Ok(Self {
            cards: order.map(Card::from_index),
            next: 0,
        })
    }

    /// Creates a deck dealing the given identifiers in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotAPermutation`] unless `ids` holds each of the
    /// 52 identifiers exactly once.
    pub fn from_order(ids: &[u8]) -> Result<Self, DeckError> {
        if ids.len() != DECK_SIZE {
            return Err(DeckError::NotAPermutation);
        }

        let mut seen = [false; DECK_SIZE];
        let mut cards = [Card::from_index(0); DECK_SIZE];
        for (slot, &id) in cards.iter_mut().zip(ids) {
            let card = Card::new(id).ok_or(DeckError::NotAPermutation)?;
            let index = usize::from(id);
            if seen[index] {
                return Err(DeckError::NotAPermutation);
            }
            seen[index] = true;
            *slot = card;
        }

        Ok(Self { cards, next: 0 })
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 52 cards have been dealt.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.next).ok_or(DeckError::Exhausted)?;
        self.next += 1;
        Ok(card)
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }

    /// Returns the number of cards already dealt.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.next
    }

    /// Returns all cards in dealing order.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }
}
