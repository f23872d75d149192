use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::random::RandomSource;
use thiserror::Error;

/// Depleting pool of prize cards.
///
/// Drawn cards sit in `showing` until a round is won, then move to `awarded`.
/// At any time `pool`, `showing` and `awarded` partition the original deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeDrawer {
    pool: Vec<Card>,
    showing: Vec<Card>,
    awarded: Vec<Card>,
}

impl PrizeDrawer {
    pub fn from_deck(deck: Deck) -> Self {
        Self {
            pool: deck.into_cards(),
            showing: Vec::new(),
            awarded: Vec::new(),
        }
    }

    pub fn draw_next<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.pool.is_empty() {
            return Err(DrawError::EmptyPool);
        }
        let index = rng.pick_index(self.pool.len()).min(self.pool.len() - 1);
        let card = self.pool.remove(index);
        self.showing.push(card);
        Ok(card)
    }

    pub fn current_value(&self) -> u32 {
        self.showing.iter().map(|card| card.points()).sum()
    }

    /// Clears the showing cards after a decisive round.
    pub fn reset_showing(&mut self) {
        self.awarded.append(&mut self.showing);
    }

    pub fn has_cards(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    pub fn showing(&self) -> &[Card] {
        &self.showing
    }

    pub fn awarded(&self) -> &[Card] {
        &self.awarded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("the prize pool is empty")]
    EmptyPool,
}
