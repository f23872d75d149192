use crate::model::card::Card;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 13;
pub const DEFAULT_HIGH_CARD: u8 = 4;

/// Ordered run of card values used to seed hands and the prize pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every value in `low..=high`, ascending. Empty when `low > high`.
    pub fn generate(low: u8, high: u8) -> Self {
        let cards = (low..=high).map(Card::new).collect();
        Self { cards }
    }

    pub fn standard() -> Self {
        DeckRange::default().deck()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Validated bounds for deck generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRange {
    pub low: u8,
    pub high: u8,
}

impl DeckRange {
    pub fn new(low: u8, high: u8) -> Result<Self, DeckError> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    pub const fn full_suit() -> Self {
        Self {
            low: MIN_CARD_VALUE,
            high: MAX_CARD_VALUE,
        }
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.low < MIN_CARD_VALUE || self.high > MAX_CARD_VALUE {
            return Err(DeckError::OutOfBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.low > self.high {
            return Err(DeckError::Inverted {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        if self.low > self.high {
            0
        } else {
            usize::from(self.high - self.low) + 1
        }
    }

    pub fn deck(&self) -> Deck {
        Deck::generate(self.low, self.high)
    }
}

impl Default for DeckRange {
    fn default() -> Self {
        Self {
            low: MIN_CARD_VALUE,
            high: DEFAULT_HIGH_CARD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card values must lie within 1..=13, got {low}..={high}")]
    OutOfBounds { low: u8, high: u8 },
    #[error("low card {low} is greater than high card {high}")]
    Inverted { low: u8, high: u8 },
}
