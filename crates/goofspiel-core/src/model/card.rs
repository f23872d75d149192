use core::fmt;
use serde::{Deserialize, Serialize};

/// A numeric card. Bids and prizes share the same value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Points this card is worth when awarded as a prize.
    pub const fn points(self) -> u32 {
        self.0 as u32
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a slice of cards as `[1, 2, 3]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner = cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}
