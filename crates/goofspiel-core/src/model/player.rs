use crate::model::card::Card;
use crate::model::hand::{BidError, Hand};
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Seat {
    Human = 0,
    Ai = 1,
}

impl Seat {
    /// Bidding order within a round.
    pub const LOOP: [Seat; 2] = [Seat::Human, Seat::Ai];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::Human),
            1 => Some(Seat::Ai),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::Human => "Human",
            Seat::Ai => "AI",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    score: u32,
    current_bid: Option<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
            score: 0,
            current_bid: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_bid(&self) -> Option<Card> {
        self.current_bid
    }

    /// Removes `card` from the hand and records it as this round's bid.
    pub fn place_bid(&mut self, card: Card) -> Result<Card, BidError> {
        let card = self.hand.place_bid(card)?;
        self.current_bid = Some(card);
        Ok(card)
    }

    pub fn reset_current_bid(&mut self) {
        self.current_bid = None;
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
