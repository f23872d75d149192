use crate::game::round::{RoundOutcome, RoundRecord};
use crate::model::deck::DeckRange;
use crate::model::player::Seat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub name: String,
    pub score: u32,
}

/// End-of-game (or in-progress) record of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: Option<u64>,
    pub deck: DeckRange,
    pub human: PlayerSummary,
    pub ai: PlayerSummary,
    pub rounds: Vec<RoundRecord>,
    /// Prize value still showing; never awarded when the game ends on a tie.
    pub unclaimed: u32,
    pub finished: bool,
}

impl GameSummary {
    pub fn player(&self, seat: Seat) -> &PlayerSummary {
        match seat {
            Seat::Human => &self.human,
            Seat::Ai => &self.ai,
        }
    }

    /// `None` on a drawn game.
    pub fn leader(&self) -> Option<Seat> {
        match self.human.score.cmp(&self.ai.score) {
            core::cmp::Ordering::Greater => Some(Seat::Human),
            core::cmp::Ordering::Less => Some(Seat::Ai),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Sum of prize values won by `seat` according to the round history.
    pub fn points_won(&self, seat: Seat) -> u32 {
        self.rounds
            .iter()
            .filter(|round| round.outcome == RoundOutcome::Win(seat))
            .map(|round| round.prize_value)
            .sum()
    }

    pub fn ties(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.outcome == RoundOutcome::Tie)
            .count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
