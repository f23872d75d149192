//! Boundary between the game core and whatever drives it (console, tests).

use crate::model::card::{Card, format_cards};
use crate::model::player::Seat;
use core::fmt;
use std::collections::VecDeque;
use thiserror::Error;

/// Supplies raw text, e.g. a name or a bid typed by the human player.
pub trait InputSource {
    fn request_text(&mut self, prompt: &str) -> Result<String, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn request_text(&mut self, prompt: &str) -> Result<String, InputError> {
        (**self).request_text(prompt)
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed before a response was given")]
    Closed,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives everything the game wants the player to see.
pub trait Reporter {
    fn report(&mut self, event: &GameEvent);
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, event: &GameEvent) {
        (**self).report(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        showing: Vec<Card>,
        prize_value: u32,
        player_name: String,
        hand: Vec<Card>,
    },
    BidsRevealed {
        human: Card,
        ai: Card,
        ai_name: String,
    },
    RoundWon {
        seat: Seat,
        winner: String,
        prize: u32,
    },
    RoundTied {
        carried: u32,
    },
    GameOver {
        human_score: u32,
        ai_score: u32,
        ai_name: String,
        unclaimed: u32,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::RoundStarted {
                round,
                showing,
                prize_value,
                player_name,
                hand,
            } => {
                writeln!(f, "\nRound {round}")?;
                writeln!(
                    f,
                    "The prize currently showing is: {} (worth {prize_value})",
                    format_cards(showing)
                )?;
                write!(f, "Here's your hand, {player_name}: {}", format_cards(hand))
            }
            GameEvent::BidsRevealed { human, ai, ai_name } => {
                write!(f, "You bid {human}. {ai_name} bid: {ai}")
            }
            GameEvent::RoundWon { winner, prize, .. } => {
                write!(f, "{winner} won that round, for a prize of {prize} points.")
            }
            GameEvent::RoundTied { carried } => {
                write!(f, "A tie bid! {carried} points carry into the next round.")
            }
            GameEvent::GameOver {
                human_score,
                ai_score,
                ai_name,
                unclaimed,
            } => {
                writeln!(f, "\nGAME OVER!")?;
                writeln!(f, "\nFinal score:")?;
                writeln!(f, "  You: {human_score}")?;
                write!(f, "  {ai_name}: {ai_score}")?;
                if *unclaimed > 0 {
                    write!(f, "\n  Unclaimed after a final tie: {unclaimed}")?;
                }
                Ok(())
            }
        }
    }
}

/// Answers prompts from a fixed script; reports `Closed` once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    responses: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn request_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or(InputError::Closed)
    }
}

/// Keeps every reported event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<GameEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
