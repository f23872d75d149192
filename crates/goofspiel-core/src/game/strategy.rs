use crate::game::io::{InputError, InputSource};
use crate::model::card::{Card, format_cards};
use crate::model::hand::Hand;
use crate::model::player::Seat;
use thiserror::Error;

/// Read-only view handed to a strategy when its bid is requested.
/// The opponent's bid for the round is deliberately absent.
#[derive(Debug, Clone, Copy)]
pub struct BidContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub showing: &'a [Card],
    pub prize_value: u32,
    pub round: u32,
}

/// Chooses which card a seat bids.
///
/// The round re-validates every answer against the hand; a card that is not
/// held is requested again.
pub trait BidStrategy {
    fn select_bid(&mut self, ctx: &BidContext<'_>) -> Result<Card, StrategyError>;

    fn label(&self) -> &'static str;
}

impl<T: BidStrategy + ?Sized> BidStrategy for Box<T> {
    fn select_bid(&mut self, ctx: &BidContext<'_>) -> Result<Card, StrategyError> {
        (**self).select_bid(ctx)
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("no cards left to bid")]
    EmptyHand,
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBidError {
    #[error("bid must be an integer, got {0:?}")]
    NonIntegerInput(String),
    #[error("no card has the value {0}")]
    OutOfRange(i64),
}

pub fn parse_bid(raw: &str) -> Result<Card, ParseBidError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ParseBidError::NonIntegerInput(trimmed.to_string()))?;
    u8::try_from(value)
        .map(Card::new)
        .map_err(|_| ParseBidError::OutOfRange(value))
}

pub const BID_PROMPT: &str = "Your bid: ";

/// Asks an [`InputSource`] until the answer names a card in hand.
#[derive(Debug)]
pub struct InteractiveBidder<I> {
    input: I,
}

impl<I: InputSource> InteractiveBidder<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: InputSource> BidStrategy for InteractiveBidder<I> {
    fn select_bid(&mut self, ctx: &BidContext<'_>) -> Result<Card, StrategyError> {
        if ctx.hand.is_empty() {
            return Err(StrategyError::EmptyHand);
        }

        let mut prompt = BID_PROMPT.to_string();
        loop {
            let raw = self.input.request_text(&prompt)?;
            match parse_bid(&raw) {
                Ok(card) if ctx.hand.contains(card) => return Ok(card),
                Ok(_) | Err(ParseBidError::OutOfRange(_)) => {
                    tracing::debug!(raw = raw.trim(), "bid names a card not in hand");
                    prompt = format!(
                        "\nYou don't have that card to bid! You can choose from these:\n{}\n{BID_PROMPT}",
                        format_cards(ctx.hand.cards())
                    );
                }
                Err(err @ ParseBidError::NonIntegerInput(_)) => {
                    tracing::debug!(%err, "bid was not an integer");
                    prompt = format!(
                        "\nBid must be an integer. Choose one from your hand:\n{}\n{BID_PROMPT}",
                        format_cards(ctx.hand.cards())
                    );
                }
            }
        }
    }

    fn label(&self) -> &'static str {
        "interactive"
    }
}
