use goofspiel_core::game::strategy::{BidContext, BidStrategy, StrategyError};
use goofspiel_core::model::card::{Card, format_cards};
use goofspiel_core::model::random::RandomSource;
use tracing::{Level, event};

/// Bids a uniformly random card from the hand.
pub struct RandomBidder<R> {
    rng: R,
}

impl<R: RandomSource> RandomBidder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> BidStrategy for RandomBidder<R> {
    fn select_bid(&mut self, ctx: &BidContext<'_>) -> Result<Card, StrategyError> {
        let cards = ctx.hand.cards();
        if cards.is_empty() {
            return Err(StrategyError::EmptyHand);
        }
        let index = self.rng.pick_index(cards.len()).min(cards.len() - 1);
        let chosen = cards[index];
        log_bid_decision(ctx, chosen);
        Ok(chosen)
    }

    fn label(&self) -> &'static str {
        "random"
    }
}

fn log_bid_decision(ctx: &BidContext<'_>, chosen: Card) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "goofspiel_bot::bid",
        Level::DEBUG,
        seat = %ctx.seat,
        round = ctx.round,
        hand_size = ctx.hand.len(),
        hand = %format_cards(ctx.hand.cards()),
        showing = %format_cards(ctx.showing),
        prize_value = ctx.prize_value,
        chosen = chosen.value(),
    );
}
