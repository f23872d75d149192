use crate::game::io::{GameEvent, Reporter};
use crate::game::strategy::{BidContext, BidStrategy, StrategyError};
use crate::model::card::Card;
use crate::model::player::{Player, Seat};
use crate::model::prize::{DrawError, PrizeDrawer};
use crate::model::random::RandomSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected answers tolerated from one strategy in one round.
pub const MAX_BID_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Win(Seat),
    Tie,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Seat> {
        match self {
            RoundOutcome::Win(seat) => Some(seat),
            RoundOutcome::Tie => None,
        }
    }
}

/// Strictly greater bid wins; equal bids always tie.
pub fn resolve_bids(human: Card, ai: Card) -> RoundOutcome {
    match human.cmp(&ai) {
        core::cmp::Ordering::Greater => RoundOutcome::Win(Seat::Human),
        core::cmp::Ordering::Less => RoundOutcome::Win(Seat::Ai),
        core::cmp::Ordering::Equal => RoundOutcome::Tie,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    pub prize_card: Card,
    pub human_bid: Card,
    pub ai_bid: Card,
    pub outcome: RoundOutcome,
    /// Showing total when the round resolved, including carried prizes.
    pub prize_value: u32,
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error("{seat} strategy failed: {source}")]
    Strategy {
        seat: Seat,
        #[source]
        source: StrategyError,
    },
    #[error("{seat} strategy named a card outside its hand {attempts} times")]
    BidRetriesExhausted { seat: Seat, attempts: usize },
}

/// One draw-bid-resolve cycle over both seats.
pub struct BiddingRound<'a> {
    pub number: u32,
    pub players: &'a mut [Player; 2],
    pub strategies: &'a mut [Box<dyn BidStrategy>; 2],
    pub prizes: &'a mut PrizeDrawer,
    pub reporter: &'a mut dyn Reporter,
}

impl BiddingRound<'_> {
    pub fn play<R: RandomSource + ?Sized>(self, rng: &mut R) -> Result<RoundRecord, RoundError> {
        let BiddingRound {
            number,
            players,
            strategies,
            prizes,
            reporter,
        } = self;

        let prize_card = prizes.draw_next(rng)?;
        let human = &players[Seat::Human.index()];
        reporter.report(&GameEvent::RoundStarted {
            round: number,
            showing: prizes.showing().to_vec(),
            prize_value: prizes.current_value(),
            player_name: human.name().to_string(),
            hand: human.hand().cards().to_vec(),
        });

        let mut bids = [Card::new(0); 2];
        for seat in Seat::LOOP {
            bids[seat.index()] = collect_bid(seat, number, players, strategies, prizes)?;
        }
        let [human_bid, ai_bid] = bids;
        reporter.report(&GameEvent::BidsRevealed {
            human: human_bid,
            ai: ai_bid,
            ai_name: players[Seat::Ai.index()].name().to_string(),
        });

        let outcome = resolve_bids(human_bid, ai_bid);
        let prize_value = prizes.current_value();
        match outcome.winner() {
            Some(seat) => {
                let winner = &mut players[seat.index()];
                winner.award(prize_value);
                prizes.reset_showing();
                reporter.report(&GameEvent::RoundWon {
                    seat,
                    winner: winner.name().to_string(),
                    prize: prize_value,
                });
            }
            None => {
                reporter.report(&GameEvent::RoundTied {
                    carried: prize_value,
                });
            }
        }
        for player in players.iter_mut() {
            player.reset_current_bid();
        }

        Ok(RoundRecord {
            number,
            prize_card,
            human_bid,
            ai_bid,
            outcome,
            prize_value,
        })
    }
}

fn collect_bid(
    seat: Seat,
    round: u32,
    players: &mut [Player; 2],
    strategies: &mut [Box<dyn BidStrategy>; 2],
    prizes: &PrizeDrawer,
) -> Result<Card, RoundError> {
    let strategy = &mut strategies[seat.index()];

    for _ in 0..MAX_BID_ATTEMPTS {
        let player = &players[seat.index()];
        let ctx = BidContext {
            seat,
            hand: player.hand(),
            showing: prizes.showing(),
            prize_value: prizes.current_value(),
            round,
        };
        let card = strategy
            .select_bid(&ctx)
            .map_err(|source| RoundError::Strategy { seat, source })?;

        match players[seat.index()].place_bid(card) {
            Ok(card) => return Ok(card),
            Err(err) => {
                tracing::warn!(%seat, strategy = strategy.label(), %err, "bid rejected");
            }
        }
    }

    Err(RoundError::BidRetriesExhausted {
        seat,
        attempts: MAX_BID_ATTEMPTS,
    })
}
