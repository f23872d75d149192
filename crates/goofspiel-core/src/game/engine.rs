use crate::game::io::{GameEvent, InputError, InputSource, Reporter};
use crate::game::round::{BiddingRound, RoundError, RoundRecord};
use crate::game::serialization::{GameSummary, PlayerSummary};
use crate::game::strategy::{BidStrategy, InteractiveBidder};
use crate::model::deck::{DeckError, DeckRange};
use crate::model::hand::Hand;
use crate::model::player::{Player, Seat};
use crate::model::prize::PrizeDrawer;
use crate::model::random::RandomSource;
use thiserror::Error;

pub const NAME_PROMPT: &str = "Enter your name: ";
pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_AI_NAME: &str = "AI";
/// Longest name shown for either seat, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Cleans a typed name: control characters dropped, surrounding whitespace
/// trimmed, cut to [`MAX_NAME_LEN`]. `None` when nothing printable is left.
pub fn sanitize_name(raw: &str) -> Option<String> {
    let printable: String = raw.chars().filter(|c| !c.is_control()).collect();
    let name: String = printable.trim().chars().take(MAX_NAME_LEN).collect();
    let name = name.trim_end();
    (!name.is_empty()).then(|| name.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Playing,
    GameOver,
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub deck: DeckRange,
    /// When absent the human is asked for a name.
    pub player_name: Option<String>,
    pub ai_name: String,
    /// Recorded in the summary; the caller builds the random source from it.
    pub seed: Option<u64>,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            deck: DeckRange::default(),
            player_name: None,
            ai_name: DEFAULT_AI_NAME.to_string(),
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
    #[error("could not read the player name: {0}")]
    Name(#[source] InputError),
    #[error("round {round} failed: {source}")]
    Round {
        round: u32,
        #[source]
        source: RoundError,
    },
}

/// Drives rounds from setup until the prize pool runs out.
///
/// Single owner, no interior mutability: every mutation of players and the
/// prize drawer goes through `&mut self`.
pub struct GameEngine<R> {
    players: [Player; 2],
    strategies: [Box<dyn BidStrategy>; 2],
    prizes: PrizeDrawer,
    rng: R,
    phase: GamePhase,
    deck: DeckRange,
    seed: Option<u64>,
    history: Vec<RoundRecord>,
}

impl<R: RandomSource> GameEngine<R> {
    /// Setup phase for the usual human-vs-AI game: the input source answers the
    /// name prompt and then becomes the human's bidder.
    pub fn setup<I>(
        setup: GameSetup,
        mut input: I,
        ai: Box<dyn BidStrategy>,
        rng: R,
    ) -> Result<Self, GameError>
    where
        I: InputSource + 'static,
    {
        let name = match setup.player_name.clone() {
            Some(name) => name,
            None => input.request_text(NAME_PROMPT).map_err(GameError::Name)?,
        };
        let human: Box<dyn BidStrategy> = Box::new(InteractiveBidder::new(input));
        let setup = GameSetup {
            player_name: Some(name),
            ..setup
        };
        Self::with_strategies(setup, [human, ai], rng)
    }

    /// Setup phase with explicit strategies for both seats.
    pub fn with_strategies(
        setup: GameSetup,
        strategies: [Box<dyn BidStrategy>; 2],
        rng: R,
    ) -> Result<Self, GameError> {
        setup.deck.validate()?;

        let human_name = setup
            .player_name
            .as_deref()
            .and_then(sanitize_name)
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let hand = || Hand::with_cards(setup.deck.deck().into_cards());
        let players = [
            Player::new(human_name, hand()),
            Player::new(setup.ai_name.clone(), hand()),
        ];

        tracing::info!(
            target: "goofspiel_core::engine",
            human = players[0].name(),
            human_strategy = strategies[0].label(),
            ai_strategy = strategies[1].label(),
            low = setup.deck.low,
            high = setup.deck.high,
            seed = ?setup.seed,
            "game set up"
        );

        Ok(Self {
            players,
            strategies,
            prizes: PrizeDrawer::from_deck(setup.deck.deck()),
            rng,
            phase: GamePhase::Setup,
            deck: setup.deck,
            seed: setup.seed,
            history: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.players[0].score(), self.players[1].score()]
    }

    pub fn prizes(&self) -> &PrizeDrawer {
        &self.prizes
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn round_number(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    /// Advances the game by one round, or moves to `GameOver` once the pool is
    /// empty. Returns the finished round, `None` when nothing was played.
    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<Option<RoundRecord>, GameError> {
        match self.phase {
            GamePhase::GameOver => return Ok(None),
            GamePhase::Setup => self.phase = GamePhase::Playing,
            GamePhase::Playing => {}
        }

        if !self.prizes.has_cards() {
            self.finish(reporter);
            return Ok(None);
        }

        let number = self.round_number();
        let record = self.play_round(number, reporter)?;
        self.history.push(record);
        Ok(Some(record))
    }

    /// Plays every remaining round and reports the final score.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<GameSummary, GameError> {
        while self.phase != GamePhase::GameOver {
            self.step(reporter)?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> GameSummary {
        let player = |seat: Seat| PlayerSummary {
            name: self.players[seat.index()].name().to_string(),
            score: self.players[seat.index()].score(),
        };
        GameSummary {
            seed: self.seed,
            deck: self.deck,
            human: player(Seat::Human),
            ai: player(Seat::Ai),
            rounds: self.history.clone(),
            unclaimed: self.prizes.current_value(),
            finished: self.phase == GamePhase::GameOver,
        }
    }

    fn play_round(
        &mut self,
        number: u32,
        reporter: &mut dyn Reporter,
    ) -> Result<RoundRecord, GameError> {
        let record = BiddingRound {
            number,
            players: &mut self.players,
            strategies: &mut self.strategies,
            prizes: &mut self.prizes,
            reporter,
        }
        .play(&mut self.rng)
        .map_err(|source| GameError::Round {
            round: number,
            source,
        })?;

        tracing::debug!(
            target: "goofspiel_core::engine",
            round = number,
            prize_card = record.prize_card.value(),
            human_bid = record.human_bid.value(),
            ai_bid = record.ai_bid.value(),
            outcome = ?record.outcome,
            prize_value = record.prize_value,
            "round resolved"
        );

        Ok(record)
    }

    fn finish(&mut self, reporter: &mut dyn Reporter) {
        self.phase = GamePhase::GameOver;
        let [human_score, ai_score] = self.scores();
        let unclaimed = self.prizes.current_value();

        tracing::info!(
            target: "goofspiel_core::engine",
            rounds = self.history.len(),
            human_score,
            ai_score,
            unclaimed,
            "game over"
        );

        reporter.report(&GameEvent::GameOver {
            human_score,
            ai_score,
            ai_name: self.players[Seat::Ai.index()].name().to_string(),
            unclaimed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{GameEngine, GameError, GamePhase, GameSetup, MAX_NAME_LEN, sanitize_name};
    use crate::game::io::{GameEvent, InputError, RecordingReporter, ScriptedInput};
    use crate::game::round::RoundOutcome;
    use crate::game::strategy::{BidContext, BidStrategy, StrategyError};
    use crate::model::card::Card;
    use crate::model::deck::{DeckError, DeckRange};
    use crate::model::player::Seat;
    use crate::model::random::ScriptedRandom;
    use std::collections::VecDeque;

    struct Fixed(VecDeque<Card>);

    impl BidStrategy for Fixed {
        fn select_bid(&mut self, _ctx: &BidContext<'_>) -> Result<Card, StrategyError> {
            self.0.pop_front().ok_or(StrategyError::EmptyHand)
        }

        fn label(&self) -> &'static str {
            "fixed"
        }
    }

    fn fixed(values: &[u8]) -> Box<dyn BidStrategy> {
        Box::new(Fixed(values.iter().copied().map(Card::new).collect()))
    }

    // Always drawing index 0 from an ascending pool yields prizes 1, 2, 3, 4.
    fn in_order() -> ScriptedRandom {
        ScriptedRandom::new([0; 13])
    }

    #[test]
    fn full_game_scores_sum_of_prizes_won() {
        let input = ScriptedInput::new(["Ada", "4", "3", "2", "1"]);
        let mut engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[1, 2, 3, 4]), in_order())
                .unwrap();
        assert_eq!(engine.phase(), GamePhase::Setup);
        assert_eq!(engine.player(Seat::Human).name(), "Ada");

        let mut reporter = RecordingReporter::default();
        let summary = engine.run(&mut reporter).unwrap();

        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert!(!engine.prizes().has_cards());
        assert_eq!(engine.history().len(), 4);
        assert_eq!(summary.human.score, 1 + 2);
        assert_eq!(summary.ai.score, 3 + 4);
        assert_eq!(summary.points_won(Seat::Human), summary.human.score);
        assert_eq!(summary.points_won(Seat::Ai), summary.ai.score);
        assert_eq!(summary.unclaimed, 0);
        assert!(summary.finished);
        assert!(engine.player(Seat::Human).hand().is_empty());
        assert!(engine.player(Seat::Ai).hand().is_empty());

        assert_eq!(
            reporter.events.last(),
            Some(&GameEvent::GameOver {
                human_score: 3,
                ai_score: 7,
                ai_name: "AI".into(),
                unclaimed: 0,
            })
        );
    }

    #[test]
    fn phases_advance_and_game_over_is_terminal() {
        let mut engine = GameEngine::with_strategies(
            GameSetup {
                deck: DeckRange::new(1, 2).unwrap(),
                player_name: Some("Ada".into()),
                ..GameSetup::default()
            },
            [fixed(&[2, 1]), fixed(&[1, 2])],
            in_order(),
        )
        .unwrap();
        let mut reporter = RecordingReporter::default();

        assert_eq!(engine.phase(), GamePhase::Setup);
        assert!(engine.step(&mut reporter).unwrap().is_some());
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert!(engine.step(&mut reporter).unwrap().is_some());
        assert_eq!(engine.phase(), GamePhase::Playing);

        assert!(engine.step(&mut reporter).unwrap().is_none());
        assert_eq!(engine.phase(), GamePhase::GameOver);
        let events = reporter.events.len();

        assert!(engine.step(&mut reporter).unwrap().is_none());
        assert_eq!(reporter.events.len(), events);
    }

    #[test]
    fn trailing_ties_leave_prize_unclaimed() {
        let input = ScriptedInput::new(["Ada", "1", "2", "3", "4"]);
        let mut engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[1, 2, 3, 4]), in_order())
                .unwrap();
        let summary = engine.run(&mut RecordingReporter::default()).unwrap();

        assert_eq!(summary.human.score, 0);
        assert_eq!(summary.ai.score, 0);
        assert_eq!(summary.ties(), 4);
        assert_eq!(summary.unclaimed, 10);
        let carried: Vec<u32> = summary.rounds.iter().map(|r| r.prize_value).collect();
        assert_eq!(carried, vec![1, 3, 6, 10]);
    }

    #[test]
    fn tie_then_win_awards_the_carried_prize() {
        let input = ScriptedInput::new(["Ada", "2", "4", "1", "3"]);
        let mut engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[2, 1, 4, 3]), in_order())
                .unwrap();
        let summary = engine.run(&mut RecordingReporter::default()).unwrap();

        let outcomes: Vec<RoundOutcome> = summary.rounds.iter().map(|r| r.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                RoundOutcome::Tie,
                RoundOutcome::Win(Seat::Human),
                RoundOutcome::Win(Seat::Ai),
                RoundOutcome::Tie,
            ]
        );
        assert_eq!(summary.human.score, 1 + 2);
        assert_eq!(summary.ai.score, 3);
        assert_eq!(summary.unclaimed, 4);
    }

    #[test]
    fn blank_name_falls_back_to_default() {
        let input = ScriptedInput::new(["   "]);
        let engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[]), in_order()).unwrap();
        assert_eq!(engine.player(Seat::Human).name(), "Player");
        assert_eq!(engine.player(Seat::Ai).name(), "AI");
    }

    #[test]
    fn typed_names_are_cleaned_and_capped() {
        let long = format!("  {}  ", "x".repeat(MAX_NAME_LEN + 8));
        let input = ScriptedInput::new([long]);
        let engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[]), in_order()).unwrap();
        assert_eq!(engine.player(Seat::Human).name(), "x".repeat(MAX_NAME_LEN));

        let input = ScriptedInput::new(["Ad\u{1b}[2Ja\u{7}"]);
        let engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[]), in_order()).unwrap();
        assert_eq!(engine.player(Seat::Human).name(), "Ad[2Ja");

        assert_eq!(sanitize_name("\t\u{0}\n"), None);
        assert_eq!(sanitize_name(" Grace Hopper "), Some("Grace Hopper".into()));
    }

    #[test]
    fn configured_name_skips_the_prompt() {
        let setup = GameSetup {
            player_name: Some("Grace".into()),
            ..GameSetup::default()
        };
        let input = ScriptedInput::new(["4", "3", "2", "1"]);
        let mut engine = GameEngine::setup(setup, input, fixed(&[1, 1, 1, 1]), in_order()).unwrap();
        assert_eq!(engine.player(Seat::Human).name(), "Grace");

        let record = engine
            .step(&mut RecordingReporter::default())
            .unwrap()
            .unwrap();
        assert_eq!(record.human_bid, Card::new(4));
    }

    #[test]
    fn closed_input_aborts_setup_and_play() {
        let err = GameEngine::setup(
            GameSetup::default(),
            ScriptedInput::default(),
            fixed(&[1]),
            in_order(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, GameError::Name(InputError::Closed)));

        let input = ScriptedInput::new(["Ada"]);
        let mut engine =
            GameEngine::setup(GameSetup::default(), input, fixed(&[1]), in_order()).unwrap();
        let err = engine.run(&mut RecordingReporter::default()).unwrap_err();
        assert!(matches!(err, GameError::Round { round: 1, .. }));
        assert_ne!(engine.phase(), GamePhase::GameOver);
    }

    #[test]
    fn invalid_deck_is_rejected() {
        let setup = GameSetup {
            deck: DeckRange { low: 3, high: 1 },
            ..GameSetup::default()
        };
        let err = GameEngine::with_strategies(setup, [fixed(&[]), fixed(&[])], in_order())
            .err()
            .unwrap();
        assert!(matches!(err, GameError::Deck(DeckError::Inverted { .. })));
    }
}
