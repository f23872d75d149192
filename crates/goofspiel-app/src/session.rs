use anyhow::{Context, Result};
use goofspiel_core::game::engine::GameEngine;
use goofspiel_core::game::io::{InputSource, Reporter};
use goofspiel_core::game::serialization::GameSummary;
use goofspiel_core::model::random::SeededRandom;
use std::fs;
use std::path::Path;

use crate::config::GameConfig;

/// Offset between the prize-draw stream and the AI's stream for one seed.
const AI_SEED_OFFSET: u64 = 1;

/// Plays one full game: setup, every round, final score.
pub fn play_game<I>(
    config: &GameConfig,
    input: I,
    reporter: &mut dyn Reporter,
) -> Result<GameSummary>
where
    I: InputSource + 'static,
{
    let bot = config.bot_kind()?.build(ai_seed(config.seed));
    let prizes = SeededRandom::from_optional_seed(config.seed);

    let mut engine = GameEngine::setup(config.game_setup(), input, bot, prizes)?;
    let summary = engine.run(reporter)?;
    Ok(summary)
}

fn ai_seed(seed: Option<u64>) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(AI_SEED_OFFSET))
}

pub fn write_summary(summary: &GameSummary, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating summary directory at {}", dir.display()))?;
    }
    let json = summary.to_json().context("serializing game summary")?;
    fs::write(path, json).with_context(|| format!("writing summary to {}", path.display()))?;
    Ok(())
}
