use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use goofspiel_app::config::GameConfig;
use goofspiel_app::console::{ConsoleInput, ConsoleReporter};
use goofspiel_app::logging::{describe, init_logging};
use goofspiel_app::session::{play_game, write_summary};
use goofspiel_core::AppInfo;

/// Bid your cards against a random AI for prize cards.
#[derive(Debug, Parser)]
#[command(name = "goofspiel", author, version = AppInfo::version(), about = "Two-player bidding card game")]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed prize draws and AI bids for a reproducible game.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Lowest card value in the deck.
    #[arg(long, value_name = "N")]
    low: Option<u8>,

    /// Highest card value in the deck (at most 13).
    #[arg(long, value_name = "N")]
    high: Option<u8>,

    /// Use this name instead of prompting for one.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Write the final game summary as JSON.
    #[arg(long, value_name = "FILE")]
    summary_json: Option<PathBuf>,

    /// Exit after validating the configuration (no game is played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(low) = cli.low {
        config.deck.low = low;
    }

    if let Some(high) = cli.high {
        config.deck.high = high;
    }

    if let Some(name) = cli.name {
        config.player_name = Some(name);
    }

    config.validate().context("invalid settings")?;

    if cli.validate_only {
        println!(
            "Configuration valid: deck {}..={}, AI '{}' ({})",
            config.deck.low,
            config.deck.high,
            config.ai_name,
            config.bot_kind()?
        );
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging)?;

    let input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut reporter = ConsoleReporter::new(io::stdout());
    let summary = play_game(&config, input, &mut reporter)?;

    if let Some(path) = cli.summary_json.as_ref() {
        write_summary(&summary, path)?;
        println!("\nSummary written to {}", path.display());
    }

    if let Some(path) = describe(&logging_guard) {
        println!("Structured logs written to {}", path.display());
    }

    Ok(())
}
