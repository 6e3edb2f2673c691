//! Hot-seat terminal game.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use round_table::{GameConfig, RoundTableGameBuilder, TerminalView, TurnController};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "round-table", about = "Play the quest card game in the terminal")]
struct Args {
    /// Number of players (2-8).
    #[arg(short, long)]
    players: Option<usize>,

    /// RNG seed for a reproducible game.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file. Command-line flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json_str(&json)?
        }
        None => GameConfig::default(),
    };
    if let Some(players) = args.players {
        config.player_count = players;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let game = RoundTableGameBuilder::new().config(config).build()?;
    tracing::info!(seed = game.seed(), "starting game");

    let mut controller = TurnController::new(game, TerminalView::stdio());
    controller.run()?;
    Ok(())
}
