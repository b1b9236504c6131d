//! 2048 replay runner (default binary).
//!
//! Reads a replay script from a file (or stdin), drives a game with it and
//! prints the final board. Logging goes through `env_logger`; set `RUST_LOG`
//! to `debug` or `trace` to follow every tilt.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use game2048::core::{Game, GameConfig};
use game2048::replay::run_script;

#[derive(Debug, Parser)]
#[command(author, version, about = "Replay a 2048 move script and print the board")]
struct Cli {
    /// Script to replay (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Board side length (overrides GAME2048_SIZE)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Winning tile value (overrides GAME2048_MAX_PIECE)
    #[arg(long, value_name = "VALUE")]
    max_piece: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_env_with(cli.size, cli.max_piece)
        .context("resolving config from flags and environment")?;
    let mut game = Game::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run_script(&mut game, BufReader::new(file), &mut out)?
        }
        None => run_script(&mut game, io::stdin().lock(), &mut out)?,
    };

    write!(out, "{}", game)?;
    out.flush()?;

    info!(
        "replayed {} commands: {} tilts ({} idle), {} merges, score {}, max {}, top tile {}",
        summary.commands,
        summary.tilts,
        summary.idle_tilts,
        summary.merges,
        game.score(),
        game.max_score(),
        game.board().max_value().unwrap_or(0)
    );
    Ok(())
}
