//! Line-oriented replay scripts.
//!
//! A script drives a [`Game`] the way an interactive caller would:
//!
//! ```text
//! # two 2s in the bottom row
//! add 0 0 2
//! add 3 0 2
//! tilt left
//! show
//! ```
//!
//! Commands: `add <col> <row> <value>`, `tilt <direction>` (or a bare
//! direction name), `clear`, `show`. Blank lines and `#` comments are ignored.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::core::{parse_direction, Game};
use crate::types::{Direction, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayCommand {
    Add(Tile),
    Tilt(Direction),
    Clear,
    Show,
}

/// Totals gathered while replaying a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub commands: usize,
    pub tilts: usize,
    /// Tilts that left the board unchanged
    pub idle_tilts: usize,
    pub merges: u32,
}

fn parse_field<T: std::str::FromStr>(value: Option<&str>, name: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing {}", name))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {}: {}", name, v))
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_command(line: &str) -> Result<Option<ReplayCommand>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let command = match verb.to_lowercase().as_str() {
        "add" => {
            let col = parse_field(words.next(), "column")?;
            let row = parse_field(words.next(), "row")?;
            let value = parse_field(words.next(), "value")?;
            ReplayCommand::Add(Tile::new(value, col, row))
        }
        "tilt" => {
            let name = words.next().ok_or_else(|| anyhow!("missing direction"))?;
            ReplayCommand::Tilt(parse_direction(name)?)
        }
        "clear" => ReplayCommand::Clear,
        "show" => ReplayCommand::Show,
        other => ReplayCommand::Tilt(
            parse_direction(other).map_err(|_| anyhow!("unknown command: {}", other))?,
        ),
    };

    if let Some(extra) = words.next() {
        return Err(anyhow!("unexpected argument: {}", extra));
    }
    Ok(Some(command))
}

/// Apply a single command to `game`, writing any rendering to `out`
pub fn apply_command<W: Write>(
    game: &mut Game,
    command: ReplayCommand,
    summary: &mut ReplaySummary,
    out: &mut W,
) -> Result<()> {
    match command {
        ReplayCommand::Add(tile) => {
            game.add_tile(tile)?;
        }
        ReplayCommand::Tilt(direction) => {
            let outcome = game.tilt(direction);
            summary.tilts += 1;
            summary.merges += outcome.merges;
            if !outcome.changed {
                summary.idle_tilts += 1;
            }
            info!(
                "tilt {}: changed={} +{} (score {})",
                direction.as_str(),
                outcome.changed,
                outcome.score_delta,
                outcome.state.score
            );
        }
        ReplayCommand::Clear => game.clear(),
        ReplayCommand::Show => write!(out, "{}", game)?,
    }
    summary.commands += 1;
    Ok(())
}

/// Replay every line of `reader` against `game`.
///
/// Stops at the first failing line; the error names the line number.
pub fn run_script<R: BufRead, W: Write>(
    game: &mut Game,
    reader: R,
    out: &mut W,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading line {}", lineno))?;
        let Some(command) = parse_command(&line).with_context(|| format!("line {}", lineno))?
        else {
            continue;
        };
        apply_command(game, command, &mut summary, out)
            .with_context(|| format!("line {}: {}", lineno, line.trim()))?;
    }
    Ok(summary)
}
