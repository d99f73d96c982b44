//! Builds a game engine from settings, prompting for anything missing.

use crate::prompt::Prompter;
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_grid::{Board, Controller, GameEngine, GameMode, Symbol};
use tracing::{info, instrument};

/// Resolves board size, mode and controllers, then creates the engine.
///
/// Values present in `settings` are used as-is; the rest are read through
/// `prompter` in the order the menu asks for them. A bad size or mode is
/// fatal.
#[instrument(skip_all)]
pub fn configure<R: BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<GameEngine> {
    let size = match settings.board_size() {
        Some(size) => *size,
        None => prompter.board_size()?,
    };
    // Reject a bad size before asking anything else.
    Board::new(size).context("Invalid board size")?;

    let number = match settings.mode() {
        Some(mode) => *mode,
        None => prompter.mode()?,
    };
    let mode = GameMode::try_from(number).context("Invalid mode")?;

    let assigned = match (mode.preset_controllers(), settings.players()) {
        (Some(_), _) => None,
        (None, Some(players)) => Some(players.clone()),
        (None, None) => Some(ask_controllers(mode, prompter)?),
    };

    let roster = mode
        .roster(assigned.as_deref())
        .context("Invalid player setup")?;
    let engine = GameEngine::new(size, roster).context("Invalid board size")?;
    info!(size, %mode, "Game configured");
    Ok(engine)
}

fn ask_controllers<R: BufRead, W: Write>(
    mode: GameMode,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<Controller>> {
    Symbol::DEFAULTS
        .into_iter()
        .take(mode.player_count())
        .enumerate()
        .map(|(index, symbol)| prompter.controller(index, symbol))
        .collect()
}
