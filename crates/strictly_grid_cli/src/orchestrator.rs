//! Turn loop between the engine, the terminal and the move log.

use crate::move_log::MoveLog;
use crate::prompt::Prompter;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use strictly_grid::{GameEngine, Outcome, Position};
use tracing::{debug, info, instrument};

/// Runs one game to completion.
///
/// Each turn shows the board, gets a move from the prompter (humans) or the
/// engine's random picker (computers), plays it, logs it and stops on a win
/// or draw.
pub struct Orchestrator<R, W, L, G> {
    engine: GameEngine,
    prompter: Prompter<R, W>,
    log: MoveLog<L>,
    rng: G,
}

impl<R, W, L, G> Orchestrator<R, W, L, G>
where
    R: BufRead,
    W: Write,
    L: Write,
    G: Rng,
{
    /// Creates an orchestrator for a freshly configured game.
    pub fn new(engine: GameEngine, prompter: Prompter<R, W>, log: MoveLog<L>, rng: G) -> Self {
        Self {
            engine,
            prompter,
            log,
            rng,
        }
    }

    /// Returns the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs the game loop until a win or draw.
    #[instrument(skip(self), fields(size = self.engine.board().size()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game loop");

        loop {
            self.show_board()?;

            let index = self.engine.current_player_index();
            let player = *self.engine.current_player();
            let pos = if player.controller().is_computer() {
                let pos = self.engine.next_computer_move(&mut self.rng)?;
                writeln!(
                    self.prompter.output(),
                    "Player {} ({}) moved at {}",
                    index + 1,
                    player.symbol(),
                    pos
                )?;
                pos
            } else {
                debug!(player = index + 1, "Waiting for human move");
                self.prompter.human_move(&self.engine)?
            };

            let played = self.play(pos)?;
            self.log.record(played.record())?;

            if let Some(outcome) = self.engine.outcome() {
                self.show_board()?;
                writeln!(self.prompter.output(), "{}", outcome)?;
                info!(%outcome, turns = self.engine.history().len(), "Game over");
                return Ok(outcome);
            }
        }
    }

    /// Plays a validated cell for the current player.
    fn play(&mut self, pos: Position) -> Result<strictly_grid::PlayedMove> {
        let row = isize::try_from(pos.row())?;
        let col = isize::try_from(pos.col())?;
        Ok(self.engine.play(row, col)?)
    }

    fn show_board(&mut self) -> Result<()> {
        let board = self.engine.board().display();
        let out = self.prompter.output();
        writeln!(out, "\nCurrent board:")?;
        writeln!(out, "{}", board)?;
        Ok(())
    }

    /// Consumes the orchestrator, returning the engine, prompter and move log.
    pub fn into_parts(self) -> (GameEngine, Prompter<R, W>, MoveLog<L>) {
        (self.engine, self.prompter, self.log)
    }
}
