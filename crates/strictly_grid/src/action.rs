//! Moves, statuses and outcomes.
//!
//! Moves are domain events: the engine records one per applied move and
//! hands it back so the caller can display or log it.

use crate::{Position, Symbol};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct MoveRecord {
    /// Zero-based roster index of the mover.
    player_index: usize,
    /// Mark placed.
    symbol: Symbol,
    /// Cell filled.
    position: Position,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} ({}) moved at {}",
            self.player_index + 1,
            self.symbol,
            self.position
        )
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// The player at this roster index completed a line.
    Won(usize),
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won {
        /// Zero-based roster index of the winner.
        player_index: usize,
        /// Winner's mark.
        symbol: Symbol,
    },
    /// No line and no empty cell.
    Draw,
}

impl Outcome {
    /// Returns the winner's roster index if there is one.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Won { player_index, .. } => Some(*player_index),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won {
                player_index,
                symbol,
            } => write!(f, "Player {} ({}) wins!", player_index + 1, symbol),
            Outcome::Draw => write!(f, "Game is a draw!"),
        }
    }
}

/// Result of one turn: the move made and the status it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PlayedMove {
    /// The applied move.
    record: MoveRecord,
    /// Status after the move.
    status: GameStatus,
}

impl PlayedMove {
    pub(crate) fn new(record: MoveRecord, status: GameStatus) -> Self {
        Self { record, status }
    }
}
