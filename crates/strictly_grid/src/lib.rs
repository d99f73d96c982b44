//! Strictly Grid - pure N×N grid game logic
//!
//! Generalized tic-tac-toe for 2 or 3 players on a board from 3×3 up to
//! 10×10. A player wins by filling a whole row, column or diagonal with
//! their symbol; a full board without a line is a draw.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameEngine, GameMode, GameStatus};
//!
//! let roster = GameMode::HumanVsHuman.roster(None)?;
//! let mut game = GameEngine::new(3, roster)?;
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play(row, col)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod computer;
mod engine;
mod error;
pub mod invariants;
mod position;
mod roster;
pub mod rules;
mod types;

pub use action::{GameStatus, MoveRecord, Outcome, PlayedMove};
pub use engine::GameEngine;
pub use error::{ConfigError, ConfigErrorKind, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MoveError};
pub use position::Position;
pub use roster::{GameMode, Roster};
pub use types::{Board, Cell, Controller, Player, Symbol};
