//! Error types for game setup and move application.

use crate::{Position, Symbol};
use derive_more::{Display, Error};
use tracing::instrument;

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 10;

/// What was wrong with a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board edge outside the supported range.
    #[display(
        "Board size {} is outside {}..={}",
        _0,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    BoardSize(usize),

    /// Roster does not hold 2 or 3 players.
    #[display("Roster must hold 2 or 3 players, got {}", _0)]
    RosterSize(usize),

    /// Symbol would render like an empty cell.
    #[display("Symbol {:?} is blank", _0.as_char())]
    BlankSymbol(Symbol),

    /// Two players share a symbol.
    #[display("Symbol {} is used by more than one player", _0)]
    DuplicateSymbol(Symbol),

    /// Stored cells do not fill the board.
    #[display("Board of size {} needs {} cells, got {}", size, expected, found)]
    CellCount {
        /// Board edge.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },

    /// Mode number not in the menu.
    #[display("Mode {} is not one of 1, 2, 3", _0)]
    Mode(u8),

    /// Wrong number of per-player controllers supplied.
    #[display("Expected {} player controllers, got {}", expected, found)]
    ControllerCount {
        /// Controllers the mode needs.
        expected: usize,
        /// Controllers supplied.
        found: usize,
    },
}

/// Configuration error with location tracking.
///
/// Raised before any game state exists, so a failed construction never
/// leaves a partial engine behind.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

/// Error that can occur when validating or applying a move.
///
/// A rejected move never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Board edge.
        size: usize,
    },

    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),

    /// The symbol belongs to no player in the roster.
    #[display("Symbol {} is not in the roster", _0)]
    UnknownSymbol(Symbol),

    /// The game already reached a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// No empty cell is left to play.
    #[display("No legal move left on the board")]
    NoLegalMove,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_records_location() {
        let err = ConfigError::new(ConfigErrorKind::BoardSize(11));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("Board size 11"));
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds {
            row: -1,
            col: 0,
            size: 3,
        };
        assert_eq!(err.to_string(), "(-1, 0) is outside the 3x3 board");
    }
}
