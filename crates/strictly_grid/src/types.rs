//! Core domain types for the grid game.

use crate::error::{ConfigError, ConfigErrorKind, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Single-character mark identifying a player on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct Symbol(char);

impl Symbol {
    /// First player's default mark.
    pub const X: Symbol = Symbol('X');
    /// Second player's default mark.
    pub const O: Symbol = Symbol('O');
    /// Third player's default mark.
    pub const Z: Symbol = Symbol('Z');

    /// Default marks handed out in roster order.
    pub const DEFAULTS: [Symbol; 3] = [Symbol::X, Symbol::O, Symbol::Z];

    /// Wraps a character as a symbol.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's symbol.
    Occupied(Symbol),
}

/// Who decides a player's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Controller {
    /// Moves typed at the terminal.
    Human,
    /// Moves picked at random among empty cells.
    Computer,
}

impl Controller {
    /// Returns true for computer-controlled players.
    pub fn is_computer(self) -> bool {
        matches!(self, Controller::Computer)
    }
}

/// A participant: display symbol plus controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Mark placed on the board.
    symbol: Symbol,
    /// Human or computer.
    controller: Controller,
}

/// N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardData {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = ConfigError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let mut board = Board::new(data.size)?;
        if data.cells.len() != board.cells.len() {
            return Err(ConfigError::new(ConfigErrorKind::CellCount {
                size: data.size,
                expected: board.cells.len(),
                found: data.cells.len(),
            }));
        }
        board.cells = data.cells;
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns `ConfigErrorKind::BoardSize` if `size` is outside 3..=10.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::new(ConfigErrorKind::BoardSize(size)));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row() >= self.size || pos.col() >= self.size {
            return None;
        }
        self.cells.get(pos.index(self.size)).copied()
    }

    /// Checks if a position is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Writes a cell. Callers validate bounds and emptiness first.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let idx = pos.index(self.size);
        self.cells[idx] = cell;
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Formats the board for the terminal.
    ///
    /// ```text
    ///  X | O |
    /// ---+---+---
    /// ```
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let mark = match self.cells[row * self.size + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(symbol) => symbol.as_char(),
                };
                result.push(' ');
                result.push(mark);
                result.push(' ');
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            result.push('\n');
            if row < self.size - 1 {
                let separator = vec!["---"; self.size].join("+");
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(Board::new(2).is_err());
        assert!(Board::new(3).is_ok());
        assert!(Board::new(10).is_ok());
        assert!(matches!(
            Board::new(11).map_err(|e| e.kind),
            Err(ConfigErrorKind::BoardSize(11))
        ));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cells().len(), 16);
        assert_eq!(board.occupied(), 0);
        assert!(board.positions().all(|pos| board.is_empty(pos)));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert!(!board.is_empty(Position::new(0, 3)));
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new(3).unwrap();
        board.set(Position::new(0, 0), Cell::Occupied(Symbol::X));
        board.set(Position::new(1, 1), Cell::Occupied(Symbol::O));
        let expected = " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n";
        assert_eq!(board.display(), expected);
    }

    #[test]
    fn test_deserialize_validates_board() {
        let json = serde_json::to_string(&Board::new(3).unwrap()).unwrap();
        let board: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board.size(), 3);

        let err = serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("Board size 0"));

        let err = serde_json::from_str::<Board>(r#"{"size":3,"cells":["Empty"]}"#).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells, got 1"));
    }

    #[test]
    fn test_controller_parses_case_insensitive() {
        assert_eq!("Computer".parse::<Controller>().unwrap(), Controller::Computer);
        assert_eq!(Controller::Human.to_string(), "human");
    }
}
