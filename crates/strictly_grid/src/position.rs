//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A zero-based (row, column) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", row, col)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts signed input coordinates, rejecting anything off a
    /// `size`×`size` board.
    pub fn from_signed(row: isize, col: isize, size: usize) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < size && col < size).then_some(Self { row, col })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index on a board of the given edge.
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_bounds() {
        assert_eq!(Position::from_signed(0, 0, 3), Some(Position::new(0, 0)));
        assert_eq!(Position::from_signed(2, 2, 3), Some(Position::new(2, 2)));
        assert_eq!(Position::from_signed(-1, 0, 3), None);
        assert_eq!(Position::from_signed(0, -1, 3), None);
        assert_eq!(Position::from_signed(3, 0, 3), None);
        assert_eq!(Position::from_signed(0, 3, 3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
    }
}
