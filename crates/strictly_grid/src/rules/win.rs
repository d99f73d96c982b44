//! Win detection.

use crate::{Board, Cell, Position, Symbol};
use tracing::instrument;

/// Checks if `symbol` fills a whole row, column or diagonal.
///
/// Scans the full board: row `i` and column `i` are tested together for
/// each `i`, then both diagonals once.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_line(board: &Board, symbol: Symbol) -> bool {
    let n = board.size();
    let owns =
        |row: usize, col: usize| board.get(Position::new(row, col)) == Some(Cell::Occupied(symbol));

    for i in 0..n {
        let mut row_win = true;
        let mut col_win = true;
        for j in 0..n {
            if !owns(i, j) {
                row_win = false;
            }
            if !owns(j, i) {
                col_win = false;
            }
        }
        if row_win || col_win {
            return true;
        }
    }

    let mut diag = true;
    let mut anti_diag = true;
    for i in 0..n {
        if !owns(i, i) {
            diag = false;
        }
        if !owns(i, n - 1 - i) {
            anti_diag = false;
        }
    }
    diag || anti_diag
}
