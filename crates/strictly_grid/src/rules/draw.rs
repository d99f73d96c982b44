//! Draw detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// The engine only consults this after ruling out a win for the mover.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
