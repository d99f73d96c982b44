//! Random move selection for computer players.

use crate::error::MoveError;
use crate::{GameEngine, Position};
use rand::Rng;
use tracing::{debug, instrument, warn};

impl GameEngine {
    /// Random draws tried before falling back to a scan: `N² + 1`.
    pub fn sample_attempt_cap(&self) -> usize {
        let size = self.board().size();
        size * size + 1
    }

    /// Picks a uniformly random empty cell.
    ///
    /// Draws `(row, col)` uniformly until an empty cell turns up, giving up
    /// after [`sample_attempt_cap`](Self::sample_attempt_cap) draws and
    /// taking the first empty cell in row-major order instead.
    ///
    /// # Errors
    ///
    /// `GameOver` after a win or draw, `NoLegalMove` if the board is full.
    #[instrument(skip(self, rng), fields(size = self.board().size(), turn = self.turn()))]
    pub fn next_computer_move<R: Rng>(&self, rng: &mut R) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let board = self.board();
        let size = board.size();
        let attempts = self.sample_attempt_cap();

        for attempt in 1..=attempts {
            let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if board.is_empty(pos) {
                debug!(attempt, %pos, "Sampled empty cell");
                return Ok(pos);
            }
        }

        warn!(attempts, "Random sampling exhausted, scanning for first empty cell");
        board
            .positions()
            .find(|pos| board.is_empty(*pos))
            .ok_or(MoveError::NoLegalMove)
    }
}
