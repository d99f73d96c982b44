//! History/board agreement: one recorded move per occupied cell.

use super::Invariant;
use crate::GameEngine;

/// Invariant: the number of occupied cells equals the number of recorded
/// moves.
pub struct HistoryMatchesBoard;

impl Invariant<GameEngine> for HistoryMatchesBoard {
    fn holds(game: &GameEngine) -> bool {
        game.board().occupied() == game.history().len()
    }

    fn description() -> &'static str {
        "Occupied cells match move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Controller, Position, Roster, Symbol};

    #[test]
    fn test_extra_cell_violates() {
        let roster = Roster::with_default_symbols(&[Controller::Human; 2]).unwrap();
        let mut game = GameEngine::new(3, roster).unwrap();
        game.apply_move(0, 0, Symbol::X).unwrap();
        assert!(HistoryMatchesBoard::holds(&game));

        game.board.set(Position::new(2, 2), Cell::Occupied(Symbol::O));
        assert!(!HistoryMatchesBoard::holds(&game));
    }
}
