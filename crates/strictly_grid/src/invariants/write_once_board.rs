//! Write-once board invariant: cells never change once filled.

use super::Invariant;
use crate::{Board, Cell, GameEngine};

/// Invariant: replaying the move history onto an empty board never
/// overwrites a cell and reproduces the current board.
pub struct WriteOnceBoard;

impl Invariant<GameEngine> for WriteOnceBoard {
    fn holds(game: &GameEngine) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().size()) else {
            return false;
        };

        for record in game.history() {
            let pos = *record.position();
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Cell::Occupied(*record.symbol()));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are write-once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Controller, Position, Roster, Symbol};

    fn engine() -> GameEngine {
        let roster = Roster::with_default_symbols(&[Controller::Human; 3]).unwrap();
        GameEngine::new(4, roster).unwrap()
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(WriteOnceBoard::holds(&engine()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = engine();
        game.play(0, 0).unwrap();
        game.play(3, 3).unwrap();
        game.play(1, 2).unwrap();
        assert!(WriteOnceBoard::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = engine();
        game.play(2, 2).unwrap();
        game.board.set(Position::new(2, 2), Cell::Occupied(Symbol::Z));
        assert!(!WriteOnceBoard::holds(&game));
    }
}
