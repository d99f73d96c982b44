//! Game engine: board, roster and turn sequencing.
//!
//! The engine owns all state for one game. Callers ask whose turn it is,
//! supply coordinates (read from a terminal or picked by
//! [`GameEngine::next_computer_move`]) and receive the resulting status.
//! No console or file I/O happens here.

use crate::action::{GameStatus, MoveRecord, Outcome, PlayedMove};
use crate::error::{ConfigError, MoveError};
use crate::invariants::{GridInvariants, InvariantSet};
use crate::{Board, Cell, Player, Position, Roster, Symbol, rules};
use tracing::{debug, info, instrument};

/// State of one game: board, roster, turn index, status and move history.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    roster: Roster,
    turn: usize,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl GameEngine {
    /// Creates a game on an empty `size`×`size` board at turn 0.
    ///
    /// # Errors
    ///
    /// Returns `ConfigErrorKind::BoardSize` if `size` is outside 3..=10.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn new(size: usize, roster: Roster) -> Result<Self, ConfigError> {
        let board = Board::new(size)?;
        info!(size, players = roster.len(), "Starting new game");
        Ok(Self {
            board,
            roster,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the turn index.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns every applied move in order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Checks that `(row, col)` is on the board and empty.
    pub fn is_valid_move(&self, row: isize, col: isize) -> bool {
        self.validate(row, col).is_ok()
    }

    /// Like [`is_valid_move`](Self::is_valid_move), but says why a cell is
    /// rejected.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` or `Occupied`.
    pub fn validate(&self, row: isize, col: isize) -> Result<Position, MoveError> {
        let size = self.board.size();
        let pos = Position::from_signed(row, col, size)
            .ok_or(MoveError::OutOfBounds { row, col, size })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(pos)
    }

    /// Places `symbol` at `(row, col)` without touching turn or status.
    ///
    /// Either the cell is filled and the move recorded, or an error is
    /// returned and nothing changes.
    ///
    /// # Errors
    ///
    /// `GameOver` after a win or draw, `UnknownSymbol` if no player owns
    /// `symbol`, and the errors of [`validate`](Self::validate).
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(
        &mut self,
        row: isize,
        col: isize,
        symbol: Symbol,
    ) -> Result<MoveRecord, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let player_index = self
            .roster
            .index_of(symbol)
            .ok_or(MoveError::UnknownSymbol(symbol))?;
        let pos = self.validate(row, col)?;

        self.board.set(pos, Cell::Occupied(symbol));
        let record = MoveRecord::new(player_index, symbol, pos);
        self.history.push(record);
        debug!(%record, "Move applied");

        debug_assert!(
            GridInvariants::check_all(self).is_ok(),
            "Engine invariants violated"
        );
        Ok(record)
    }

    /// Checks if `symbol` fills any row, column or diagonal.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        rules::has_line(&self.board, symbol)
    }

    /// Checks if no empty cell remains.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Roster index that moves on the given turn.
    pub fn active_player_index(&self, turn: usize) -> usize {
        turn % self.roster.len()
    }

    /// Roster index of the player to move now.
    pub fn current_player_index(&self) -> usize {
        self.active_player_index(self.turn)
    }

    /// The player to move now.
    pub fn current_player(&self) -> &Player {
        &self.roster.players()[self.current_player_index()]
    }

    /// Plays one turn for the current player.
    ///
    /// Applies the move, then checks for a win by the mover, then for a
    /// draw. Only a non-terminal move advances the turn index.
    ///
    /// # Errors
    ///
    /// The errors of [`apply_move`](Self::apply_move); the game is
    /// unchanged on error.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, row: isize, col: isize) -> Result<PlayedMove, MoveError> {
        let index = self.current_player_index();
        let symbol = *self.current_player().symbol();
        let record = self.apply_move(row, col, symbol)?;

        self.status = if self.check_win(symbol) {
            info!(player = index + 1, %symbol, "Player completed a line");
            GameStatus::Won(index)
        } else if self.is_draw() {
            info!("Board full, game drawn");
            GameStatus::Draw
        } else {
            self.turn += 1;
            GameStatus::InProgress
        };

        Ok(PlayedMove::new(record, self.status))
    }

    /// Final outcome, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player_index) => Some(Outcome::Won {
                player_index,
                symbol: *self.roster.players()[player_index].symbol(),
            }),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Controller;

    fn two_humans(size: usize) -> GameEngine {
        let roster = Roster::with_default_symbols(&[Controller::Human; 2]).unwrap();
        GameEngine::new(size, roster).unwrap()
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let mut game = two_humans(3);
        game.play(1, 1).unwrap();
        let before = game.board().clone();

        assert_eq!(
            game.play(1, 1),
            Err(MoveError::Occupied(Position::new(1, 1)))
        );
        assert!(matches!(game.play(3, 0), Err(MoveError::OutOfBounds { .. })));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let mut game = two_humans(3);
        assert_eq!(
            game.apply_move(0, 0, Symbol::Z),
            Err(MoveError::UnknownSymbol(Symbol::Z))
        );
        assert_eq!(game.board().occupied(), 0);
    }

    #[test]
    fn test_apply_move_does_not_advance_turn() {
        let mut game = two_humans(3);
        let record = game.apply_move(2, 0, Symbol::O).unwrap();
        assert_eq!(*record.player_index(), 1);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let mut game = two_humans(3);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(0));
        assert_eq!(game.turn(), 4);

        assert_eq!(game.play(2, 2), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(2, 2, Symbol::O), Err(MoveError::GameOver));
        assert_eq!(game.turn(), 4);
    }

    #[test]
    fn test_outcome_names_winner() {
        let mut game = two_humans(3);
        assert_eq!(game.outcome(), None);
        for (row, col) in [(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(
            game.outcome(),
            Some(Outcome::Won {
                player_index: 1,
                symbol: Symbol::O
            })
        );
    }
}
