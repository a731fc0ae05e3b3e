//! Authoritative game state for tic-tac-toe.

use super::action::{Move, MoveError};
use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state: the board, the next mover and the cached status.
///
/// All mutation goes through [`GameState::apply_move`] and
/// [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places `mark` at `index` (0-8).
    ///
    /// Rejections, in the order they are checked: the game is over, the
    /// index is off the board, the square is taken, `mark` is not the next
    /// mover. A rejected move leaves the state untouched.
    ///
    /// On success the square is filled, the terminal status is evaluated
    /// with `mark` as the last mover, and the turn passes to the opponent.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize, mark: Player) -> Result<GameStatus, MoveError> {
        let action = Move::new(mark, index);
        let pos = LegalMove::check(&action, self)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Square::Occupied(mark));
        self.status = self.check_terminal(mark);
        self.to_move = mark.opponent();

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        debug!(%action, status = ?self.status, "Move applied");
        if self.status.is_terminal() {
            info!(status = ?self.status, "Game over");
        }
        Ok(self.status)
    }

    /// Plays the next mover's mark at `pos`.
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.apply_move(pos.to_index(), self.to_move)
    }

    /// Terminal status of the current board after `last` moved.
    ///
    /// `Won(last)` if `last` owns a full line, else `Draw` if no square is
    /// empty, else `InProgress`.
    pub fn check_terminal(&self, last: Player) -> GameStatus {
        rules::evaluate(&self.board, last)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_center() {
        let mut game = GameState::new();
        let status = game.apply_move(4, Player::X).expect("legal move");

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.board().empty_positions().count(), 8);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut game = GameState::new();
        game.apply_move(4, Player::X).expect("legal move");
        let snapshot = game.clone();

        assert_eq!(game.apply_move(4, Player::O), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(game.apply_move(12, Player::O), Err(MoveError::InvalidIndex(12)));
        assert_eq!(game.apply_move(0, Player::X), Err(MoveError::NotYourTurn(Player::X)));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_turn_flips_on_final_move() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4] {
            game.apply_move(index, game.to_move()).expect("legal move");
        }
        let status = game.apply_move(2, Player::X).expect("winning move");
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(game.to_move(), Player::O);
        assert!(!game.is_active());
    }

    #[test]
    fn test_place_uses_next_mover() {
        let mut game = GameState::new();
        game.place(Position::Center).expect("legal move");
        game.place(Position::TopLeft).expect("legal move");
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_check_terminal_top_row() {
        let mut game = GameState::new();
        game.board = "XXX|.OO|...".parse().unwrap();
        assert_eq!(game.check_terminal(Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index, game.to_move()).expect("legal move");
        }
        game.reset();
        assert_eq!(game, GameState::new());
        assert!(game.apply_move(0, Player::X).is_ok());
    }

    #[test]
    fn test_state_serializes() {
        let mut game = GameState::new();
        game.apply_move(4, Player::X).expect("legal move");
        let json = serde_json::to_string(&game).expect("serializable");
        let back: GameState = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, game);
    }
}
