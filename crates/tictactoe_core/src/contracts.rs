//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    Transition,
};
use super::{GameState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not been won or drawn.
pub struct GameIsActive;

impl GameIsActive {
    /// Rejects with `GameNotActive` once the game is over.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameNotActive)
        }
    }
}

/// Precondition: The index names a square on the board.
pub struct IndexOnBoard;

impl IndexOnBoard {
    /// Resolves the move's index to a position.
    pub fn check(mov: &Move) -> Result<Position, MoveError> {
        mov.position().ok_or(MoveError::InvalidIndex(mov.index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with `CellOccupied` if the square is taken.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects with `NotYourTurn` if the mark is not the next mover.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn(mov.player))
        }
    }
}

/// Composite precondition, checked in rejection order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<Position, MoveError> {
        GameIsActive::check(game)?;
        let pos = IndexOnBoard::check(mov)?;
        SquareIsEmpty::check(pos, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is active
/// - Index is on the board
/// - Square is empty
/// - Mark is the next mover
///
/// Postconditions:
/// - Exactly one square was filled
/// - Players still alternate
/// - Cached status matches the board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut violations = match GameStateInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !MonotonicBoardInvariant::holds(&Transition::new(before, after)) {
            violations.push(InvariantViolation::new(
                MonotonicBoardInvariant::description(),
            ));
        }

        if violations.is_empty() {
            return Ok(());
        }

        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Move postcondition failed");
        Err(MoveError::InvariantViolation(format!(
            "Postcondition failed: {}",
            descriptions
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Move::new(Player::X, 4)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(4, Player::X).expect("legal move");
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Player::O, 4)),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_index_off_board() {
        let game = GameState::new();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Player::X, 9)),
            Err(MoveError::InvalidIndex(9))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameState::new();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Player::O, 4)),
            Err(MoveError::NotYourTurn(Player::O))
        );
    }

    #[test]
    fn test_inactive_game_rejected_before_index_check() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index, game.to_move()).expect("legal move");
        }
        assert_eq!(
            MoveContract::pre(&game, &Move::new(Player::O, 42)),
            Err(MoveError::GameNotActive)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4, Player::X).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4, Player::X).expect("legal move");
        after.board.set(Position::TopLeft, Square::Occupied(Player::O));

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
    }
}
