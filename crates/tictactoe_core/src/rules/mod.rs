//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from game state so
//! the search engine can evaluate boards it mutates in place.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, has_won};

use super::{Board, GameStatus, Player};

/// Terminal evaluation after `last` has moved.
///
/// A completed line for `last` wins; otherwise a full board is a draw.
/// Win takes precedence over draw.
pub fn evaluate(board: &Board, last: Player) -> GameStatus {
    if has_won(board, last) {
        GameStatus::Won(last)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Status derived from the board alone, without knowing who moved last.
pub fn derive_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(winner) => GameStatus::Won(winner),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_beats_full_board() {
        // X completes the left column on the last square.
        let board: Board = "XOO|XXO|XOX".parse().unwrap();
        assert_eq!(evaluate(&board, Player::X), GameStatus::Won(Player::X));
        assert_eq!(derive_status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_evaluate_only_credits_last_mover() {
        let board: Board = "XXX|.OO|...".parse().unwrap();
        assert_eq!(evaluate(&board, Player::O), GameStatus::InProgress);
        assert_eq!(evaluate(&board, Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert_eq!(evaluate(&board, Player::X), GameStatus::Draw);
        assert_eq!(evaluate(&board, Player::O), GameStatus::Draw);
        assert_eq!(derive_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(derive_status(&Board::new()), GameStatus::InProgress);
    }
}
