//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// With X to move both players have the same number of marks; with O to
/// move X has exactly one more. The next mover flips after every accepted
/// move, including the one that ends the game.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        match game.to_move() {
            Player::X => x_count == o_count,
            Player::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
