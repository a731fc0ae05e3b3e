//! Status consistency invariant: the cached status matches the board.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: The cached status equals the status derived from the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.status() == rules::derive_status(game.board())
    }

    fn description() -> &'static str {
        "Cached status matches the board"
    }
}
