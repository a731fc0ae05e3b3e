//! Monotonic board invariant: squares never change once set.

use super::super::{GameState, Square};
use super::Invariant;

/// A game state before and after one accepted move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State before the move.
    pub before: &'a GameState,
    /// State after the move.
    pub after: &'a GameState,
}

impl<'a> Transition<'a> {
    /// Pairs two states.
    pub fn new(before: &'a GameState, after: &'a GameState) -> Self {
        Self { before, after }
    }
}

/// Invariant: Exactly one empty square was filled, nothing else changed.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let mut filled = 0;

        for (before, after) in transition
            .before
            .board()
            .squares()
            .iter()
            .zip(transition.after.board().squares())
        {
            match (before, after) {
                (b, a) if b == a => {}
                (Square::Empty, Square::Occupied(_)) => filled += 1,
                _ => return false,
            }
        }

        filled == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (exactly one square filled per move)"
    }
}
