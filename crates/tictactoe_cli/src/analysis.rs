//! One-shot board analysis for the `best` command.

use serde::Serialize;
use tictactoe_core::{Board, Player, Position, search};
use tracing::instrument;

/// Search result as printed to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Mark that was searched for.
    pub mark: Player,
    /// Chosen square, absent for a finished board.
    pub position: Option<Position>,
    /// Chosen square as a 0-based index.
    pub index: Option<usize>,
    /// -1 (X wins), 0 (draw) or 1 (O wins).
    pub score: i8,
    /// Positions visited.
    pub nodes: u64,
}

/// Searches `board` for `mark`.
#[instrument(skip(board))]
pub fn analyze(board: &Board, mark: Player) -> Analysis {
    let report = search::search(board, mark);
    Analysis {
        board: board.notation(),
        mark,
        position: report.best.position,
        index: report.best.index(),
        score: report.best.score.value(),
        nodes: report.nodes,
    }
}
