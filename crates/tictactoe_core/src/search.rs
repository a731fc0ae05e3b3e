//! Exhaustive minimax search.
//!
//! Scores are absolute, not relative to the mover: O is always the
//! maximizing player and X the minimizing one, whichever mark the computer
//! plays. The whole game tree is searched; there is no pruning.
//!
//! One board is shared down the recursion. Each candidate is placed,
//! searched and then cleared again before the next candidate is tried, so
//! sibling branches always start from the same position.

use super::rules::{has_won, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position under optimal play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Score {
    /// X forces a win.
    XWins = -1,
    /// Neither side can force a win.
    Draw = 0,
    /// O forces a win.
    OWins = 1,
}

impl Score {
    /// Numeric value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// The player this score favors, `None` for a draw.
    pub fn favors(self) -> Option<Player> {
        match self {
            Score::XWins => Some(Player::X),
            Score::Draw => None,
            Score::OWins => Some(Player::O),
        }
    }

    /// Returns true if `self` is strictly better than `other` for `mark`.
    fn improves_on(self, other: Score, mark: Player) -> bool {
        match mark {
            Player::O => self > other,
            Player::X => self < other,
        }
    }
}

/// The move chosen by the search and the value it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    /// Square to play, `None` when the searched board was already terminal.
    pub position: Option<Position>,
    /// Value of the position after playing `position`.
    pub score: Score,
}

impl BestMove {
    /// Board index of the chosen square.
    pub fn index(&self) -> Option<usize> {
        self.position.map(Position::to_index)
    }

    fn leaf(score: Score) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Outcome of a search with its node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The selected move.
    pub best: BestMove,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Returns the optimal move for `mark` on `board`.
///
/// Ties between equally scored squares go to the lowest index. The caller's
/// board is copied and never modified.
pub fn best_move(board: &Board, mark: Player) -> BestMove {
    search(board, mark).best
}

/// Like [`best_move`], also reporting how many positions were visited.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn search(board: &Board, mark: Player) -> SearchReport {
    let mut scratch = *board;
    let mut nodes = 0;
    let best = minimax(&mut scratch, mark, &mut nodes);
    debug!(?best, nodes, "Search complete");
    SearchReport { best, nodes }
}

fn minimax(board: &mut Board, mark: Player, nodes: &mut u64) -> BestMove {
    *nodes += 1;

    if has_won(board, Player::O) {
        return BestMove::leaf(Score::OWins);
    }
    if has_won(board, Player::X) {
        return BestMove::leaf(Score::XWins);
    }
    if is_full(board) {
        return BestMove::leaf(Score::Draw);
    }

    let mut best = BestMove::leaf(Score::Draw);
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(mark));
        let reply = minimax(board, mark.opponent(), nodes);
        board.set(pos, Square::Empty);

        if best.position.is_none() || reply.score.improves_on(best.score, mark) {
            best = BestMove {
                position: Some(pos),
                score: reply.score,
            };
        }
    }

    best
}
