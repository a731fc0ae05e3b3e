//! Computer player backed by the minimax search.

use super::Player;
use crate::input::InputEvent;
use anyhow::Result;
use std::time::Duration;
use tictactoe_core::{GameState, search};
use tracing::debug;

/// Plays the optimal move after a short pause.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that waits `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, game: &GameState) -> Result<InputEvent> {
        debug!(player = %self.name, "Computer thinking");
        tokio::time::sleep(self.delay).await;

        let report = search::search(game.board(), game.to_move());
        let Some(index) = report.best.index() else {
            anyhow::bail!("No valid moves available");
        };

        debug!(player = %self.name, index, score = ?report.best.score, nodes = report.nodes, "Computer chose move");
        Ok(InputEvent::Cell(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
