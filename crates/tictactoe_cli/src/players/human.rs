//! Human player fed by keyboard input.

use super::Player;
use crate::input::InputEvent;
use anyhow::Result;
use std::sync::Arc;
use tictactoe_core::GameState;
use tokio::sync::{Mutex, mpsc};

/// Input channel shared by every human seat at the board.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<InputEvent>>>;

/// Human player reading parsed input lines.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    /// Returns the next typed line. A closed channel reads as `Quit`.
    async fn get_move(&mut self, _game: &GameState) -> Result<InputEvent> {
        let mut input = self.input.lock().await;
        Ok(input.recv().await.unwrap_or(InputEvent::Quit))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
