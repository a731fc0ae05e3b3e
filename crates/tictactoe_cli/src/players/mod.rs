//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SharedInput};

use crate::input::InputEvent;
use anyhow::Result;
use tictactoe_core::GameState;

/// Trait for whoever sits in a seat.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for this player's next action.
    ///
    /// A move is `InputEvent::Cell` with a 0-based index.
    async fn get_move(&mut self, game: &GameState) -> Result<InputEvent>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
