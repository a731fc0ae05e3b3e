//! Match controller: game mode, human moves and the computer's replies.

use super::action::MoveError;
use super::game::GameState;
use super::search::{self, BestMove};
use super::types::{GameStatus, Player};
use super::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// One human against the search engine.
    VersusComputer {
        /// Mark played by the computer.
        computer: Player,
    },
}

impl Mode {
    /// The computer's mark, if it plays.
    pub fn computer(&self) -> Option<Player> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VersusComputer { computer } => Some(*computer),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::VersusComputer {
            computer: Player::O,
        }
    }
}

/// Status line shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusMessage {
    /// Game is running.
    #[display("{}'s turn", _0)]
    Turn(Player),
    /// Game was won.
    #[display("{} wins!", _0)]
    Winner(Player),
    /// Game was drawn.
    #[display("Game over! It's a draw!")]
    Draw,
}

/// One game at a time under a fixed mode.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    game: GameState,
}

impl Session {
    /// Starts a fresh game in `mode`.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(?mode, "Session started");
        Self {
            mode,
            game: GameState::new(),
        }
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.game.reset();
    }

    /// Starts a fresh game in the same mode.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// True when the game is active and the computer's mark is next.
    pub fn computer_to_move(&self) -> bool {
        self.game.is_active() && self.mode.computer() == Some(self.game.to_move())
    }

    /// Plays a human move for the next mover at `index`.
    ///
    /// Rejected with `NotYourTurn` while the computer is due to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let mark = self.game.to_move();
        if self.computer_to_move() {
            return Err(MoveError::NotYourTurn(mark));
        }
        self.submit(index)
    }

    /// Plays `index` for the next mover, whoever holds that seat.
    pub fn submit(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.game.apply_move(index, self.game.to_move())
    }

    /// Lets the computer move if it is its turn.
    ///
    /// Returns the square it played and the resulting status, or `None`
    /// when it is not the computer's turn.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<Option<(Position, GameStatus)>, MoveError> {
        if !self.computer_to_move() {
            return Ok(None);
        }

        let mark = self.game.to_move();
        let BestMove { position, score } = search::best_move(self.game.board(), mark);
        let Some(pos) = position else {
            return Ok(None);
        };

        debug!(%mark, %pos, ?score, "Computer chose move");
        let status = self.submit(pos.to_index())?;
        Ok(Some((pos, status)))
    }

    /// Status line for the current game.
    pub fn message(&self) -> StatusMessage {
        match self.game.status() {
            GameStatus::InProgress => StatusMessage::Turn(self.game.to_move()),
            GameStatus::Won(winner) => StatusMessage::Winner(*winner),
            GameStatus::Draw => StatusMessage::Draw,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
