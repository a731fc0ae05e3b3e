//! Tic-tac-toe game state and an optimal computer opponent.
//!
//! # Architecture
//!
//! - **Game state**: [`GameState`] owns the board, the next mover and the
//!   game status; every move goes through [`GameState::apply_move`].
//! - **Search**: [`best_move`] runs full-depth minimax and returns the
//!   optimal square for either mark.
//! - **Session**: [`Session`] pairs a game with a [`Mode`] and lets the
//!   computer answer human moves.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Mode, Session};
//!
//! let mut session = Session::new(Mode::default());
//! session.play(4)?;
//! if let Some((pos, status)) = session.play_computer()? {
//!     assert_eq!(status, GameStatus::InProgress);
//!     println!("computer played {pos}");
//! }
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use position::Position;
pub use search::{BestMove, Score, SearchReport, best_move};
pub use session::{Mode, Session, StatusMessage};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
