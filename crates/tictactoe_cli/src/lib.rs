//! Terminal front end for `tictactoe_core`.
//!
//! - **cli**: command-line arguments
//! - **config**: TOML play settings
//! - **input**: stdin lines turned into input events
//! - **players**: human and computer seats behind one trait
//! - **orchestrator**: the interactive game loop
//! - **analysis**: the `best` command's JSON report

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod input;
pub mod orchestrator;
pub mod players;

pub use analysis::{Analysis, analyze};
pub use cli::{Cli, Command, MarkArg};
pub use config::{ConfigError, ModeKind, PlayConfig};
pub use input::{InputEvent, spawn_stdin_reader};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player, SharedInput};
