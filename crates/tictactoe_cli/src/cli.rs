//! Command-line interface for the tic-tac-toe front end.

use crate::config::ModeKind;
use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_core::Player;

/// Tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeKind>,

        /// Mark played by the computer (overrides the config file)
        #[arg(long, value_enum)]
        computer: Option<MarkArg>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the optimal move for a board as JSON
    Best {
        /// Board in compact notation, e.g. "XX.|O..|..."
        #[arg(long)]
        board: String,

        /// Mark to move
        #[arg(long, value_enum)]
        mark: MarkArg,
    },
}

/// A mark as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}
