//! Line-based keyboard input.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One line typed by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Play the cell at this 0-based index.
    Cell(usize),
    /// Start over.
    Reset,
    /// Switch to the next game mode and start over.
    SwitchMode,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unrecognized(String),
}

impl InputEvent {
    /// Parses a line. Cells are typed 1-based, as shown on the board.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return InputEvent::Quit,
            "r" | "reset" => return InputEvent::Reset,
            "m" | "mode" => return InputEvent::SwitchMode,
            _ => {}
        }

        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => InputEvent::Cell(n - 1),
            _ => InputEvent::Unrecognized(trimmed.to_string()),
        }
    }
}

/// Reads stdin on a background task and forwards parsed lines.
///
/// The channel closes when stdin does.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let event = InputEvent::parse(&line);
                    debug!(?event, "Input received");
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });

    rx
}
