//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{Mode, Player};
use tracing::{debug, info, instrument};

/// Who plays against whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModeKind {
    /// Two humans at one keyboard.
    TwoPlayer,
    /// Human against the computer.
    Computer,
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Game mode.
    #[serde(default = "default_mode")]
    mode: ModeKind,

    /// Mark played by the computer in `computer` mode.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,
}

fn default_mode() -> ModeKind {
    ModeKind::Computer
}

fn default_computer() -> Player {
    Player::O
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            computer: default_computer(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        mode: Option<ModeKind>,
        computer: Option<Player>,
        delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        if let Some(delay_ms) = delay_ms {
            self.delay_ms = delay_ms;
        }
        self
    }

    /// The session mode this configuration describes.
    pub fn session_mode(&self) -> Mode {
        match self.mode {
            ModeKind::TwoPlayer => Mode::TwoPlayer,
            ModeKind::Computer => Mode::VersusComputer {
                computer: self.computer,
            },
        }
    }

    /// Pause before the computer moves.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(*config.mode(), ModeKind::Computer);
        assert_eq!(*config.computer(), Player::O);
        assert_eq!(config.delay(), Duration::from_millis(500));
        assert_eq!(config.session_mode(), Mode::VersusComputer { computer: Player::O });
    }

    #[test]
    fn test_overrides_win() {
        let config = PlayConfig::default().with_overrides(
            Some(ModeKind::TwoPlayer),
            None,
            Some(0),
        );
        assert_eq!(config.session_mode(), Mode::TwoPlayer);
        assert_eq!(*config.delay_ms(), 0);
        assert_eq!(*config.computer(), Player::O);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: PlayConfig = toml::from_str("computer = \"X\"").unwrap();
        assert_eq!(*config.mode(), ModeKind::Computer);
        assert_eq!(config.session_mode(), Mode::VersusComputer { computer: Player::X });
        assert_eq!(*config.delay_ms(), 500);
    }
}
