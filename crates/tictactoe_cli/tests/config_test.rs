//! Tests for loading play configuration from disk.

use std::io::Write;
use tictactoe_cli::{ModeKind, PlayConfig};
use tictactoe_core::{Mode, Player};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"two-player\"").unwrap();
    writeln!(file, "computer = \"X\"").unwrap();
    writeln!(file, "delay_ms = 0").unwrap();

    let config = PlayConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.mode(), ModeKind::TwoPlayer);
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(*config.delay_ms(), 0);
    assert_eq!(config.session_mode(), Mode::TwoPlayer);
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = PlayConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"two-player\"").unwrap();

    let config = PlayConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(ModeKind::Computer), Some(Player::X), None);
    assert_eq!(config.session_mode(), Mode::VersusComputer { computer: Player::X });
}

#[test]
fn test_bad_mode_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"solo\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
