//! Tests for loading the TOML config and applying CLI overrides.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_core::{Mode, Symbol};
use tictactoe_tui::cli::{ModeArg, SymbolArg};
use tictactoe_tui::{AppConfig, PlayArgs};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.mode(), &Mode::PlayerVsPlayer);
    assert_eq!(config.human_symbol(), &Symbol::X);
    assert_eq!(*config.computer_delay_ms(), 600);
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_file_values_parse() {
    let file = write_config(
        r#"
mode = "player_vs_computer"
human_symbol = "O"
computer_delay_ms = 250
seed = 42
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.mode(), &Mode::PlayerVsComputer);
    assert_eq!(config.human_symbol(), &Symbol::O);
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(*config.status_flash_ms(), 400);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("mode = \"online\"\n");

    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("mode = \"player_vs_player\"\ncomputer_delay_ms = 900\nseed = 1\n");
    let args = PlayArgs {
        mode: Some(ModeArg::Pvc),
        symbol: Some(SymbolArg::O),
        delay_ms: Some(0),
        seed: None,
    };

    let config = AppConfig::from_file(file.path()).unwrap().with_overrides(&args);

    assert_eq!(config.mode(), &Mode::PlayerVsComputer);
    assert_eq!(config.human_symbol(), &Symbol::O);
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(config.seed(), &Some(1));
}
