//! Application configuration loaded from TOML.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{Mode, Symbol};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Game and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Play mode at startup.
    #[serde(default)]
    mode: Mode,

    /// Human's symbol in computer mode.
    #[serde(default = "default_human_symbol")]
    human_symbol: Symbol,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer player. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log file written while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// How long the status line stays emphasised after it changes.
    #[serde(default = "default_status_flash_ms")]
    status_flash_ms: u64,
}

fn default_human_symbol() -> Symbol {
    Symbol::X
}

fn default_computer_delay_ms() -> u64 {
    600
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_status_flash_ms() -> u64 {
    400
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            human_symbol: default_human_symbol(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            log_file: default_log_file(),
            status_flash_ms: default_status_flash_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode.into();
        }
        if let Some(symbol) = args.symbol {
            self.human_symbol = symbol.into();
        }
        if let Some(delay_ms) = args.delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
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
