//! Terminal tic-tac-toe.
//!
//! # Architecture
//!
//! - **Controller**: owns the game session, publishes snapshots over a watch
//!   channel and schedules the computer's delayed move
//! - **App**: UI-side state built from snapshots (cursor, feedback, status flash)
//! - **UI**: stateless ratatui rendering of the app
//! - **Simulate**: headless computer-vs-computer batches

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod input;
pub mod logging;
pub mod simulate;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, PlayArgs};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use controller::{CommandError, ComputerMoveDue, Controller, ControllerSettings};
pub use simulate::{Tally, simulate};
pub use terminal::run_tui;
