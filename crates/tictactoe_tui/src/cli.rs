//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::{Mode, Symbol};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Play computer-vs-computer games headlessly and print the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Flags for the interactive game. Each overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Play mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Your symbol in computer mode
    #[arg(long, value_enum)]
    pub symbol: Option<SymbolArg>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer player
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Play mode flag values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Pvc => Mode::PlayerVsComputer,
        }
    }
}

/// Symbol flag values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolArg {
    /// Play X (moves first)
    X,
    /// Play O
    O,
}

impl From<SymbolArg> for Symbol {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}
