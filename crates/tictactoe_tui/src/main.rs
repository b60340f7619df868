//! Tic-tac-toe command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{AppConfig, Cli, Command, DEFAULT_CONFIG_PATH, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    match cli.command {
        None => tictactoe_tui::run_tui(config).await,
        Some(Command::Play(args)) => tictactoe_tui::run_tui(config.with_overrides(&args)).await,
        Some(Command::Simulate { games, seed }) => {
            logging::init_stderr();
            let seed = seed.or(*config.seed());
            info!(games, ?seed, "Running simulation");
            let tally = tictactoe_tui::simulate(games, seed);
            println!("{}", tally);
            Ok(())
        }
    }
}
