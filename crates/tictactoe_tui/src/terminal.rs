//! Terminal setup and the interactive event loop.

use crate::app::App;
use crate::config::AppConfig;
use crate::controller::{ComputerMoveDue, Controller, ControllerSettings};
use crate::{input, logging, ui};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the TUI until the player quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    logging::init_file(config.log_file())?;
    info!(?config, "Starting tic-tac-toe TUI");

    let mut terminal = TerminalGuard::enter()?;
    let res = run_app(&mut terminal.terminal, &config).await;
    terminal.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Raw mode plus alternate screen, undone on drop if not restored first.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e.into())
            }
        }
    }

    fn restore(&mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
            let _ = self.terminal.show_cursor();
        }
    }
}

#[instrument(skip_all)]
async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &AppConfig) -> Result<()> {
    let (due_tx, mut due_rx) = mpsc::unbounded_channel::<ComputerMoveDue>();
    let mut controller = Controller::new(ControllerSettings::from(config), due_tx);
    let flash = Duration::from_millis(*config.status_flash_ms());
    let mut app = App::new(controller.subscribe(), flash, Instant::now());

    loop {
        while let Ok(due) = due_rx.try_recv() {
            controller.computer_move_due(due);
        }

        let now = Instant::now();
        app.refresh(now);
        terminal.draw(|f| ui::draw(f, &app, now))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::map_key(key.code, app.cursor())
            && !app.apply(action, &mut controller)
        {
            info!("User quit");
            return Ok(());
        }

        // Let the timer task run on a current-thread runtime.
        tokio::task::yield_now().await;
    }
}
