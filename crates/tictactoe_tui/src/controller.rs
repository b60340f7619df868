//! Session controller: applies commands, publishes snapshots and paces the
//! computer player.
//!
//! When the computer is the side to move, the controller spawns a timer
//! task that sleeps for the configured delay and then posts a
//! [`ComputerMoveDue`] back to the UI loop. Only one such move is ever
//! pending. Reset, mode and symbol changes abort the timer and bump the
//! generation, so a message that was already queued is ignored.

use crate::config::AppConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictactoe_core::{Mode, MoveError, Phase, Session, Snapshot, Symbol, select_move};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Message from the timer task: the computer may move now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMoveDue {
    /// Generation of the schedule that produced this message.
    pub generation: u64,
}

/// Settings the controller starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Initial play mode.
    pub mode: Mode,
    /// Initial human symbol.
    pub human_symbol: Symbol,
    /// Pause before each computer move.
    pub delay: Duration,
    /// Seed for the computer player.
    pub seed: Option<u64>,
}

impl From<&AppConfig> for ControllerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            mode: *config.mode(),
            human_symbol: *config.human_symbol(),
            delay: Duration::from_millis(*config.computer_delay_ms()),
            seed: *config.seed(),
        }
    }
}

/// Why a human command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum CommandError {
    /// The computer is about to move.
    #[display("Wait for the computer to move")]
    ComputerToMove,

    /// The session rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

impl std::error::Error for CommandError {}

#[derive(Debug)]
struct PendingMove {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Owns the session and is the only place it is mutated.
#[derive(Debug)]
pub struct Controller {
    session: Session,
    rng: StdRng,
    delay: Duration,
    snapshots: watch::Sender<Snapshot>,
    due_tx: mpsc::UnboundedSender<ComputerMoveDue>,
    pending: Option<PendingMove>,
    generation: u64,
}

impl Controller {
    /// Creates a controller and schedules the computer if it moves first.
    ///
    /// Must be called inside a tokio runtime.
    #[instrument(skip(due_tx))]
    pub fn new(settings: ControllerSettings, due_tx: mpsc::UnboundedSender<ComputerMoveDue>) -> Self {
        let session = Session::with_settings(settings.mode, settings.human_symbol);
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (snapshots, _) = watch::channel(session.snapshot());

        let mut controller = Self {
            session,
            rng,
            delay: settings.delay,
            snapshots,
            due_tx,
            pending: None,
            generation: 0,
        };
        controller.schedule_if_computer_turn();
        controller
    }

    /// Subscribes to snapshots published after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// Returns the latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Checks if a computer move is scheduled.
    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Plays a human move at `index`.
    ///
    /// # Errors
    ///
    /// Refuses while the computer is to move, and passes through session
    /// rejections. Refused commands change nothing.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Phase, CommandError> {
        if self.session.is_computer_turn() {
            debug!("Human move refused, computer to move");
            return Err(CommandError::ComputerToMove);
        }

        let phase = self.session.submit_move(index)?;
        self.publish();
        self.schedule_if_computer_turn();
        Ok(phase)
    }

    /// Starts a new game with the same settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.session.reset();
        self.restarted();
    }

    /// Switches the play mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.cancel_pending();
        self.session.set_mode(mode);
        self.restarted();
    }

    /// Switches the human's symbol and starts a new game.
    #[instrument(skip(self))]
    pub fn set_human_symbol(&mut self, symbol: Symbol) {
        self.cancel_pending();
        self.session.set_human_symbol(symbol);
        self.restarted();
    }

    /// Flips between player-vs-player and player-vs-computer.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.session.mode().toggle());
    }

    /// Flips the human between X and O.
    pub fn toggle_human_symbol(&mut self) {
        self.set_human_symbol(self.session.human_symbol().opponent());
    }

    /// Plays the computer's move if `due` belongs to the current schedule.
    ///
    /// Returns the resulting phase, or `None` when the message was stale or
    /// no move was possible.
    #[instrument(skip(self))]
    pub fn computer_move_due(&mut self, due: ComputerMoveDue) -> Option<Phase> {
        match &self.pending {
            Some(pending) if pending.generation == due.generation => {}
            _ => {
                debug!(current = self.generation, "Ignoring stale computer move");
                return None;
            }
        }
        self.pending = None;

        if !self.session.is_computer_turn() {
            return None;
        }

        let mover = self.session.next_mover();
        let Some(index) = select_move(self.session.board(), mover, &mut self.rng) else {
            warn!("Computer has no move on a live board");
            return None;
        };

        match self.session.submit_move(index) {
            Ok(phase) => {
                info!(%mover, index, "Computer moved");
                self.publish();
                self.schedule_if_computer_turn();
                Some(phase)
            }
            Err(e) => {
                warn!(error = %e, index, "Computer move rejected");
                None
            }
        }
    }

    fn restarted(&mut self) {
        self.publish();
        self.schedule_if_computer_turn();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
    }

    fn schedule_if_computer_turn(&mut self) {
        if !self.session.is_computer_turn() || self.pending.is_some() {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;
        let due_tx = self.due_tx.clone();

        debug!(generation, ?delay, "Scheduling computer move");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI loop has exited.
            let _ = due_tx.send(ComputerMoveDue { generation });
        });
        self.pending = Some(PendingMove { generation, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.generation, "Cancelling computer move");
            pending.handle.abort();
        }
        self.generation += 1;
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
