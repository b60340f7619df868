//! Application state and logic.

use crate::controller::Controller;
use crate::input::Action;
use std::time::{Duration, Instant};
use tictactoe_core::{Mode, Position, Snapshot, Status};
use tokio::sync::watch;
use tracing::debug;

/// UI-side state: the latest snapshot plus cursor and feedback.
#[derive(Debug)]
pub struct App {
    snapshots: watch::Receiver<Snapshot>,
    snapshot: Snapshot,
    cursor: Position,
    message: Option<String>,
    status: Status,
    status_changed_at: Instant,
    flash: Duration,
}

impl App {
    /// Creates the app from a snapshot subscription.
    pub fn new(mut snapshots: watch::Receiver<Snapshot>, flash: Duration, now: Instant) -> Self {
        let snapshot = *snapshots.borrow_and_update();
        Self {
            snapshots,
            status: snapshot.status(),
            snapshot,
            cursor: Position::Center,
            message: None,
            status_changed_at: now,
            flash,
        }
    }

    /// Latest snapshot seen by the UI.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback line: the last move or the last refusal.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Checks if the status changed within the flash window.
    pub fn is_flashing(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.status_changed_at) < self.flash
    }

    /// Pulls the newest snapshot and notes status changes.
    pub fn refresh(&mut self, now: Instant) {
        let snapshot = *self.snapshots.borrow_and_update();
        if snapshot == self.snapshot {
            return;
        }

        if snapshot.last_move() != self.snapshot.last_move() {
            self.message = snapshot.last_move().map(|mv| mv.to_string());
        }

        let status = snapshot.status();
        if status != self.status {
            debug!(%status, "Status changed");
            self.status = status;
            self.status_changed_at = now;
        }
        self.snapshot = snapshot;
    }

    /// Applies a key action. Returns `false` when the app should exit.
    pub fn apply(&mut self, action: Action, controller: &mut Controller) -> bool {
        match action {
            Action::Quit => return false,
            Action::Cursor(position) => self.cursor = position,
            Action::Place(position) => {
                if self.snapshot.is_terminal() {
                    return true;
                }
                self.cursor = position;
                if let Err(e) = controller.play(position.index()) {
                    self.message = Some(e.to_string());
                }
            }
            Action::Reset => {
                self.message = None;
                controller.reset();
            }
            Action::ToggleMode => {
                self.message = None;
                controller.toggle_mode();
            }
            Action::ToggleSymbol => {
                if self.snapshot.mode() == &Mode::PlayerVsComputer {
                    self.message = None;
                    controller.toggle_human_symbol();
                } else {
                    self.message = Some("Symbol choice applies to computer mode".to_string());
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerSettings;
    use tictactoe_core::Symbol;
    use tokio::sync::mpsc;

    fn pvp() -> ControllerSettings {
        ControllerSettings {
            mode: Mode::PlayerVsPlayer,
            human_symbol: Symbol::X,
            delay: Duration::from_millis(10),
            seed: Some(1),
        }
    }

    #[tokio::test]
    async fn test_place_updates_after_refresh() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let start = Instant::now();
        let mut app = App::new(controller.subscribe(), Duration::from_millis(400), start);

        assert!(app.apply(Action::Place(Position::TopLeft), &mut controller));
        app.refresh(start);

        assert_eq!(app.status(), Status::Turn(Symbol::O));
        assert_eq!(app.message(), Some("X played Top-left"));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[tokio::test]
    async fn test_rejection_shows_message() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let mut app = App::new(controller.subscribe(), Duration::ZERO, Instant::now());

        app.apply(Action::Place(Position::Center), &mut controller);
        app.apply(Action::Place(Position::Center), &mut controller);

        assert_eq!(app.message(), Some("Cell 4 is already occupied"));
    }

    #[tokio::test]
    async fn test_status_flash_window() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let start = Instant::now();
        let mut app = App::new(controller.subscribe(), Duration::from_millis(400), start);

        let later = start + Duration::from_secs(1);
        assert!(!app.is_flashing(later));

        app.apply(Action::Place(Position::Center), &mut controller);
        app.refresh(later);
        assert!(app.is_flashing(later + Duration::from_millis(100)));
        assert!(!app.is_flashing(later + Duration::from_millis(500)));
    }

    #[tokio::test]
    async fn test_quit_and_symbol_toggle_in_pvp() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let mut app = App::new(controller.subscribe(), Duration::ZERO, Instant::now());

        assert!(app.apply(Action::ToggleSymbol, &mut controller));
        assert_eq!(app.message(), Some("Symbol choice applies to computer mode"));
        assert!(!app.apply(Action::Quit, &mut controller));
    }

    #[tokio::test]
    async fn test_mode_switch_clears_symbol_hint() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let start = Instant::now();
        let mut app = App::new(controller.subscribe(), Duration::ZERO, start);

        app.apply(Action::ToggleSymbol, &mut controller);
        app.apply(Action::ToggleMode, &mut controller);
        app.refresh(start);

        assert_eq!(app.snapshot().mode(), &Mode::PlayerVsComputer);
        assert_eq!(app.message(), None);
    }

    #[tokio::test]
    async fn test_reset_clears_refusal() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let start = Instant::now();
        let mut app = App::new(controller.subscribe(), Duration::ZERO, start);

        app.apply(Action::Place(Position::Center), &mut controller);
        app.apply(Action::Place(Position::Center), &mut controller);
        assert_eq!(app.message(), Some("Cell 4 is already occupied"));

        app.apply(Action::Reset, &mut controller);
        app.refresh(start);

        assert_eq!(app.message(), None);
        assert_eq!(app.snapshot().board().empty_indices().len(), 9);
    }

    #[tokio::test]
    async fn test_place_ignored_after_win() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(pvp(), tx);
        let start = Instant::now();
        let mut app = App::new(controller.subscribe(), Duration::ZERO, start);

        for position in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            app.apply(Action::Place(position), &mut controller);
        }
        app.refresh(start);
        assert!(app.snapshot().is_terminal());
        let before = *app.snapshot();

        assert!(app.apply(Action::Place(Position::BottomRight), &mut controller));
        app.refresh(start);

        assert_eq!(app.snapshot(), &before);
        assert_eq!(controller.snapshot(), before);
        assert_eq!(app.message(), Some("X played Top-right"));
    }
}
