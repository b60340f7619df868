//! Immutable session views and the status line derived from them.

use crate::{Board, Mode, Move, Phase, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Owned copy of a session's state after a transition.
///
/// The presentation layer only ever sees snapshots, never the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Lifecycle phase.
    phase: Phase,
    /// Play mode.
    mode: Mode,
    /// Human's symbol (computer mode only).
    human_symbol: Symbol,
    /// Most recent accepted move.
    last_move: Option<Move>,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        phase: Phase,
        mode: Mode,
        human_symbol: Symbol,
        last_move: Option<Move>,
    ) -> Self {
        Self {
            board,
            phase,
            mode,
            human_symbol,
            last_move,
        }
    }

    /// Checks if the game is over.
    #[instrument(skip(self))]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Checks if the computer is the side to move.
    #[instrument(skip(self))]
    pub fn is_computer_turn(&self) -> bool {
        matches!(
            (self.mode, self.phase),
            (Mode::PlayerVsComputer, Phase::AwaitingMove(mover)) if mover != self.human_symbol
        )
    }

    /// Derives the status shown to the player.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        let vs_computer = self.mode == Mode::PlayerVsComputer;
        match self.phase {
            Phase::Won { symbol, .. } if vs_computer => {
                if symbol == self.human_symbol {
                    Status::HumanWins
                } else {
                    Status::ComputerWins
                }
            }
            Phase::Won { symbol, .. } => Status::Winner(symbol),
            Phase::Drawn => Status::Draw,
            Phase::AwaitingMove(mover) if vs_computer => {
                if mover == self.human_symbol {
                    Status::YourTurn(mover)
                } else {
                    Status::ComputerTurn(mover)
                }
            }
            Phase::AwaitingMove(mover) => Status::Turn(mover),
        }
    }
}

/// Status line content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// Player-vs-player winner.
    #[display("Player {} wins!", _0)]
    Winner(Symbol),
    /// Human beat the computer.
    #[display("You win!")]
    HumanWins,
    /// Computer beat the human.
    #[display("Computer wins!")]
    ComputerWins,
    /// Board full, no line.
    #[display("It's a draw!")]
    Draw,
    /// Player-vs-player turn indicator.
    #[display("Player {}'s turn", _0)]
    Turn(Symbol),
    /// Human to move in computer mode.
    #[display("Your turn ({})", _0)]
    YourTurn(Symbol),
    /// Computer to move.
    #[display("Computer's turn ({})", _0)]
    ComputerTurn(Symbol),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;

    #[test]
    fn test_turn_status_pvp() {
        let session = Session::new();
        assert_eq!(session.snapshot().status().to_string(), "Player X's turn");
    }

    #[test]
    fn test_turn_status_pvc() {
        let mut session = Session::with_settings(Mode::PlayerVsComputer, Symbol::X);
        assert_eq!(session.snapshot().status(), Status::YourTurn(Symbol::X));
        session.submit_move(0).unwrap();
        assert_eq!(session.snapshot().status(), Status::ComputerTurn(Symbol::O));
        assert!(session.snapshot().is_computer_turn());
    }

    #[test]
    fn test_win_status() {
        let mut session = Session::with_settings(Mode::PlayerVsComputer, Symbol::O);
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).unwrap();
        }
        assert_eq!(session.snapshot().status(), Status::ComputerWins);

        session.set_mode(Mode::PlayerVsPlayer);
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).unwrap();
        }
        assert_eq!(session.snapshot().status().to_string(), "Player X wins!");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = Session::new();
        let before = session.snapshot();
        session.submit_move(4).unwrap();
        assert_eq!(before.board(), &Board::new());
        assert_ne!(session.snapshot().board(), before.board());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::new();
        session.submit_move(4).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["mode"], "player_vs_player");
        assert_eq!(json["phase"]["AwaitingMove"], "O");
    }
}
