//! Game session state machine.
//!
//! A [`Session`] holds the board, whose turn it is, the play mode and the
//! human's symbol. It accepts moves one at a time and re-evaluates the
//! board after each one:
//!
//! ```text
//! AwaitingMove(mover) --submit_move--> AwaitingMove(opponent)
//!                                  \-> Won { symbol, line }
//!                                  \-> Drawn
//! any --reset/set_mode/set_human_symbol--> AwaitingMove(X)
//! ```

use crate::rules::{Outcome, WinningLine, evaluate};
use crate::{Board, Move, MoveError, Position, Snapshot, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the two symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// One human against the random computer player.
    PlayerVsComputer,
}

impl Mode {
    /// Returns display name.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsComputer => "Player vs Computer",
        }
    }

    /// Returns the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::PlayerVsPlayer => Mode::PlayerVsComputer,
            Mode::PlayerVsComputer => Mode::PlayerVsPlayer,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `mover` to play.
    AwaitingMove(Symbol),
    /// Terminal: `symbol` completed `line`.
    Won {
        /// The winner.
        symbol: Symbol,
        /// The completed line.
        line: WinningLine,
    },
    /// Terminal: full board, no line.
    Drawn,
}

impl Phase {
    /// Returns true for `Won` and `Drawn`.
    #[instrument]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::AwaitingMove(_))
    }

    /// Returns the winning line, if any.
    #[instrument]
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Phase::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    next_mover: Symbol,
    mode: Mode,
    human_symbol: Symbol,
    phase: Phase,
    last_move: Option<Move>,
}

impl Session {
    /// Creates a fresh player-vs-player session.
    pub fn new() -> Self {
        Self::with_settings(Mode::default(), Symbol::X)
    }

    /// Creates a fresh session with the given mode and human symbol.
    #[instrument]
    pub fn with_settings(mode: Mode, human_symbol: Symbol) -> Self {
        Self {
            board: Board::new(),
            next_mover: Symbol::X,
            mode,
            human_symbol,
            phase: Phase::AwaitingMove(Symbol::X),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol that moves next (or moved last, once terminal).
    pub fn next_mover(&self) -> Symbol {
        self.next_mover
    }

    /// Returns the play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the human's symbol. Only meaningful in computer mode.
    pub fn human_symbol(&self) -> Symbol {
        self.human_symbol
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Checks if the computer should move now.
    #[instrument(skip(self))]
    pub fn is_computer_turn(&self) -> bool {
        match self.phase {
            Phase::AwaitingMove(mover) => {
                self.mode == Mode::PlayerVsComputer && mover != self.human_symbol
            }
            _ => false,
        }
    }

    /// Places the current mover's symbol at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the session untouched, when the game is
    /// over, `index` is off the board, or the cell is occupied.
    #[instrument(skip(self), fields(mover = %self.next_mover))]
    pub fn submit_move(&mut self, index: usize) -> Result<Phase, MoveError> {
        let mover = match self.phase {
            Phase::AwaitingMove(mover) => mover,
            _ => return Err(MoveError::GameOver),
        };
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.place(index, mover);
        self.last_move = Some(Move::new(mover, position));

        self.phase = match evaluate(&self.board) {
            Outcome::Win { symbol, line } => {
                info!(%symbol, line = ?line.indices(), "Game won");
                Phase::Won { symbol, line }
            }
            Outcome::Draw => {
                info!("Game drawn");
                Phase::Drawn
            }
            Outcome::InProgress => {
                self.next_mover = mover.opponent();
                Phase::AwaitingMove(self.next_mover)
            }
        };

        debug!(phase = ?self.phase, "Move accepted");
        Ok(self.phase)
    }

    /// Returns to an empty board with X to move. Mode and human symbol stay.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_settings(self.mode, self.human_symbol);
    }

    /// Changes the mode and starts over.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Changes the human's symbol and starts over.
    #[instrument(skip(self))]
    pub fn set_human_symbol(&mut self, symbol: Symbol) {
        self.human_symbol = symbol;
        self.reset();
    }

    /// Copies the current state for presentation.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board,
            self.phase,
            self.mode,
            self.human_symbol,
            self.last_move,
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
