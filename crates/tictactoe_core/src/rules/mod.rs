//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state; the
//! session applies moves and asks these rules what happened.

pub mod win;

use crate::{Board, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use win::{WINNING_LINES, WinningLine, find_winner};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    InProgress,
    /// A symbol holds a complete line.
    Win {
        /// The winning symbol.
        symbol: Symbol,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no winning line.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates the board.
///
/// A win takes precedence over a full board, so a move that completes a
/// line on the last empty cell is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((symbol, line)) = find_winner(board) {
        return Outcome::Win { symbol, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
