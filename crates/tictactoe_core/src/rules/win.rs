//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples in scan order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Three cell indices forming one of [`WINNING_LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Returns the indices in ascending order.
    #[instrument]
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks if `index` is part of this line.
    #[instrument]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Finds the first winning triple on the board.
///
/// Scans [`WINNING_LINES`] in order, so a malformed board with several
/// complete triples always reports the same one.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Symbol, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Some(Cell::Occupied(symbol)) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((symbol, WinningLine(line)));
        }
    }

    None
}
