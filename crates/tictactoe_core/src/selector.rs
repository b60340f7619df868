//! Move selection for the computer player.

use crate::{Board, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks an empty cell uniformly at random.
///
/// Returns `None` when the board has no empty cell. The mover's `symbol`
/// does not influence the choice: the computer neither completes its own
/// lines nor blocks the opponent's.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, symbol: Symbol, rng: &mut R) -> Option<usize> {
    let empty = board.empty_indices();
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "Selected computer move");
    choice
}

/// [`select_move`] using the thread-local generator.
pub fn select_move_with_thread_rng(board: &Board, symbol: Symbol) -> Option<usize> {
    select_move(board, symbol, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([Cell::Occupied(Symbol::X); 9]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_move(&board, Symbol::O, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let mut cells = [Cell::Occupied(Symbol::O); 9];
        cells[5] = Cell::Empty;
        let board = Board::from_cells(cells);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_move(&board, Symbol::X, &mut rng), Some(5));
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Occupied(Symbol::X);
        cells[4] = Cell::Occupied(Symbol::O);
        cells[8] = Cell::Occupied(Symbol::X);
        let board = Board::from_cells(cells);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let index = select_move(&board, Symbol::O, &mut rng).unwrap();
            assert!(board.is_empty(index));
        }
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[select_move(&board, Symbol::X, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_thread_rng_variant() {
        let index = select_move_with_thread_rng(&Board::new(), Symbol::X).unwrap();
        assert!(index < 9);
    }
}
