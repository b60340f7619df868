//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the mover's symbol.
    Place(Position),
    /// Move the cursor.
    Cursor(Position),
    /// Start a new game.
    Reset,
    /// Switch between player-vs-player and player-vs-computer.
    ToggleMode,
    /// Switch the human's symbol.
    ToggleSymbol,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, given the current cursor.
pub fn map_key(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('s') => Some(Action::ToggleSymbol),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_place() {
        assert_eq!(
            map_key(KeyCode::Char('1'), Position::Center),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            map_key(KeyCode::Char('9'), Position::Center),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(map_key(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        assert_eq!(
            map_key(KeyCode::Enter, Position::MiddleRight),
            Some(Action::Place(Position::MiddleRight))
        );
    }

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
    }

    #[test]
    fn test_cursor_stays_on_board() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(map_key(KeyCode::Char('q'), Position::Center), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc, Position::Center), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('r'), Position::Center), Some(Action::Reset));
        assert_eq!(map_key(KeyCode::Char('m'), Position::Center), Some(Action::ToggleMode));
        assert_eq!(map_key(KeyCode::Char('s'), Position::Center), Some(Action::ToggleSymbol));
        assert_eq!(map_key(KeyCode::Tab, Position::Center), None);
    }
}
