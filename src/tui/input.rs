//! Key mapping and cursor movement.

use cross_zero::{KeyBindings, Position};
use crossterm::event::{KeyCode, KeyEvent};

/// What a key press asks the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the cell at this index.
    Place(usize),
    /// Mark the cell under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Clear the board.
    NewGame,
    /// Zero the scoreboard and clear the board.
    ResetScores,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action. Shortcut letters match in either case.
pub fn action_for_key(key: KeyEvent, keys: &KeyBindings) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => {
            if let Some(digit @ 1..=9) = c.to_digit(10) {
                Some(Action::Place(digit as usize - 1))
            } else if c.eq_ignore_ascii_case(keys.new_game()) {
                Some(Action::NewGame)
            } else if c.eq_ignore_ascii_case(keys.reset_scores()) {
                Some(Action::ResetScores)
            } else if c.eq_ignore_ascii_case(&'q') {
                Some(Action::Quit)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        let keys = KeyBindings::default();
        assert_eq!(
            action_for_key(press(KeyCode::Char('1')), &keys),
            Some(Action::Place(0))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('9')), &keys),
            Some(Action::Place(8))
        );
        assert_eq!(action_for_key(press(KeyCode::Char('0')), &keys), None);
    }

    #[test]
    fn test_shortcuts_ignore_case() {
        let keys = KeyBindings::default();
        assert_eq!(
            action_for_key(press(KeyCode::Char('R')), &keys),
            Some(Action::NewGame)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('c')), &keys),
            Some(Action::ResetScores)
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char(' ')), &keys),
            Some(Action::PlaceAtCursor)
        );
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }
}
