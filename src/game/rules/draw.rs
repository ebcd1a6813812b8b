//! Board-full detection.

use super::super::types::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Player;
    use super::super::win::find_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && find_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.mark(4, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (i, player) in marks.into_iter().enumerate() {
            board.mark(i, player);
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut board = Board::new();
        for i in 0..9 {
            board.mark(i, Player::X);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
