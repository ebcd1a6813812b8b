//! Win detection.

use super::super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices forming a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Indices of the three cells.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Whether the line passes through `index`.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The eight lines, scanned in this order.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line holding three equal marks, with its owner.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Player, WinLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match (board.get(a), board.get(b), board.get(c)) {
            (Some(Square::Occupied(p)), Some(sb), Some(sc))
                if sb == Square::Occupied(p) && sc == Square::Occupied(p) =>
            {
                Some((p, *line))
            }
            _ => None,
        }
    })
}
