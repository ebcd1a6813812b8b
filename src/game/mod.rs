mod position;
mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::{LINES, WinLine, find_winner, is_full};
pub use state::{GameState, GameStatus, IgnoreReason, Outcome, Transition};
pub use types::{Board, CELLS, Player, Square};
