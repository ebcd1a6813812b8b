//! Outcome rules: win lines and board-full detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, find_winner};
