//! Cross-Zero: pass-and-play tic-tac-toe with a persistent scoreboard.
//!
//! # Architecture
//!
//! - **Game**: the 3x3 board and the turn loop of one round ([`GameState`])
//! - **Scores**: win/draw counters persisted through a [`ScoreStore`]
//! - **Notify**: feedback sinks for placements, round ends, and resets
//! - **Controller**: owns one of each and exposes the host actions
//!
//! # Example
//!
//! ```
//! use cross_zero::{Controller, GameStatus, LogNotifier, MemoryStore, Player, ScoreLedger};
//!
//! let ledger = ScoreLedger::load(MemoryStore::new());
//! let mut table = Controller::new(ledger, LogNotifier);
//! for index in [0, 4, 1, 5, 2] {
//!     table.place(index);
//! }
//! assert!(matches!(table.game().status(), GameStatus::Won { player: Player::X, .. }));
//! assert_eq!(table.scores().x, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod game;
mod notify;
mod scores;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, KeyBindings};

// Crate-level exports - Controller
pub use controller::{Controller, SCORES_RESET_NOTICE};

// Crate-level exports - Game types
pub use game::{
    Board, CELLS, GameState, GameStatus, IgnoreReason, LINES, Outcome, Player, Position, Square,
    Transition, WinLine, find_winner, is_full,
};

// Crate-level exports - Notification
pub use notify::{BellNotifier, Cue, GameEvent, LogNotifier, Notifier, Tone, Waveform};

// Crate-level exports - Score persistence
pub use scores::{FileStore, MemoryStore, SCORES_KEY, ScoreCounts, ScoreLedger, ScoreStore, StoreError};
