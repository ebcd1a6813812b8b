//! Turn loop for a single round.
//!
//! [`GameState`] owns the board, the player to move, and the round status.
//! Placements that cannot apply (off-board index, occupied cell, finished
//! round) leave the state untouched and report [`Transition::Ignored`]; input
//! delivered by a UI is routinely stale or duplicated, so this is not an error.

use super::rules::{WinLine, find_winner, is_full};
use super::types::{Board, CELLS, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a completed line.
    Won {
        /// Owner of the line.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Whether the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { player, .. } => Some(Outcome::Winner(*player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Result of a finished round, as tallied by the score ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Why a placement left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Index is not in 0-8.
    #[display("index {} is off the board", _0)]
    OutOfRange(usize),
    /// Cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    /// The round has already ended.
    #[display("round is over")]
    Inactive,
}

/// What a call to [`GameState::place`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// Mark placed; the turn passed to the opponent.
    Continued(Player),
    /// Mark placed and completed a line.
    Won(Player, WinLine),
    /// Mark placed and filled the board with no line.
    Drawn(Player),
}

impl Transition {
    /// The player whose mark was placed, if any.
    pub fn placed(&self) -> Option<Player> {
        match self {
            Transition::Ignored(_) => None,
            Transition::Continued(p) | Transition::Won(p, _) | Transition::Drawn(p) => Some(*p),
        }
    }

    /// The terminal outcome this placement produced, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Transition::Won(p, _) => Some(Outcome::Winner(*p)),
            Transition::Drawn(_) => Some(Outcome::Draw),
            Transition::Ignored(_) | Transition::Continued(_) => None,
        }
    }
}

/// Board, turn, and status of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or `None` once the round is over.
    pub fn turn(&self) -> Option<Player> {
        self.is_active().then_some(self.current_player)
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether placements are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// The completed line, if the round was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Outcome is evaluated in a fixed order: the first completed line in
    /// [`LINES`](super::rules::LINES) order wins; otherwise a full board is a
    /// draw; otherwise the turn passes.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, index: usize) -> Transition {
        if let Some(reason) = self.check_placement(index) {
            debug!(%reason, "Placement ignored");
            return Transition::Ignored(reason);
        }

        let player = self.current_player;
        self.board.mark(index, player);

        if let Some((winner, line)) = find_winner(&self.board) {
            info!(%winner, %line, "Round won");
            self.status = GameStatus::Won {
                player: winner,
                line,
            };
            return Transition::Won(winner, line);
        }

        if is_full(&self.board) {
            info!("Round drawn");
            self.status = GameStatus::Draw;
            return Transition::Drawn(player);
        }

        self.current_player = player.opponent();
        debug!(next = %self.current_player, "Turn passed");
        Transition::Continued(player)
    }

    /// Clears the board and starts a new round with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        debug!("Round reset");
    }

    fn check_placement(&self, index: usize) -> Option<IgnoreReason> {
        if index >= CELLS {
            Some(IgnoreReason::OutOfRange(index))
        } else if !self.is_active() {
            Some(IgnoreReason::Inactive)
        } else if !self.board.is_empty(index) {
            Some(IgnoreReason::Occupied(index))
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
