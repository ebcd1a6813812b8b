//! Single owner of the round, the ledger, and the notifier.
//!
//! Hosts translate their input into the three actions exposed here. The
//! controller is the only place that calls [`ScoreLedger::record`], and it
//! does so from the terminal edge of a placement, so each round is counted
//! exactly once.

use crate::game::{GameState, Outcome, Transition};
use crate::notify::Notifier;
use crate::scores::{ScoreCounts, ScoreLedger, ScoreStore};
use tracing::{debug, info, instrument};

/// Status line shown after a scoreboard reset, until the next action.
pub const SCORES_RESET_NOTICE: &str = "Scores reset — New Game";

/// One table: a round in play, its scoreboard, and its feedback sink.
#[derive(Debug)]
pub struct Controller<S, N> {
    game: GameState,
    ledger: ScoreLedger<S>,
    notifier: N,
    scores_just_reset: bool,
}

impl<S: ScoreStore, N: Notifier> Controller<S, N> {
    /// Creates a controller over a loaded ledger, with a fresh round.
    #[instrument(skip_all)]
    pub fn new(ledger: ScoreLedger<S>, notifier: N) -> Self {
        info!(counts = ?ledger.counts(), "Controller ready");
        Self {
            game: GameState::new(),
            ledger,
            notifier,
            scores_just_reset: false,
        }
    }

    /// The round in play.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current scoreboard.
    pub fn scores(&self) -> ScoreCounts {
        self.ledger.counts()
    }

    /// The ledger.
    pub fn ledger(&self) -> &ScoreLedger<S> {
        &self.ledger
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Places the current player's mark at `index`.
    ///
    /// On a finished round the outcome is recorded before the win or draw
    /// signal goes out.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> Transition {
        let transition = self.game.place(index);
        let Some(player) = transition.placed() else {
            return transition;
        };
        self.scores_just_reset = false;
        self.notifier.placed(player);

        if let Some(outcome) = transition.outcome() {
            info!(%outcome, board = %self.game.board().display(), "Round finished");
            self.ledger.record(outcome);
        }
        match transition {
            Transition::Won(winner, _) => self.notifier.won(winner),
            Transition::Drawn(_) => self.notifier.draw(),
            Transition::Continued(_) | Transition::Ignored(_) => {}
        }
        transition
    }

    /// Clears the board for a new round; scores are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.reset();
        self.scores_just_reset = false;
        self.notifier.reset();
        debug!("New game started");
    }

    /// Zeroes the scoreboard and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.ledger.reset_all();
        self.new_game();
        self.scores_just_reset = true;
    }

    /// Human-readable status of the table.
    pub fn status_line(&self) -> String {
        if self.scores_just_reset {
            return SCORES_RESET_NOTICE.to_string();
        }
        match self.game.status().outcome() {
            None => match self.game.turn() {
                Some(player) => format!("Player {}'s turn", player),
                None => String::new(),
            },
            Some(Outcome::Winner(player)) => format!("{} Wins!", player),
            Some(Outcome::Draw) => "Game Draw!".to_string(),
        }
    }
}
