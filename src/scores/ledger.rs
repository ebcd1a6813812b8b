//! Persistent tally of wins and draws.

use super::ScoreStore;
use crate::game::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Key the ledger record is stored under.
pub const SCORES_KEY: &str = "cxz_scores_v1";

/// Win and draw counters.
///
/// Serialized as `{"X": n, "O": n, "D": n}`; `"Draw"` is accepted for `"D"` on load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct ScoreCounts {
    /// Rounds won by X.
    #[serde(rename = "X")]
    pub x: u32,
    /// Rounds won by O.
    #[serde(rename = "O")]
    pub o: u32,
    /// Drawn rounds.
    #[serde(rename = "D", alias = "Draw")]
    pub draws: u32,
}

impl ScoreCounts {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total rounds recorded.
    pub fn total(&self) -> u64 {
        u64::from(self.x) + u64::from(self.o) + u64::from(self.draws)
    }

    fn bucket_mut(&mut self, outcome: Outcome) -> &mut u32 {
        match outcome {
            Outcome::Winner(Player::X) => &mut self.x,
            Outcome::Winner(Player::O) => &mut self.o,
            Outcome::Draw => &mut self.draws,
        }
    }
}

/// Parses a stored record. Only a JSON object with all three counters is accepted.
fn parse_record(raw: &str) -> Result<ScoreCounts, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(format!(
            "expected an object, found {}",
            value
        )));
    }
    serde_json::from_value(value)
}

/// Score counters bound to the store that persists them.
///
/// The ledger does no deduplication: each call to [`record`](Self::record)
/// counts. Callers record once per finished round.
#[derive(Debug)]
pub struct ScoreLedger<S> {
    counts: ScoreCounts,
    store: S,
}

impl<S: ScoreStore> ScoreLedger<S> {
    /// Loads the ledger from `store`.
    ///
    /// A missing, unreadable, or malformed record yields zeroed counters.
    #[instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let counts = match store.read(SCORES_KEY) {
            Ok(Some(raw)) => match parse_record(&raw) {
                Ok(counts) => {
                    debug!(?counts, "Scores loaded");
                    counts
                }
                Err(e) => {
                    info!(error = %e, "Stored scores malformed, starting from zero");
                    ScoreCounts::default()
                }
            },
            Ok(None) => {
                debug!("No stored scores, starting from zero");
                ScoreCounts::default()
            }
            Err(e) => {
                info!(error = %e, "Failed to read scores, starting from zero");
                ScoreCounts::default()
            }
        };
        Self { counts, store }
    }

    /// Current counters.
    pub fn counts(&self) -> ScoreCounts {
        self.counts
    }

    /// Counts one finished round and persists the result.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let bucket = self.counts.bucket_mut(outcome);
        *bucket = bucket.saturating_add(1);
        info!(counts = ?self.counts, "Outcome recorded");
        self.save();
    }

    /// Zeroes every counter and persists the reset.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.counts = ScoreCounts::default();
        info!("Scores reset");
        self.save();
    }

    /// Writes the counters to the store.
    ///
    /// Best effort: a failed write is logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn save(&mut self) {
        let raw = match serde_json::to_string(&self.counts) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize scores");
                return;
            }
        };
        if let Err(e) = self.store.write(SCORES_KEY, &raw) {
            warn!(error = %e, "Failed to persist scores");
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}
