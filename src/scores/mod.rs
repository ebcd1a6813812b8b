mod error;
mod ledger;
mod store;

pub use error::StoreError;
pub use ledger::{SCORES_KEY, ScoreCounts, ScoreLedger};
pub use store::{FileStore, MemoryStore, ScoreStore};
