//! Ranked score ledger for Shiritori.
//!
//! Keeps the ten best scores per game type. Every mutation rebuilds the
//! affected leaderboard and persists a complete snapshot through a
//! [`ScoreStore`]; the file store writes the snapshot to a temporary file and
//! renames it into place, so readers only ever see a whole snapshot.

pub mod board;
pub mod error;
pub mod ledger;
pub mod store;

pub use board::{MAX_ENTRIES, Scoreboard};
pub use error::{LedgerError, LedgerResult};
pub use ledger::ScoreLedger;
pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore};
