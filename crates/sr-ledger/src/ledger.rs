//! The score ledger: ranked leaderboards over a persistent store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use sr_core::{GameType, ScoreEntry, ScoreSubmission};
use tracing::{info, warn};

use crate::board::{MAX_ENTRIES, Scoreboard};
use crate::error::LedgerResult;
use crate::store::{FileScoreStore, ScoreStore};

/// Ranked per-game leaderboards backed by a [`ScoreStore`].
///
/// The ledger loads the store once when opened and keeps the board in memory.
/// Each mutation updates the in-memory board first and then persists the
/// complete snapshot. When persisting fails the error is returned, but the
/// in-memory board keeps the new state.
///
/// Mutations are serialized through an internal lock, so one ledger can be
/// shared between threads.
pub struct ScoreLedger {
    store: Box<dyn ScoreStore>,
    board: Mutex<Scoreboard>,
}

impl ScoreLedger {
    /// Open a ledger over `store`. Unreadable or corrupt stored data is
    /// treated as an empty scoreboard.
    pub fn open(store: impl ScoreStore + 'static) -> Self {
        let board = match store.load() {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "stored scores are unreadable; starting empty");
                Scoreboard::new()
            }
        };
        Self {
            store: Box::new(store),
            board: Mutex::new(board),
        }
    }

    /// Open a ledger over the JSON file at `path`.
    pub fn open_file(path: impl AsRef<std::path::Path>) -> Self {
        Self::open(FileScoreStore::new(path))
    }

    fn board(&self) -> MutexGuard<'_, Scoreboard> {
        // The board is always left whole, so a poisoned lock is still usable.
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, board: &Scoreboard) -> LedgerResult<()> {
        self.store.save(board).inspect_err(|e| {
            warn!(error = %e, "failed to persist scores");
        })
    }

    /// Record `entry` on the leaderboard for `game`.
    pub fn append(&self, game: GameType, entry: ScoreEntry) -> LedgerResult<()> {
        let mut board = self.board();
        let score = entry.score;
        board.insert(game, entry);
        info!(%game, score, "score recorded");
        self.persist(&board)
    }

    /// Validate a submission and record it. Returns the game type it was
    /// recorded under.
    pub fn submit(&self, submission: ScoreSubmission) -> LedgerResult<GameType> {
        let (game, entry) = submission.into_entry()?;
        self.append(game, entry)?;
        Ok(game)
    }

    /// Up to `n` best entries for `game`, best first.
    pub fn top_n(&self, game: GameType, n: usize) -> Vec<ScoreEntry> {
        self.board().top(game, n)
    }

    /// The full leaderboard for `game`.
    pub fn top(&self, game: GameType) -> Vec<ScoreEntry> {
        self.top_n(game, MAX_ENTRIES)
    }

    /// Both leaderboards.
    pub fn snapshot(&self) -> Scoreboard {
        self.board().clone()
    }

    /// Remove every entry for `game`.
    pub fn clear(&self, game: GameType) -> LedgerResult<()> {
        let mut board = self.board();
        board.clear(game);
        info!(%game, "leaderboard cleared");
        self.persist(&board)
    }
}
