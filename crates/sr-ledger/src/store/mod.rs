//! Persistence backends for the scoreboard.

mod file;
mod memory;

pub use file::FileScoreStore;
pub use memory::MemoryScoreStore;

use crate::board::Scoreboard;
use crate::error::LedgerResult;

/// Storage for complete scoreboard snapshots.
///
/// Implementations replace the whole snapshot on every save; a reader never
/// observes a half-written one.
pub trait ScoreStore: Send + Sync {
    /// Load the stored scoreboard. A store that holds nothing yet returns an
    /// empty board.
    fn load(&self) -> LedgerResult<Scoreboard>;

    /// Replace the stored scoreboard with `board`.
    fn save(&self, board: &Scoreboard) -> LedgerResult<()>;
}
