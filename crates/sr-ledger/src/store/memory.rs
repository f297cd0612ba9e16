//! In-memory store for tests and ephemeral sessions.

use std::sync::RwLock;

use crate::board::Scoreboard;
use crate::error::{LedgerError, LedgerResult};
use crate::store::ScoreStore;

/// Keeps the last saved scoreboard in memory.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    board: RwLock<Scoreboard>,
}

impl MemoryScoreStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `board`.
    pub fn with_board(board: Scoreboard) -> Self {
        Self {
            board: RwLock::new(board),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> LedgerResult<Scoreboard> {
        let board = self.board.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(board.clone())
    }

    fn save(&self, board: &Scoreboard) -> LedgerResult<()> {
        let mut stored = self.board.write().map_err(|_| LedgerError::LockPoisoned)?;
        *stored = board.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::{GameType, ScoreSubmission};

    #[test]
    fn save_replaces_snapshot() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.load().unwrap(), Scoreboard::new());

        let mut board = Scoreboard::new();
        let (game, entry) = ScoreSubmission::word(7, 1, "cars", 1, 2).into_entry().unwrap();
        board.insert(game, entry);
        store.save(&board).unwrap();
        assert_eq!(store.load().unwrap().entries(GameType::Word).len(), 1);

        store.save(&Scoreboard::new()).unwrap();
        assert!(store.load().unwrap().entries(GameType::Word).is_empty());
    }
}
