//! Leaderboards for both game types.

use serde::{Deserialize, Serialize};
use sr_core::{GameType, ScoreEntry};

/// Most entries kept per leaderboard.
pub const MAX_ENTRIES: usize = 10;

/// The leaderboards of both games, in their persisted layout.
///
/// Each list is sorted by descending score; equal scores keep the order in
/// which they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    number_game: Vec<ScoreEntry>,
    #[serde(default)]
    word_game: Vec<ScoreEntry>,
}

impl Scoreboard {
    /// An empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The leaderboard for `game`, best first.
    pub fn entries(&self, game: GameType) -> &[ScoreEntry] {
        match game {
            GameType::Number => &self.number_game,
            GameType::Word => &self.word_game,
        }
    }

    fn entries_mut(&mut self, game: GameType) -> &mut Vec<ScoreEntry> {
        match game {
            GameType::Number => &mut self.number_game,
            GameType::Word => &mut self.word_game,
        }
    }

    /// Up to `n` best entries for `game`.
    pub fn top(&self, game: GameType, n: usize) -> Vec<ScoreEntry> {
        self.entries(game).iter().take(n).cloned().collect()
    }

    /// Add `entry` to the leaderboard for `game`, then re-rank and keep the
    /// best [`MAX_ENTRIES`].
    pub fn insert(&mut self, game: GameType, entry: ScoreEntry) {
        let list = self.entries_mut(game);
        list.push(entry);
        // `sort_by` is stable: earlier entries stay ahead of later equal scores.
        list.sort_by(|a, b| b.score.cmp(&a.score));
        list.truncate(MAX_ENTRIES);
    }

    /// Remove every entry for `game`.
    pub fn clear(&mut self, game: GameType) {
        self.entries_mut(game).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use sr_core::EntryDetails;

    fn word(score: u64, words_count: u32) -> ScoreEntry {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        ScoreEntry::at(
            ts,
            score,
            10,
            EntryDetails::Word {
                words_count,
                topic: None,
                chain_length: None,
            },
        )
    }

    fn words_counts(board: &Scoreboard) -> Vec<(u64, u32)> {
        board
            .entries(GameType::Word)
            .iter()
            .map(|e| match e.details {
                EntryDetails::Word { words_count, .. } => (e.score, words_count),
                EntryDetails::Number { .. } => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let mut board = Scoreboard::new();
        board.insert(GameType::Word, word(50, 1));
        board.insert(GameType::Word, word(80, 2));
        board.insert(GameType::Word, word(50, 3));
        assert_eq!(words_counts(&board), vec![(80, 2), (50, 1), (50, 3)]);
    }

    #[test]
    fn keeps_only_ten_best() {
        let mut board = Scoreboard::new();
        for s in 0..15 {
            board.insert(GameType::Word, word(s, s as u32));
        }
        let scores: Vec<u64> = board.entries(GameType::Word).iter().map(|e| e.score).collect();
        assert_eq!(scores, (5..15).rev().collect::<Vec<_>>());
    }

    #[test]
    fn boards_are_independent() {
        let mut board = Scoreboard::new();
        board.insert(GameType::Word, word(1, 1));
        assert!(board.entries(GameType::Number).is_empty());
        board.clear(GameType::Number);
        assert_eq!(board.entries(GameType::Word).len(), 1);
        board.clear(GameType::Word);
        assert!(board.entries(GameType::Word).is_empty());
    }

    #[test]
    fn top_limits() {
        let mut board = Scoreboard::new();
        for s in [3, 9, 4] {
            board.insert(GameType::Word, word(s, 0));
        }
        let top: Vec<u64> = board.top(GameType::Word, 2).iter().map(|e| e.score).collect();
        assert_eq!(top, vec![9, 4]);
        assert_eq!(board.top(GameType::Word, 50).len(), 3);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let board: Scoreboard = serde_json::from_str(r#"{"word_game": []}"#).unwrap();
        assert!(board.entries(GameType::Number).is_empty());
        let board: Scoreboard = serde_json::from_str("{}").unwrap();
        assert_eq!(board, Scoreboard::new());
    }

    proptest! {
        #[test]
        fn leaderboard_invariants(scores in prop::collection::vec(0u64..200, 0..40)) {
            let mut board = Scoreboard::new();
            for (i, s) in scores.iter().enumerate() {
                board.insert(GameType::Word, word(*s, i as u32));
                prop_assert!(board.entries(GameType::Word).len() <= MAX_ENTRIES);
            }
            let ranked = words_counts(&board);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].0 >= pair[1].0);
                if pair[0].0 == pair[1].0 {
                    // insertion index is stored in words_count
                    prop_assert!(pair[0].1 < pair[1].1);
                }
            }
            let mut expected = scores.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(MAX_ENTRIES);
            let got: Vec<u64> = ranked.iter().map(|(s, _)| *s).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
