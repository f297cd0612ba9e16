use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Whether `word` can be played at all: longer than one character and made
/// only of letters.
pub fn is_chain_word(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(char::is_alphabetic)
}

/// The words played so far in one game, in play order.
///
/// No word appears twice (case-insensitive), and every word after the first
/// starts with the last letter of the word before it. The chain only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    words: Vec<String>,
}

impl ChainState {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// All words in play order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been played yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The most recently played word.
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// The letter the next word must start with, or `None` for an empty chain.
    pub fn required_letter(&self) -> Option<char> {
        self.last()
            .and_then(|w| w.chars().last())
            .and_then(|c| c.to_lowercase().next())
    }

    /// Whether `word` has already been played (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Check `word` against the chain rules without modifying the chain.
    ///
    /// Returns the normalized (trimmed, lowercased) word on success.
    pub fn check(&self, word: &str) -> CoreResult<String> {
        let word = word.trim().to_lowercase();
        if !is_chain_word(&word) {
            return Err(CoreError::InvalidWord(word));
        }
        if let Some(expected) = self.required_letter() {
            if !word.starts_with(expected) {
                return Err(CoreError::BrokenLink { word, expected });
            }
        }
        if self.words.contains(&word) {
            return Err(CoreError::AlreadyUsed(word));
        }
        Ok(word)
    }

    /// Append a word after checking it against the chain rules.
    pub fn push(&mut self, word: &str) -> CoreResult<()> {
        let word = self.check(word)?;
        self.words.push(word);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_chain_has_no_required_letter() {
        let chain = ChainState::new();
        assert!(chain.is_empty());
        assert_eq!(chain.required_letter(), None);
    }

    #[test]
    fn required_letter_follows_last_word() {
        let mut chain = ChainState::new();
        chain.push("Apple").unwrap();
        assert_eq!(chain.required_letter(), Some('e'));
        chain.push("egg").unwrap();
        assert_eq!(chain.required_letter(), Some('g'));
        assert_eq!(chain.words(), &["apple".to_string(), "egg".to_string()]);
    }

    #[test]
    fn push_rejects_broken_link() {
        let mut chain = ChainState::new();
        chain.push("apple").unwrap();
        let err = chain.push("banana").unwrap_err();
        assert_eq!(
            err,
            CoreError::BrokenLink {
                word: "banana".to_string(),
                expected: 'e',
            }
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn push_rejects_repeat_case_insensitive() {
        let mut chain = ChainState::new();
        chain.push("level").unwrap();
        let err = chain.push("LEVEL").unwrap_err();
        assert_eq!(err, CoreError::AlreadyUsed("level".to_string()));
        assert!(chain.contains("Level"));
    }

    #[test]
    fn push_rejects_bad_format() {
        let mut chain = ChainState::new();
        assert!(chain.push("a").is_err());
        assert!(chain.push("ice apple").is_err());
        assert!(chain.push("r2d2").is_err());
        assert!(chain.is_empty());
    }

    #[test]
    fn chain_word_predicate() {
        assert!(is_chain_word("ox"));
        assert!(!is_chain_word("x"));
        assert!(!is_chain_word(""));
        assert!(!is_chain_word("ice skating"));
    }

    proptest! {
        #[test]
        fn pushed_chain_keeps_invariants(words in prop::collection::vec("[a-z]{2,8}", 1..20)) {
            let mut chain = ChainState::new();
            for w in &words {
                let _ = chain.push(w);
            }
            let played = chain.words();
            for pair in played.windows(2) {
                let last = pair[0].chars().last().unwrap();
                prop_assert!(pair[1].starts_with(last));
            }
            let mut seen = std::collections::HashSet::new();
            for w in played {
                prop_assert!(seen.insert(w.clone()));
            }
        }
    }
}
