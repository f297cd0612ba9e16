//! Word legality checks.
//!
//! [`validate`] decides whether a candidate is a real word: a format
//! pre-check, then the oracle's yes/no answer, or a permissive spelling
//! heuristic when no oracle is configured. [`check_turn`] adds the chain
//! rules on top.

use serde::{Deserialize, Serialize};
use sr_core::{ChainState, CoreError};
use tracing::info;

use crate::oracle::prompts::{self, AFFIRMATIVE};
use crate::oracle::{TextOracle, consult};

/// Reason given for words that fail the format pre-check.
pub const INVALID_FORMAT: &str = "Invalid word format";

/// Reason given when the fallback heuristic accepts a word.
pub const VALID_WORD: &str = "Valid English word";

/// Longest run of non-vowels the heuristic tolerates.
pub const MAX_CONSONANT_RUN: usize = 4;

/// Short, very common words. Membership short-circuits to acceptance.
const COMMON_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "but",
    "his", "have", "had", "what", "said", "each", "which", "she", "do", "how", "their", "if",
    "up", "out", "many", "then", "them", "can", "would", "like", "into", "him", "time", "two",
    "more", "go", "no", "way", "could", "my", "than", "first", "been", "call", "who", "now",
    "find", "long", "down", "day", "did", "get", "come", "made", "may", "part", "over", "new",
    "sound", "take", "only", "little", "work", "know", "place", "year", "live", "me", "back",
    "give", "most", "very", "after", "thing", "our", "just", "name", "good", "man", "think",
    "say", "great", "where", "help", "through", "much", "before", "line", "right", "too",
    "mean", "old", "any", "same", "tell", "boy", "follow", "came", "want", "show", "also",
    "around", "form", "three", "small", "set", "put", "end", "why", "again", "turn", "here",
    "off", "went", "number", "men", "every", "found", "still", "between", "should", "home",
    "big", "air", "own", "under", "read", "last", "never", "us", "left", "along", "while",
    "might", "next", "below", "saw", "something", "thought", "both", "few", "those", "always",
    "looked", "large", "often", "together", "asked", "house", "world", "going", "school",
    "important", "until", "food", "keep", "children", "feet", "land", "side", "without",
    "once", "animal", "life", "enough", "took", "four", "head", "above", "kind", "began",
    "almost", "page", "got", "earth", "need", "far", "hand", "high", "mother", "light",
    "country", "father", "let", "night", "picture", "being", "study", "second", "soon",
    "story", "since", "white", "ever", "paper", "hard", "near", "better", "best", "across",
    "during", "today", "however", "sure", "knew", "try", "told", "young", "sun", "whole",
    "hear", "example", "heard", "several", "change", "answer", "room", "sea", "against", "top",
    "turned", "learn", "point", "city", "play", "toward", "five", "himself", "usually",
    "money", "seen", "car", "morning", "words", "family", "running", "red", "blue", "green",
    "yellow", "black", "orange", "purple", "apple", "banana", "cat", "dog", "tree", "water",
    "fire", "book", "chair", "table", "computer", "phone", "love",
];

/// Outcome of a legality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the word may be played.
    pub valid: bool,
    /// Why, when there is something to say.
    pub reason: Option<String>,
}

impl Verdict {
    /// A verdict accepting the word.
    pub fn valid(reason: Option<String>) -> Self {
        Self {
            valid: true,
            reason,
        }
    }

    /// A verdict rejecting the word for `reason`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    fn not_a_word(word: &str) -> Self {
        Self::invalid(format!("'{word}' is not a recognized English word"))
    }
}

/// Whether `word` passes the format pre-check: non-empty, alphabetic, and at
/// least two characters.
pub fn is_well_formed(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic) && word.chars().count() >= 2
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Noise filter used when no oracle is configured.
///
/// Rejects words where fewer than a third of the characters are distinct, and
/// words with more than [`MAX_CONSONANT_RUN`] non-vowels in a row. Everything
/// else is accepted. The common-word list only short-circuits acceptance and
/// never rejects anything.
pub fn heuristic_is_word(word: &str) -> bool {
    let word = word.trim().to_lowercase();
    let len = word.chars().count();

    let mut distinct: Vec<char> = word.chars().collect();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() * 3 < len {
        return false;
    }

    let mut run = 0;
    for c in word.chars() {
        if is_vowel(c) {
            run = 0;
        } else {
            run += 1;
            if run > MAX_CONSONANT_RUN {
                return false;
            }
        }
    }

    if COMMON_WORDS.contains(&word.as_str()) {
        return true;
    }
    true
}

/// Decide whether `word` is a real word. Never fails.
///
/// `topic` only gives context for logging; it is not enforced.
pub fn validate(oracle: Option<&dyn TextOracle>, word: &str, topic: &str) -> Verdict {
    let word = word.trim().to_lowercase();
    if !is_well_formed(&word) {
        return Verdict::invalid(INVALID_FORMAT);
    }

    match oracle {
        Some(oracle) => match consult(oracle, "validate", &prompts::is_real_word(&word)) {
            Ok(reply) => {
                let answer = reply.trim().to_uppercase();
                let valid = answer == AFFIRMATIVE;
                info!(%word, %topic, %answer, valid, "oracle word validation");
                if valid {
                    Verdict::valid(None)
                } else {
                    Verdict::not_a_word(&word)
                }
            }
            // Lenient on errors: a broken oracle must not block play.
            Err(_) => Verdict::valid(None),
        },
        None => {
            if heuristic_is_word(&word) {
                Verdict::valid(Some(VALID_WORD.to_string()))
            } else {
                Verdict::not_a_word(&word)
            }
        }
    }
}

/// Check a player's word for the current turn: chain link, repetition, then
/// [`validate`].
pub fn check_turn(
    oracle: Option<&dyn TextOracle>,
    word: &str,
    chain: &ChainState,
    topic: &str,
) -> Verdict {
    match chain.check(word) {
        Err(CoreError::BrokenLink { expected, .. }) => {
            Verdict::invalid(format!("Word must start with '{expected}'"))
        }
        Err(CoreError::AlreadyUsed(word)) => {
            Verdict::invalid(format!("'{word}' has already been used"))
        }
        Err(_) => Verdict::invalid(INVALID_FORMAT),
        Ok(word) => validate(oracle, &word, topic),
    }
}
