use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The fixed topic set used when no oracle suggestion is available.
pub const TOPICS: &[&str] = &[
    "fruits",
    "vegetables",
    "animals",
    "colors",
    "countries",
    "cities",
    "programming languages",
    "movies",
    "books",
    "sports",
    "cars",
    "flowers",
    "musical instruments",
    "planets",
    "professions",
    "food",
    "drinks",
    "games",
    "electronics",
    "clothes",
    "emotions",
    "weather",
    "seasons",
];

/// Most space-separated tokens an oracle-suggested topic may have.
pub const MAX_SUGGESTED_TOKENS: usize = 3;

/// A short lowercase label for the category a game is played in.
///
/// Chosen once per game and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Create a topic from a caller-supplied label. The label is trimmed and
    /// lowercased; an empty label is rejected.
    pub fn new(label: &str) -> CoreResult<Self> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Err(CoreError::InvalidTopic(label));
        }
        Ok(Self(label))
    }

    /// Accept an oracle suggestion only if it has at most three words and is
    /// longer than two characters.
    pub fn from_suggestion(raw: &str) -> Option<Self> {
        let label = raw.trim().to_lowercase();
        let tokens = label.split_whitespace().count();
        if tokens == 0 || tokens > MAX_SUGGESTED_TOKENS || label.chars().count() <= 2 {
            return None;
        }
        Some(Self(label))
    }

    /// The fixed topic at `index`, wrapping around the end of [`TOPICS`].
    pub fn predefined(index: usize) -> Self {
        Self(TOPICS[index % TOPICS.len()].to_string())
    }

    /// The topic label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this topic is one of the fixed [`TOPICS`].
    pub fn is_predefined(&self) -> bool {
        TOPICS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
