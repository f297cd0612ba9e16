use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Format of the human-readable date stored alongside each entry.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Which game a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// The number-memory game.
    Number,
    /// The word-chain game.
    Word,
}

impl GameType {
    /// Parse a game type from its wire name (`number` or `word`).
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s {
            "number" => Ok(Self::Number),
            "word" => Ok(Self::Word),
            other => Err(CoreError::InvalidGameType(other.to_string())),
        }
    }

    /// Both game types.
    pub fn all() -> &'static [Self] {
        &[Self::Number, Self::Word]
    }

    /// The wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Word => "word",
        }
    }
}

impl FromStr for GameType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata that only makes sense for one game type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDetails {
    /// Number-memory game metadata.
    Number {
        /// Level reached.
        level: u32,
        /// Numeric range played, e.g. `"1-100"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
        /// Seconds the sequence was shown for memorization.
        #[serde(
            rename = "memoryTime",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        memory_time: Option<f64>,
    },
    /// Word-chain game metadata.
    Word {
        /// Words the player contributed.
        #[serde(rename = "wordsCount")]
        words_count: u32,
        /// Topic the game was played in.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
        /// Total length of the finished chain.
        #[serde(
            rename = "chainLength",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        chain_length: Option<u32>,
    },
}

impl EntryDetails {
    /// The game type these details belong to.
    pub fn game_type(&self) -> GameType {
        match self {
            Self::Number { .. } => GameType::Number,
            Self::Word { .. } => GameType::Word,
        }
    }
}

/// One finished game's result as it appears on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    /// Final score.
    pub score: u64,
    /// Creation time rendered as [`DATE_FORMAT`].
    pub date: String,
    /// Creation time.
    pub timestamp: NaiveDateTime,
    /// Seconds spent playing.
    pub time_played: u64,
    /// Game-specific metadata.
    #[serde(flatten)]
    pub details: EntryDetails,
}

impl ScoreEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(score: u64, time_played: u64, details: EntryDetails) -> Self {
        Self::at(Local::now().naive_local(), score, time_played, details)
    }

    /// Create an entry stamped with `timestamp`.
    pub fn at(
        timestamp: NaiveDateTime,
        score: u64,
        time_played: u64,
        details: EntryDetails,
    ) -> Self {
        Self {
            score,
            date: timestamp.format(DATE_FORMAT).to_string(),
            timestamp,
            time_played,
            details,
        }
    }

    /// The game type this entry belongs to.
    pub fn game_type(&self) -> GameType {
        self.details.game_type()
    }
}

fn default_level() -> u32 {
    1
}

/// The record an outer layer submits when a game ends.
///
/// Field names and defaults follow the score-saving payload of the web
/// client, so older clients that omit optional metadata still submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    /// `number` or `word`; anything else is rejected.
    pub game_type: String,
    /// Final score.
    #[serde(default)]
    pub score: u64,
    /// Level reached (number game).
    #[serde(default = "default_level")]
    pub level: u32,
    /// Words contributed (word game).
    #[serde(default)]
    pub words_count: u32,
    /// Seconds spent playing.
    #[serde(default)]
    pub time_played: u64,
    /// Numeric range (number game).
    #[serde(default)]
    pub range: Option<String>,
    /// Memorization time (number game).
    #[serde(default)]
    pub memory_time: Option<f64>,
    /// Topic (word game).
    #[serde(default)]
    pub topic: Option<String>,
    /// Chain length (word game).
    #[serde(default)]
    pub chain_length: Option<u32>,
}

impl ScoreSubmission {
    /// A word-game submission.
    pub fn word(score: u64, time_played: u64, topic: &str, words_count: u32, chain_length: u32) -> Self {
        Self {
            game_type: GameType::Word.as_str().to_string(),
            score,
            level: default_level(),
            words_count,
            time_played,
            range: None,
            memory_time: None,
            topic: Some(topic.to_string()),
            chain_length: Some(chain_length),
        }
    }

    /// Validate the game type and build the entry it describes, stamped with
    /// `timestamp`.
    ///
    /// Only the metadata belonging to the submitted game type is kept. Empty
    /// strings count as absent.
    pub fn into_entry_at(self, timestamp: NaiveDateTime) -> CoreResult<(GameType, ScoreEntry)> {
        let game_type = GameType::parse(&self.game_type)?;
        let details = match game_type {
            GameType::Number => EntryDetails::Number {
                level: self.level,
                range: self.range.filter(|r| !r.is_empty()),
                memory_time: self.memory_time,
            },
            GameType::Word => EntryDetails::Word {
                words_count: self.words_count,
                topic: self.topic.filter(|t| !t.is_empty()),
                chain_length: self.chain_length,
            },
        };
        let entry = ScoreEntry::at(timestamp, self.score, self.time_played, details);
        Ok((game_type, entry))
    }

    /// Like [`into_entry_at`](Self::into_entry_at), stamped with the current
    /// local time.
    pub fn into_entry(self) -> CoreResult<(GameType, ScoreEntry)> {
        self.into_entry_at(Local::now().naive_local())
    }
}
