//! Core types for Shiritori: topics, word chains, and score entries.
//!
//! This crate holds the data model shared by the gameplay engine and the
//! score ledger. It performs no I/O and owns no randomness.

/// Word chains and the linking rule between consecutive words.
pub mod chain;
/// Error types used throughout the crate.
pub mod error;
/// Finished-game records and the submission payload that produces them.
pub mod score;
/// Game topics and the fixed topic set.
pub mod topic;

/// Re-export chain types.
pub use chain::{ChainState, is_chain_word};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export score types.
pub use score::{EntryDetails, GameType, ScoreEntry, ScoreSubmission};
/// Re-export topic types.
pub use topic::{TOPICS, Topic};
