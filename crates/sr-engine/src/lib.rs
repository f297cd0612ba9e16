//! Word-chain gameplay engine for Shiritori.
//!
//! Provides topic selection, next-word generation under the chain rule, and
//! word legality checks. Every operation first consults an optional text
//! oracle under a strict acceptance rule and falls back to deterministic
//! local logic (word bank, seed words, a permissive spelling heuristic)
//! whenever the oracle is missing, fails, or answers badly. No oracle failure
//! ever reaches the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod legality;
pub mod lexicon;
pub mod oracle;
pub mod session;
pub mod topic;
pub mod turn;

pub use config::EngineConfig;
pub use engine::{OracleStatus, WordEngine};
pub use error::{EngineError, EngineResult, OracleError, OracleResult};
pub use legality::Verdict;
pub use lexicon::WordBank;
pub use oracle::{DeadlineOracle, GeminiOracle, TextOracle};
pub use session::{EngineMove, GameSession};
