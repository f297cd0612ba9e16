//! Error types for the score ledger.

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur while recording or persisting scores.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submission was rejected before reaching the ledger.
    #[error("{0}")]
    Rejected(#[from] sr_core::CoreError),

    /// Reading or writing the score file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The score file could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store lock was poisoned by a panicking writer.
    #[error("score store lock was poisoned")]
    LockPoisoned,
}
