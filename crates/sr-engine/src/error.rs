//! Error types for the gameplay engine.

use std::time::Duration;

use thiserror::Error;

/// Result type for oracle calls.
pub type OracleResult<T> = Result<T, OracleError>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Ways a text-oracle call can fail.
///
/// These never leave the engine: every caller turns them into a fallback.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The request could not be sent or the connection failed.
    #[error("oracle transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("oracle returned status {0}")]
    Status(u16),

    /// The reply could not be decoded.
    #[error("malformed oracle reply: {0}")]
    Malformed(String),

    /// The reply decoded but contained no text.
    #[error("oracle reply was empty")]
    EmptyReply,

    /// The call did not finish before its deadline.
    #[error("oracle timed out after {0:?}")]
    Timeout(Duration),

    /// The worker running the call went away without answering.
    #[error("oracle call aborted")]
    Aborted,
}

impl From<reqwest::Error> for OracleError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::Transport(format!("timed out: {e}"));
        }
        if e.is_decode() {
            return Self::Malformed(e.to_string());
        }
        Self::Transport(e.to_string())
    }
}

/// Errors that can occur while running a game session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,

    /// A data-model invariant was violated.
    #[error("{0}")]
    Core(#[from] sr_core::CoreError),
}
