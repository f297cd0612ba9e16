/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when a value breaks a data-model invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The game type was neither `number` nor `word`.
    #[error("Invalid game type")]
    InvalidGameType(String),

    /// The word is empty, non-alphabetic, or too short.
    #[error("invalid word: \"{0}\"")]
    InvalidWord(String),

    /// The word does not start with the letter the chain requires.
    #[error("\"{word}\" must start with '{expected}'")]
    BrokenLink {
        /// The offending word.
        word: String,
        /// The letter the chain required.
        expected: char,
    },

    /// The word has already been played in this chain.
    #[error("\"{0}\" has already been used")]
    AlreadyUsed(String),

    /// The topic label is empty or too long.
    #[error("invalid topic: \"{0}\"")]
    InvalidTopic(String),
}
