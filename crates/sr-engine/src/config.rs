//! Configuration for the gameplay engine.

use std::time::Duration;

/// Default upper bound on a single oracle call.
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`WordEngine`](crate::WordEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible fallback choices. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Upper bound on a single oracle call before falling back.
    pub oracle_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the oracle timeout (at least one millisecond).
    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout.max(Duration::from_millis(1));
        self
    }
}
