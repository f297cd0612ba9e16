//! Runtime configuration gathered from the environment and command line.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sr_engine::config::DEFAULT_ORACLE_TIMEOUT;
use sr_engine::oracle::gemini::DEFAULT_MODEL;
use sr_engine::{EngineConfig, GeminiOracle, TextOracle, WordEngine};
use sr_ledger::ScoreLedger;
use tracing::warn;

/// Score file used when `SCORES_FILE` is unset.
pub const DEFAULT_SCORES_FILE: &str = "game_scores.json";

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub scores_file: PathBuf,
    pub oracle_timeout: Duration,
    pub seed: Option<u64>,
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
            seed: None,
            offline: false,
        }
    }
}

impl AppConfig {
    /// Read `GEMINI_API_KEY`, `GEMINI_MODEL`, `SCORES_FILE`, and
    /// `SR_ORACLE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self {
            api_key: get("GEMINI_API_KEY"),
            ..Self::default()
        };
        if let Some(model) = get("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(path) = get("SCORES_FILE") {
            config.scores_file = PathBuf::from(path);
        }
        if let Some(raw) = get("SR_ORACLE_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.oracle_timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid SR_ORACLE_TIMEOUT_SECS"),
            }
        }
        config
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, seed: Option<u64>, scores: Option<PathBuf>, offline: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(path) = scores {
            self.scores_file = path;
        }
        self.offline |= offline;
        self
    }

    /// Engine settings derived from this config.
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default().with_oracle_timeout(self.oracle_timeout);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// The oracle to use, if an API key is set and the oracle is not disabled.
    pub fn oracle(&self) -> Option<Arc<dyn TextOracle>> {
        if self.offline {
            return None;
        }
        let key = self.api_key.as_deref()?;
        match GeminiOracle::new(key, self.oracle_timeout) {
            Ok(oracle) => Some(Arc::new(oracle.with_model(self.model.as_str()))),
            Err(e) => {
                warn!(error = %e, "could not create the text oracle; using fallbacks");
                None
            }
        }
    }

    /// A word engine configured from this config.
    pub fn engine(&self) -> WordEngine {
        WordEngine::new(&self.engine_config(), self.oracle())
    }

    /// The score ledger stored at [`scores_file`](Self::scores_file).
    pub fn ledger(&self) -> ScoreLedger {
        ScoreLedger::open_file(&self.scores_file)
    }
}
