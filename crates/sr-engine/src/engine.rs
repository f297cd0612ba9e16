//! The engine facade that owns the oracle, word bank, and RNG.

use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use sr_core::{ChainState, Topic};
use tracing::info;

use crate::config::EngineConfig;
use crate::legality::{self, Verdict};
use crate::lexicon::WordBank;
use crate::oracle::{DeadlineOracle, TextOracle};
use crate::{topic, turn};

/// Whether the engine has an oracle to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleStatus {
    /// An oracle is configured and will be asked first.
    Available,
    /// No oracle; every answer comes from local fallbacks.
    Fallback,
}

impl fmt::Display for OracleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Topic selection, next-word generation, and legality checks behind one
/// handle.
pub struct WordEngine {
    oracle: Option<Arc<dyn TextOracle>>,
    bank: WordBank,
    rng: StdRng,
}

impl WordEngine {
    /// Create an engine. A supplied oracle is wrapped so no call outlives
    /// `config.oracle_timeout`.
    pub fn new(config: &EngineConfig, oracle: Option<Arc<dyn TextOracle>>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let oracle = oracle.map(|inner| {
            Arc::new(DeadlineOracle::new(inner, config.oracle_timeout)) as Arc<dyn TextOracle>
        });
        let engine = Self {
            oracle,
            bank: WordBank::builtin(),
            rng,
        };
        info!(oracle = %engine.status(), "word engine ready");
        engine
    }

    /// Create an engine without an oracle.
    pub fn offline(config: &EngineConfig) -> Self {
        Self::new(config, None)
    }

    /// Replace the word bank.
    pub fn with_bank(mut self, bank: WordBank) -> Self {
        self.bank = bank;
        self
    }

    /// The word bank used for fallbacks.
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Whether an oracle is configured.
    pub fn status(&self) -> OracleStatus {
        if self.oracle.is_some() {
            OracleStatus::Available
        } else {
            OracleStatus::Fallback
        }
    }

    /// Pick a game topic.
    pub fn select_topic(&mut self) -> Topic {
        topic::select_topic(self.oracle.as_deref(), &mut self.rng)
    }

    /// Produce the next chain word for `topic`.
    pub fn next_word(&mut self, topic: &str, required: Option<char>, used: &[String]) -> String {
        turn::next_word(
            self.oracle.as_deref(),
            &self.bank,
            topic,
            required,
            used,
            &mut self.rng,
        )
    }

    /// Decide whether `word` is a real word.
    pub fn validate(&self, word: &str, topic: &str) -> Verdict {
        legality::validate(self.oracle.as_deref(), word, topic)
    }

    /// Check `word` as the next move in `chain`.
    pub fn check_turn(&self, word: &str, chain: &ChainState, topic: &str) -> Verdict {
        legality::check_turn(self.oracle.as_deref(), word, chain, topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OracleError, OracleResult};
    use crate::lexicon::seed_word;
    use std::thread;
    use std::time::{Duration, Instant};

    struct Stalled;

    impl TextOracle for Stalled {
        fn complete(&self, _prompt: &str) -> OracleResult<String> {
            thread::sleep(Duration::from_secs(3));
            Err(OracleError::EmptyReply)
        }
    }

    struct Fixed(&'static str);

    impl TextOracle for Fixed {
        fn complete(&self, _prompt: &str) -> OracleResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn offline() -> WordEngine {
        WordEngine::offline(&EngineConfig::default().with_seed(42))
    }

    #[test]
    fn status_reflects_oracle() {
        assert_eq!(offline().status(), OracleStatus::Fallback);
        let engine = WordEngine::new(&EngineConfig::default(), Some(Arc::new(Fixed("x"))));
        assert_eq!(engine.status(), OracleStatus::Available);
        assert_eq!(OracleStatus::Fallback.to_string(), "fallback");
    }

    #[test]
    fn fruits_chain_scenario() {
        let mut engine = offline();
        let first = engine.next_word("fruits", None, &[]);
        assert!(engine.bank().words_for("fruits").contains(&first));

        let mut chain = ChainState::new();
        chain.push(&first).unwrap();
        let letter = chain.required_letter().unwrap();

        let exhausted: Vec<String> = engine
            .bank()
            .words_for("fruits")
            .iter()
            .filter(|w| w.starts_with(letter))
            .cloned()
            .chain(std::iter::once(first.clone()))
            .collect();
        let next = engine.next_word("fruits", Some(letter), &exhausted);
        assert_eq!(next, seed_word(letter));
    }

    #[test]
    fn stalled_oracle_degrades_within_timeout() {
        let config = EngineConfig::default()
            .with_seed(1)
            .with_oracle_timeout(Duration::from_millis(100));
        let mut engine = WordEngine::new(&config, Some(Arc::new(Stalled)));

        let start = Instant::now();
        let word = engine.next_word("cars", Some('k'), &[]);
        assert_eq!(word, "kia");
        assert!(engine.select_topic().is_predefined());
        // Lenient on oracle errors.
        assert!(engine.validate("zzzzzz", "cars").valid);
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn oracle_answers_flow_through() {
        let config = EngineConfig::default().with_seed(3);
        let mut engine = WordEngine::new(&config, Some(Arc::new(Fixed("YES"))));
        assert!(engine.validate("zzzzzz", "cars").valid);
        assert_eq!(engine.next_word("anything", None, &[]), "yes");
        assert_eq!(engine.select_topic().as_str(), "yes");
    }

    #[test]
    fn custom_bank_is_used() {
        let mut engine = offline().with_bank(WordBank::new(["quartz"]));
        assert_eq!(engine.next_word("rocks", Some('q'), &[]), "quartz");
    }
}
