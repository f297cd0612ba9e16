//! A single word-chain game between a player and the engine.
//!
//! `GameSession` owns the topic and chain for one game. The player's words go
//! through the legality checker; the engine's replies come from the turn
//! generator. The game ends when the engine cannot produce a legal word or
//! the player gives up.

use std::time::Instant;

use sr_core::{ChainState, ScoreSubmission, Topic};
use tracing::info;

use crate::engine::WordEngine;
use crate::error::{EngineError, EngineResult};
use crate::legality::Verdict;

/// What the engine did on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineMove {
    /// The engine extended the chain with this word.
    Played(String),
    /// The engine's best word breaks the chain rules; the player wins.
    Conceded(String),
}

/// One game in progress.
#[derive(Debug)]
pub struct GameSession {
    topic: Topic,
    chain: ChainState,
    player_words: Vec<String>,
    started: Instant,
    over: bool,
}

impl GameSession {
    /// Start a game in `topic`.
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            chain: ChainState::new(),
            player_words: Vec::new(),
            started: Instant::now(),
            over: false,
        }
    }

    /// The game's topic.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Every word played so far, by either side.
    pub fn chain(&self) -> &ChainState {
        &self.chain
    }

    /// Words the player has contributed.
    pub fn player_words(&self) -> &[String] {
        &self.player_words
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Submit the player's word. A valid word is added to the chain.
    pub fn play(&mut self, engine: &WordEngine, word: &str) -> EngineResult<Verdict> {
        if self.over {
            return Err(EngineError::GameOver);
        }
        let verdict = engine.check_turn(word, &self.chain, self.topic.as_str());
        if verdict.valid {
            let word = word.trim().to_lowercase();
            self.chain.push(&word)?;
            self.player_words.push(word);
        }
        Ok(verdict)
    }

    /// Let the engine take its turn.
    pub fn respond(&mut self, engine: &mut WordEngine) -> EngineResult<EngineMove> {
        if self.over {
            return Err(EngineError::GameOver);
        }
        let word = engine.next_word(
            self.topic.as_str(),
            self.chain.required_letter(),
            self.chain.words(),
        );
        match self.chain.push(&word) {
            Ok(()) => Ok(EngineMove::Played(word)),
            Err(e) => {
                info!(%word, reason = %e, "engine cannot continue the chain");
                self.over = true;
                Ok(EngineMove::Conceded(word))
            }
        }
    }

    /// End the game on the player's behalf.
    pub fn forfeit(&mut self) {
        self.over = true;
    }

    /// Score for this game: total letters across the player's words.
    pub fn score(&self) -> u64 {
        self.player_words
            .iter()
            .map(|w| w.chars().count() as u64)
            .sum()
    }

    /// Whole seconds since the game started.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// The word-game score record for this game.
    pub fn submission(&self) -> ScoreSubmission {
        ScoreSubmission::word(
            self.score(),
            self.elapsed_secs(),
            self.topic.as_str(),
            self.player_words.len() as u32,
            self.chain.len() as u32,
        )
    }
}
