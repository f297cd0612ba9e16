//! Topic selection.

use rand::Rng;
use rand::rngs::StdRng;
use sr_core::{TOPICS, Topic};
use tracing::info;

use crate::oracle::{TextOracle, consult, prompts};

/// Pick a topic uniformly from the fixed topic set.
pub fn fallback_topic(rng: &mut StdRng) -> Topic {
    Topic::predefined(rng.random_range(0..TOPICS.len()))
}

/// Pick a game topic: an acceptable oracle suggestion, or a random fixed
/// topic. Never fails.
pub fn select_topic(oracle: Option<&dyn TextOracle>, rng: &mut StdRng) -> Topic {
    if let Some(oracle) = oracle {
        if let Ok(reply) = consult(oracle, "select_topic", &prompts::topic()) {
            match Topic::from_suggestion(&reply) {
                Some(topic) => return topic,
                None => info!(reply = %reply.trim(), "rejected oracle topic"),
            }
        }
    }
    fallback_topic(rng)
}
