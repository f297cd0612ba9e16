//! Next-word generation under the chain rule.
//!
//! The oracle is asked first; its reply is used only if it passes
//! [`accept_oracle_word`]. Otherwise the word comes from the word bank via
//! [`fallback_word`].

use rand::Rng;
use rand::rngs::StdRng;
use sr_core::is_chain_word;
use tracing::{debug, info};

use crate::lexicon::{OPENING_WORDS, WordBank, seed_word};
use crate::oracle::{TextOracle, consult, prompts};

fn is_used(word: &str, used: &[String]) -> bool {
    let word = word.to_lowercase();
    used.iter().any(|u| u.trim().to_lowercase() == word)
}

/// Normalize an oracle reply and accept it only if it starts with
/// `required` (when given), is unused, longer than one character, and purely
/// alphabetic.
pub fn accept_oracle_word(reply: &str, required: Option<char>, used: &[String]) -> Option<String> {
    let word = reply.trim().to_lowercase();
    if let Some(letter) = required {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        if !word.starts_with(letter) {
            return None;
        }
    }
    if is_used(&word, used) || !is_chain_word(&word) {
        return None;
    }
    Some(word)
}

/// Pick a word from the bank.
///
/// Filters the topic's list to unused words starting with `required`, then
/// picks one at random. When nothing is left, returns the seed word for
/// `required`, or a random opening word when no letter is required.
pub fn fallback_word(
    bank: &WordBank,
    topic: &str,
    required: Option<char>,
    used: &[String],
    rng: &mut StdRng,
) -> String {
    let required = required.and_then(|c| c.to_lowercase().next());
    let candidates: Vec<&String> = bank
        .words_for(topic)
        .iter()
        .filter(|w| is_chain_word(w))
        .filter(|w| required.is_none_or(|c| w.starts_with(c)))
        .filter(|w| !is_used(w, used))
        .collect();

    if !candidates.is_empty() {
        return candidates[rng.random_range(0..candidates.len())].clone();
    }

    match required {
        Some(letter) => {
            let seed = seed_word(letter);
            debug!(%letter, seed, "word bank exhausted, using seed word");
            seed.to_string()
        }
        None => OPENING_WORDS[rng.random_range(0..OPENING_WORDS.len())].to_string(),
    }
}

/// Produce the next chain word. Never fails.
pub fn next_word(
    oracle: Option<&dyn TextOracle>,
    bank: &WordBank,
    topic: &str,
    required: Option<char>,
    used: &[String],
    rng: &mut StdRng,
) -> String {
    if let Some(oracle) = oracle {
        let prompt = prompts::next_word(topic, required, used);
        if let Ok(reply) = consult(oracle, "next_word", &prompt) {
            match accept_oracle_word(&reply, required, used) {
                Some(word) => return word,
                None => info!(reply = %reply.trim(), "rejected oracle word"),
            }
        }
    }
    fallback_word(bank, topic, required, used, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::ScriptedOracle;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn accept_rules() {
        assert_eq!(
            accept_oracle_word("  Eggplant\n", Some('e'), &[]),
            Some("eggplant".to_string())
        );
        assert_eq!(accept_oracle_word("banana", Some('e'), &[]), None);
        assert_eq!(accept_oracle_word("Egg", Some('e'), &used(&["egg"])), None);
        assert_eq!(accept_oracle_word("e", Some('e'), &[]), None);
        assert_eq!(accept_oracle_word("egg roll", Some('e'), &[]), None);
        assert_eq!(accept_oracle_word("Elderberry.", Some('e'), &[]), None);
        assert_eq!(accept_oracle_word("mango", None, &[]), Some("mango".to_string()));
    }

    #[test]
    fn used_words_fold_non_ascii_case() {
        assert_eq!(accept_oracle_word("éclair", Some('é'), &used(&["ÉCLAIR"])), None);
        assert_eq!(
            accept_oracle_word("Éclair", Some('É'), &[]),
            Some("éclair".to_string())
        );

        let bank = WordBank::new(["éclair", "émigré"]);
        for seed in 0..16 {
            let word = fallback_word(
                &bank,
                "pastry",
                None,
                &used(&["ÉCLAIR"]),
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(word, "émigré");
        }
    }

    #[test]
    fn fallback_opening_word_comes_from_topic_bank() {
        let bank = WordBank::builtin();
        let word = fallback_word(&bank, "fruits", None, &[], &mut rng());
        assert!(bank.words_for("fruits").contains(&word));
        assert!(is_chain_word(&word));
    }

    #[test]
    fn fallback_respects_letter_and_history() {
        let bank = WordBank::builtin();
        let word = fallback_word(&bank, "animals", Some('e'), &[], &mut rng());
        assert_eq!(word, "elephant");
        let word = fallback_word(&bank, "animals", Some('e'), &used(&["Elephant"]), &mut rng());
        assert_eq!(word, "egg");
    }

    #[test]
    fn fallback_skips_multiword_entries() {
        let bank = WordBank::builtin();
        for seed in 0..32 {
            let word = fallback_word(
                &bank,
                "sports",
                Some('i'),
                &[],
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(word, "ice");
        }
    }

    #[test]
    fn unseeded_letter_yields_terminal_word() {
        let bank = WordBank::new(Vec::<String>::new());
        assert_eq!(fallback_word(&bank, "x", Some('ß'), &[], &mut rng()), "end");
    }

    #[test]
    fn exhausted_opening_uses_opening_words() {
        let bank = WordBank::new(["solo"]);
        let word = fallback_word(&bank, "any", None, &used(&["solo"]), &mut rng());
        assert!(OPENING_WORDS.contains(&word.as_str()));
    }

    #[test]
    fn same_seed_same_choice() {
        let bank = WordBank::builtin();
        let a = fallback_word(&bank, "countries", None, &[], &mut StdRng::seed_from_u64(9));
        let b = fallback_word(&bank, "countries", None, &[], &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn oracle_answer_used_when_acceptable() {
        let oracle = ScriptedOracle::always("Eggplant");
        let word = next_word(
            Some(&oracle),
            &WordBank::builtin(),
            "vegetables",
            Some('e'),
            &used(&["apple"]),
            &mut rng(),
        );
        assert_eq!(word, "eggplant");
        let prompt = oracle.last_prompt();
        assert!(prompt.contains("\"E\""));
        assert!(prompt.contains("apple"));
    }

    #[test]
    fn rejected_oracle_answer_falls_back() {
        let oracle = ScriptedOracle::always("carrot");
        let word = next_word(
            Some(&oracle),
            &WordBank::builtin(),
            "vegetables",
            Some('e'),
            &[],
            &mut rng(),
        );
        assert_eq!(word, "eggplant");
    }

    #[test]
    fn failing_oracle_falls_back() {
        let oracle = ScriptedOracle::failing();
        let word = next_word(
            Some(&oracle),
            &WordBank::builtin(),
            "cars",
            Some('k'),
            &[],
            &mut rng(),
        );
        assert_eq!(word, "kia");
    }

    proptest! {
        #[test]
        fn fallback_output_obeys_chain_rule(
            topic in prop::sample::select(vec!["fruits", "animals", "colors", "countries", "movies", "cars", "unknown"]),
            letter in prop::char::range('a', 'z'),
            seed in any::<u64>(),
        ) {
            let bank = WordBank::builtin();
            let mut rng = StdRng::seed_from_u64(seed);
            let bank_has_match = bank
                .words_for(topic)
                .iter()
                .any(|w| is_chain_word(w) && w.starts_with(letter));
            let word = fallback_word(&bank, topic, Some(letter), &[], &mut rng);
            prop_assert!(is_chain_word(&word));
            if bank_has_match {
                prop_assert!(word.starts_with(letter));
                prop_assert!(bank.words_for(topic).contains(&word));
            } else {
                prop_assert_eq!(word.as_str(), seed_word(letter));
            }
        }

        #[test]
        fn fallback_never_repeats_when_bank_has_room(
            seed in any::<u64>(),
            taken in prop::collection::vec(prop::sample::select(DEFAULT_TEST_WORDS.to_vec()), 0..5),
        ) {
            let bank = WordBank::builtin();
            let used: Vec<String> = taken.iter().map(|w| w.to_string()).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let word = fallback_word(&bank, "animals", None, &used, &mut rng);
            prop_assert!(!used.contains(&word));
        }
    }

    const DEFAULT_TEST_WORDS: &[&str] = &["ant", "bear", "cat", "dog", "elephant", "fox"];
}
