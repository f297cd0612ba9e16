//! Instruction templates sent to the oracle.

/// Token an affirmative dictionary answer must match after trimming and
/// upper-casing.
pub const AFFIRMATIVE: &str = "YES";

/// Ask for one topic suggestion.
pub fn topic() -> String {
    "Generate a single creative topic for a word game.\n\
     The topic should be something that has many related words.\n\
     Examples: fruits, animals, programming languages, movie genres, etc.\n\
     Respond with just the topic name, nothing else."
        .to_string()
}

/// Ask for the next chain word.
pub fn next_word(topic: &str, required: Option<char>, used: &[String]) -> String {
    match required {
        Some(letter) => {
            let used = if used.is_empty() {
                "none used yet".to_string()
            } else {
                used.join(", ")
            };
            format!(
                "You are playing a Shiritori word game about \"{topic}\".\n\
                 Generate a word that:\n\
                 1. Starts with the letter \"{}\"\n\
                 2. Is related to the topic \"{topic}\" (can be loosely related)\n\
                 3. Has not been used: {used}\n\
                 4. Is a real word\n\n\
                 Respond with just the word, nothing else.",
                letter.to_uppercase()
            )
        }
        None => format!(
            "You are starting a Shiritori word game about \"{topic}\".\n\
             Generate a word that:\n\
             1. Is related to the topic \"{topic}\" (can be loosely related)\n\
             2. Is a real word\n\
             3. Would be a good starting word for this topic\n\n\
             Respond with just the word, nothing else."
        ),
    }
}

/// Ask whether `word` is a real English word.
pub fn is_real_word(word: &str) -> String {
    format!(
        "Is \"{word}\" a real English word that exists in the dictionary?\n\n\
         Rules:\n\
         - Check if this is a legitimate English word\n\
         - Accept common words, proper nouns, and valid English terms\n\
         - Reject made-up words, nonsense, or gibberish\n\
         - Accept plurals, verb forms, and common variations\n\n\
         Word to check: \"{word}\"\n\n\
         Respond with only \"{AFFIRMATIVE}\" if it's a real English word, or \"NO\" if it's not a real word."
    )
}
