//! Fallback word bank.
//!
//! Per-topic word lists, single-letter seed words, and opening words used
//! whenever the oracle is missing or its answer is rejected.

use std::collections::BTreeMap;

/// Word returned when a required letter has no seed word.
pub const TERMINAL_WORD: &str = "end";

/// Words used to open a chain once the topic bank is exhausted.
pub const OPENING_WORDS: &[&str] = &["apple", "ball", "cat", "dog", "elephant"];

/// Words used for topics the bank does not know.
pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "elephant", "tiger", "rainbow", "ocean", "mountain", "star", "tree", "eagle",
    "earth",
];

const PROGRAMMING: &[&str] = &[
    "python",
    "java",
    "javascript",
    "kotlin",
    "lua",
    "ruby",
    "swift",
    "typescript",
    "erlang",
    "go",
];

const TOPIC_WORDS: &[(&str, &[&str])] = &[
    (
        "fruits",
        &[
            "apple",
            "banana",
            "cherry",
            "elderberry",
            "fig",
            "grape",
            "honeydew",
            "ice apple",
            // listed twice, so it comes up twice as often for 'e'
            "elderberry",
        ],
    ),
    (
        "animals",
        &[
            "ant", "bear", "cat", "dog", "elephant", "fox", "giraffe", "horse", "iguana",
            "jackal",
        ],
    ),
    (
        "colors",
        &[
            "red", "orange", "yellow", "blue", "green", "purple", "pink", "khaki", "indigo",
            "olive",
        ],
    ),
    (
        "countries",
        &[
            "australia",
            "brazil",
            "canada",
            "denmark",
            "egypt",
            "france",
            "germany",
            "hungary",
            "india",
            "japan",
        ],
    ),
    ("programming", PROGRAMMING),
    ("programming languages", PROGRAMMING),
    (
        "vegetables",
        &[
            "asparagus",
            "broccoli",
            "carrot",
            "daikon",
            "eggplant",
            "fennel",
            "garlic",
            "herbs",
            "iceberg lettuce",
            "jalapeno",
        ],
    ),
    (
        "movies",
        &[
            "avatar",
            "batman",
            "casablanca",
            "dune",
            "elf",
            "frozen",
            "gladiator",
            "hulk",
            "inception",
            "jaws",
        ],
    ),
    (
        "sports",
        &[
            "archery",
            "baseball",
            "cricket",
            "diving",
            "equestrian",
            "football",
            "golf",
            "hockey",
            "ice skating",
            "judo",
        ],
    ),
    (
        "cars",
        &[
            "audi",
            "bmw",
            "chevrolet",
            "dodge",
            "ferrari",
            "ford",
            "honda",
            "infiniti",
            "jaguar",
            "kia",
        ],
    ),
];

/// The seed word for `letter`, or [`TERMINAL_WORD`] if it has none.
pub fn seed_word(letter: char) -> &'static str {
    match letter.to_ascii_lowercase() {
        'a' => "apple",
        'b' => "ball",
        'c' => "cat",
        'd' => "dog",
        'e' => "egg",
        'f' => "fish",
        'g' => "game",
        'h' => "house",
        'i' => "ice",
        'j' => "jump",
        'k' => "kite",
        'l' => "lion",
        'm' => "moon",
        'n' => "nest",
        'o' => "ocean",
        'p' => "pen",
        'q' => "queen",
        'r' => "red",
        's' => "sun",
        't' => "tree",
        'u' => "umbrella",
        'v' => "van",
        'w' => "water",
        'x' => "box",
        'y' => "yes",
        'z' => "zoo",
        _ => TERMINAL_WORD,
    }
}

/// Topic-categorized word lists with a default list for unknown topics.
#[derive(Debug, Clone)]
pub struct WordBank {
    topics: BTreeMap<String, Vec<String>>,
    default: Vec<String>,
}

impl WordBank {
    /// An empty bank whose default list is `default`.
    pub fn new<I, S>(default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topics: BTreeMap::new(),
            default: default.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in bank.
    pub fn builtin() -> Self {
        TOPIC_WORDS
            .iter()
            .fold(Self::new(DEFAULT_WORDS.iter().copied()), |bank, (topic, words)| {
                bank.with_topic(topic, words.iter().copied())
            })
    }

    /// Add or replace the list for `topic`.
    pub fn with_topic<I, S>(mut self, topic: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics.insert(
            topic.to_lowercase(),
            words.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Whether the bank has a dedicated list for `topic`.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(&topic.to_lowercase())
    }

    /// The list for `topic`, or the default list if the topic is unknown.
    pub fn words_for(&self, topic: &str) -> &[String] {
        self.topics
            .get(&topic.to_lowercase())
            .unwrap_or(&self.default)
    }

    /// Topics with a dedicated list.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
