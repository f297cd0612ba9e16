//! Terminal frontend for Shiritori, the word-chain game.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sr_core::GameType;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "sr",
    about = "Shiritori: chain words where each starts with the last letter of the one before",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible topics and fallback words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Score file (default: $SCORES_FILE or game_scores.json)
    #[arg(long, global = true)]
    scores: Option<PathBuf>,

    /// Never contact the text oracle, even when an API key is set
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a topic for a new game
    Topic,

    /// Suggest the next word of a chain
    Word {
        /// Topic the chain is played in
        topic: String,

        /// Most recent word; the suggestion starts with its last letter
        #[arg(short, long)]
        last: Option<String>,

        /// Words already played (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// Check whether a word is acceptable
    Validate {
        /// Word to check
        word: String,

        /// Topic of the game
        #[arg(short, long, default_value = "general")]
        topic: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a word chain against the engine
    Play {
        /// Topic to play (default: let the engine pick)
        #[arg(short, long)]
        topic: Option<String>,

        /// Stop after this many accepted player words
        #[arg(short = 'n', long)]
        turns: Option<usize>,

        /// Do not record the score when the game ends
        #[arg(long)]
        no_save: bool,
    },

    /// Show or edit the leaderboards
    Scores {
        #[command(subcommand)]
        action: ScoresAction,
    },

    /// Show oracle and storage configuration
    Status,
}

#[derive(Subcommand)]
enum ScoresAction {
    /// List a leaderboard, best first
    List {
        /// Game type: number or word
        game: GameType,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a score from a JSON submission
    Add {
        /// e.g. '{"gameType":"word","score":42,"wordsCount":5}'
        submission: String,
    },

    /// Remove every entry from a leaderboard
    Clear {
        /// Game type: number or word
        game: GameType,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(cli.seed, cli.scores, cli.offline);

    let result = match cli.command {
        Commands::Topic => commands::topic::run(&config),
        Commands::Word { topic, last, used } => {
            commands::word::run(&config, &topic, last.as_deref(), &used)
        }
        Commands::Validate { word, topic, json } => {
            commands::validate::run(&config, &word, &topic, json)
        }
        Commands::Play {
            topic,
            turns,
            no_save,
        } => commands::play::run(&config, topic.as_deref(), turns, !no_save),
        Commands::Scores { action } => match action {
            ScoresAction::List { game, json } => commands::scores::list(&config, game, json),
            ScoresAction::Add { submission } => commands::scores::add(&config, &submission),
            ScoresAction::Clear { game } => commands::scores::clear(&config, game),
        },
        Commands::Status => commands::status::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
