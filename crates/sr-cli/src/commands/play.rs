use std::io::{self, BufRead, Write};

use colored::Colorize;
use sr_engine::{EngineMove, GameSession};

use crate::config::AppConfig;

pub fn run(
    config: &AppConfig,
    topic: Option<&str>,
    turns: Option<usize>,
    save: bool,
) -> Result<(), String> {
    let mut engine = config.engine();
    let topic = match topic {
        Some(raw) => super::parse_topic(raw)?,
        None => engine.select_topic(),
    };
    let mut game = GameSession::new(topic);

    println!("  {} Shiritori", "Starting".bold());
    println!("  Topic: {} | Oracle: {}", game.topic(), engine.status());
    println!("  Each word must start with the last letter of the previous one.");
    println!("  Type 'quit' to stop.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !game.is_over() {
        if turns.is_some_and(|n| game.player_words().len() >= n) {
            break;
        }

        match game.chain().required_letter() {
            Some(letter) => print!("[{letter}] > "),
            None => print!("> "),
        }
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let verdict = game.play(&engine, input).map_err(|e| e.to_string())?;
        if !verdict.valid {
            let reason = verdict.reason.unwrap_or_else(|| "word not accepted".to_string());
            println!("  {}\n", reason.yellow());
            continue;
        }

        match game.respond(&mut engine).map_err(|e| e.to_string())? {
            EngineMove::Played(word) => println!("  {}\n", word.cyan()),
            EngineMove::Conceded(word) => println!(
                "  The engine tried '{word}' and cannot continue. {}\n",
                "You win!".green().bold()
            ),
        }
    }
    game.forfeit();

    println!();
    println!(
        "  Score: {} ({} words played, chain of {})",
        game.score(),
        game.player_words().len(),
        game.chain().len()
    );

    if save {
        config
            .ledger()
            .submit(game.submission())
            .map_err(|e| format!("could not save score: {e}"))?;
        println!("  Saved to {}", config.scores_file.display());
    }
    Ok(())
}
