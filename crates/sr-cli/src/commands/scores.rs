use comfy_table::{ContentArrangement, Table};
use sr_core::{EntryDetails, GameType, ScoreEntry, ScoreSubmission};

use crate::config::AppConfig;

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn render(game: GameType, entries: &[ScoreEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    match game {
        GameType::Number => {
            table.set_header(vec!["#", "Score", "Level", "Range", "Memory (s)", "Time (s)", "Date"])
        }
        GameType::Word => {
            table.set_header(vec!["#", "Score", "Words", "Topic", "Chain", "Time (s)", "Date"])
        }
    };

    for (rank, entry) in entries.iter().enumerate() {
        let (a, b, c) = match &entry.details {
            EntryDetails::Number {
                level,
                range,
                memory_time,
            } => (level.to_string(), or_dash(range.as_ref()), or_dash(*memory_time)),
            EntryDetails::Word {
                words_count,
                topic,
                chain_length,
            } => (
                words_count.to_string(),
                or_dash(topic.as_ref()),
                or_dash(*chain_length),
            ),
        };
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.score.to_string(),
            a,
            b,
            c,
            entry.time_played.to_string(),
            entry.date.clone(),
        ]);
    }
    table
}

pub fn list(config: &AppConfig, game: GameType, json: bool) -> Result<(), String> {
    let entries = config.ledger().top(game);

    if json {
        let out = serde_json::to_string_pretty(&serde_json::json!({ "scores": entries }))
            .map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("  No {game} game scores yet.");
        return Ok(());
    }

    println!("{}", render(game, &entries));
    Ok(())
}

pub fn add(config: &AppConfig, submission: &str) -> Result<(), String> {
    let submission: ScoreSubmission =
        serde_json::from_str(submission).map_err(|e| format!("invalid submission: {e}"))?;
    let score = submission.score;
    let game = config.ledger().submit(submission).map_err(|e| e.to_string())?;
    println!("  Recorded {score} on the {game} leaderboard.");
    Ok(())
}

pub fn clear(config: &AppConfig, game: GameType) -> Result<(), String> {
    config.ledger().clear(game).map_err(|e| e.to_string())?;
    println!("  Cleared the {game} leaderboard.");
    Ok(())
}
