use colored::Colorize;

use crate::config::AppConfig;

pub fn run(config: &AppConfig, word: &str, topic: &str, json: bool) -> Result<(), String> {
    let topic = super::parse_topic(topic)?;
    let verdict = config.engine().validate(word, topic.as_str());

    if json {
        let out = serde_json::to_string_pretty(&verdict).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let label = if verdict.valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    };
    match verdict.reason {
        Some(reason) => println!("  {label}: {reason}"),
        None => println!("  {label}"),
    }
    Ok(())
}
