use crate::config::AppConfig;

pub fn run(
    config: &AppConfig,
    topic: &str,
    last: Option<&str>,
    used: &[String],
) -> Result<(), String> {
    let topic = super::parse_topic(topic)?;

    let mut history: Vec<String> = used
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    let required = match last {
        Some(last) => {
            let last = last.trim().to_lowercase();
            let letter = last
                .chars()
                .last()
                .ok_or_else(|| "--last must not be empty".to_string())?;
            if !history.contains(&last) {
                history.push(last);
            }
            Some(letter)
        }
        None => None,
    };

    let mut engine = config.engine();
    println!("{}", engine.next_word(topic.as_str(), required, &history));
    Ok(())
}
