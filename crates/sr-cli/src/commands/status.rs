use crate::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<(), String> {
    let engine = config.engine();
    let key = if config.api_key.is_some() { "set" } else { "not set" };

    println!("  oracle:      {}", engine.status());
    println!("  api key:     {key}");
    println!("  model:       {}", config.model);
    println!("  scores file: {}", config.scores_file.display());
    Ok(())
}
