use crate::config::AppConfig;

pub fn run(config: &AppConfig) -> Result<(), String> {
    let mut engine = config.engine();
    println!("{}", engine.select_topic());
    Ok(())
}
