//! Validate configuration command.

use anyhow::Result;
use sizing_config::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    match config.history.max_entries {
        Some(max) => println!("History: last {} calculations", max),
        None => println!("History: unbounded"),
    }
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml()?);

    Ok(())
}
