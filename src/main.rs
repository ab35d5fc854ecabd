//! Position sizing CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use sizing_engine::Calculator;
use sizing_report::{setup_logging, Session, SessionHistory};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sizing_config::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Setup logging
    let log_level = cli
        .log_level
        .map_or(config.logging.level.as_str(), |level| level.as_str());
    let json = cli.json_logs || config.logging.is_json();
    let _guard = setup_logging(
        log_level,
        json,
        config.logging.file.as_deref().map(Path::new),
    )?;

    let mut history = SessionHistory::new();
    if let Some(max) = config.history.max_entries {
        history = history.with_max_entries(max);
    }
    let mut session = Session::new(Calculator::new(config.messages.clone()), history);

    // Execute command
    match cli.command {
        Commands::TotalRisk(args) => cli::commands::total_risk::run(args, &mut session),
        Commands::DollarRisk(args) => cli::commands::dollar_risk::run(args, &mut session),
        Commands::PositionPercent(args) => {
            cli::commands::position_percent::run(args, &mut session)
        }
        Commands::Batch(args) => cli::commands::batch::run(args, &mut session),
        Commands::ValidateConfig => cli::commands::validate::run(&config),
    }
}
