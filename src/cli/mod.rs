//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sizer")]
#[command(author, version, about = "Position sizing calculators for discretionary trading")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Size a trade from a percentage-of-account risk budget
    TotalRisk(TotalRiskArgs),
    /// Size a trade from a fixed dollar risk
    DollarRisk(DollarRiskArgs),
    /// Size a trade from a percentage-of-account position allocation
    PositionPercent(PositionPercentArgs),
    /// Run every trade in a CSV file and print the session history
    Batch(BatchArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct TotalRiskArgs {
    /// Account value in dollars
    #[arg(short, long, allow_hyphen_values = true)]
    pub account_value: f64,

    /// Percentage of the account to risk (0-100)
    #[arg(short, long, allow_hyphen_values = true)]
    pub risk: f64,

    /// Entry price
    #[arg(short, long, allow_hyphen_values = true)]
    pub entry: f64,

    /// Stop-loss price
    #[arg(short, long, allow_hyphen_values = true)]
    pub stop: f64,

    /// Maximum number of concurrent positions
    #[arg(short, long)]
    pub max_positions: Option<u32>,

    /// Ticker symbol (display only)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct DollarRiskArgs {
    /// Dollars to risk on the trade
    #[arg(short, long, allow_hyphen_values = true)]
    pub dollar_risk: f64,

    /// Entry price
    #[arg(short, long, allow_hyphen_values = true)]
    pub entry: f64,

    /// Stop-loss price
    #[arg(short, long, allow_hyphen_values = true)]
    pub stop: f64,

    /// Account size, to show the position as a share of the account
    #[arg(long, allow_hyphen_values = true)]
    pub account_size: Option<f64>,

    /// Ticker symbol (display only)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct PositionPercentArgs {
    /// Account value in dollars
    #[arg(short, long, allow_hyphen_values = true)]
    pub account_value: f64,

    /// Percentage of the account allocated to the position (0-100)
    #[arg(short, long, allow_hyphen_values = true)]
    pub percent: f64,

    /// Entry price
    #[arg(short, long, allow_hyphen_values = true)]
    pub entry: f64,

    /// Stop-loss price
    #[arg(short, long, allow_hyphen_values = true)]
    pub stop: f64,

    /// Ticker symbol (display only)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct BatchArgs {
    /// CSV file with one trade per row
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Save the session history to a CSV file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
