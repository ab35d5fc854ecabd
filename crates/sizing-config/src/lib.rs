//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, HistorySettings, LoggingConfig};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use std::path::Path;
use thiserror::Error;

/// Prefix for environment overrides, e.g. `SIZER__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SIZER";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}

/// Load configuration from an optional file and the environment.
///
/// Without a file, defaults apply and only the environment is consulted.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    finish(builder)
}

/// Load configuration from TOML text and the environment.
pub fn load_config_str(contents: &str) -> Result<AppConfig, SettingsError> {
    finish(Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, SettingsError> {
    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.history.max_entries, None);
        assert_eq!(config.messages, sizing_core::Messages::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = load_config_str(
            r#"
            [app]
            name = "desk-sizer"

            [history]
            max_entries = 25

            [messages]
            fix_fields = "Fix the red fields."
            "#,
        )
        .unwrap();

        assert_eq!(config.app.name, "desk-sizer");
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.history.max_entries, Some(25));
        assert_eq!(config.messages.fix_fields, "Fix the red fields.");
        assert_eq!(
            config.messages.entry_stop_equal,
            "Entry price and stop loss cannot be equal."
        );
    }

    #[test]
    fn test_shipped_default_file_matches_defaults() {
        let config = load_config_str(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(config.app.name, AppSettings::default().name);
        assert!(!config.logging.is_json());
        assert_eq!(config.logging.file, None);
        assert_eq!(config.messages, sizing_core::Messages::default());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = load_config_str(&text).unwrap();
        assert_eq!(parsed.logging.format, config.logging.format);
        assert_eq!(parsed.messages, config.messages);
    }
}
