//! Layered settings: built-in defaults, then an optional settings file, then
//! `BUCKINGHAM__*` environment variables. Command-line flags are applied last.

use crate::cli::Cli;
use serde::Deserialize;
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Latex,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub format: OutputFormat,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Config {
    /// Loads settings, reading `path` if given or `./buckingham.*` if present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("format", "plain")?
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?;

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("buckingham").required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix("BUCKINGHAM").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "unknown log level '{}' (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
