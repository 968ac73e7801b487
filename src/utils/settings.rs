use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `PLACE_ANONYMIZER_LOG_DIR`.
pub const ENV_PREFIX: &str = "PLACE_ANONYMIZER";

/// How input lines are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One free-text field per line
    #[default]
    Text,
    /// One JSON record per line; every string value is anonymized
    Jsonl,
}

/// Runtime settings for the command-line tool
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory to write log files in
    pub log_dir: String,

    /// Default input format when none is given on the command line
    pub input_format: InputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            input_format: InputFormat::Text,
        }
    }
}

impl Settings {
    /// Loads settings from an optional file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}
