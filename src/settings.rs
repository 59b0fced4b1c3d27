use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::parser::ParseOptions;

/// Defaults read from `ROADMAP_*` environment variables. CLI flags win over these.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub strict_weeks: bool,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_weeks: false,
            pretty: default_pretty(),
            output_dir: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("ROADMAP").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_weeks: self.strict_weeks,
        }
    }
}
