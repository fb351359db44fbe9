//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use qbank_batch::BatchConfig;
use qbank_rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON collections
    #[serde(default = "default_collections_dir")]
    pub collections_dir: PathBuf,

    /// TOML rule table used instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Batch run settings
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".qbank").join("config.toml"))
    }

    /// Load configuration from `explicit`, or from the default location.
    ///
    /// An explicitly named file must exist; a missing default file yields
    /// the defaults.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = Self::path()?;
                if !path.exists() {
                    debug!(path = %path.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        debug!(path = %path.display(), "Loading config");
        Self::from_toml_str(&fs::read_to_string(&path)?)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.batch.validate()?;
        Ok(config)
    }

    /// Collection directory, preferring a command-line override.
    pub fn collections_dir(&self, overridden: Option<PathBuf>) -> PathBuf {
        overridden.unwrap_or_else(|| self.collections_dir.clone())
    }

    /// Load the rule table, preferring a command-line override.
    ///
    /// Falls back to the configured `rules_file`, then the built-in table.
    pub fn rule_set(&self, overridden: Option<&Path>) -> Result<RuleSet> {
        match overridden.or(self.rules_file.as_deref()) {
            Some(path) => {
                debug!(path = %path.display(), "Loading rule table");
                Ok(RuleSet::from_file(path)?)
            }
            None => Ok(RuleSet::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collections_dir: default_collections_dir(),
            rules_file: None,
            settings: Settings::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_collections_dir() -> PathBuf {
    PathBuf::from("questions")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
