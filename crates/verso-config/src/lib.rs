//! Configuration system for verso.
//!
//! verso uses TOML configuration files named `.verso.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.verso.toml` files found, then loading `~/.verso.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_corpus_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
use tracing::debug;

/// Default noun used in result summaries.
pub const DEFAULT_CORPUS_NAME: &str = "sonnets";

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Top-level merged configuration for verso.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Corpus settings.
    pub corpus: CorpusSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.verso.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                debug!(path = %path.display(), "parsing config file");
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.verso.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            settings: &self.settings,
            corpus: &self.corpus,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for verso.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Whether interactive sessions start with highlighting enabled.
    pub highlight: bool,
    /// Interactive prompt.
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Which documents to search and how to describe them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Resolved corpus file. `None` selects the bundled corpus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Noun used in result summaries.
    pub name: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: None,
            name: DEFAULT_CORPUS_NAME.to_string(),
        }
    }
}

/// Borrowed view of the settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Corpus settings.
    corpus: &'a CorpusSettings,
}
