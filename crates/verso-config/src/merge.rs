//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Config, ConfigError, CorpusSettings, Settings,
    parse::{RawConfig, RawSettings},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// the working directory), lowest precedence last (global config). For every scalar the
/// first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs);
    let corpus = merge_corpus_settings(configs)?;

    Ok(Config { settings, corpus })
}

/// Merges general settings.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.highlight {
        result.highlight = v;
    }
    if let Some(ref v) = raw.prompt {
        result.prompt = v.clone();
    }
}

/// Merges corpus settings, resolving the winning path against its own config file.
fn merge_corpus_settings(configs: &[ParsedConfig]) -> Result<CorpusSettings, ConfigError> {
    let mut result = CorpusSettings::default();

    let path_source = configs.iter().find_map(|parsed| {
        let path = parsed.config.corpus.as_ref()?.path.as_deref()?;
        Some((parsed, path))
    });
    if let Some((parsed, path)) = path_source {
        let resolved = resolve_corpus_path(path, parsed.dir())?;
        debug!(
            config = %parsed.path.display(),
            corpus = %resolved.display(),
            "resolved corpus path"
        );
        result.path = Some(resolved);
    }

    if let Some(name) = configs
        .iter()
        .find_map(|parsed| parsed.config.corpus.as_ref()?.name.as_deref())
    {
        result.name = name.to_string();
    }

    Ok(result)
}
