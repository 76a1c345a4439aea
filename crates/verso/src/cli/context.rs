//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use tracing::debug;
use verso_config::Config;
use verso_corpus::Corpus;

use super::args::GlobalArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Whether match highlighting is enabled initially.
    pub highlight: bool,
    /// Corpus override from the command line.
    corpus_override: Option<PathBuf>,
    /// Corpus loaded for this invocation.
    corpus: Option<Corpus>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(global: &GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self::with_config(cwd, config, global))
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(global: &GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self::with_config(cwd, Config::default(), global))
    }

    /// Builds a context from an already-loaded configuration.
    fn with_config(cwd: PathBuf, config: Config, global: &GlobalArgs) -> Self {
        let highlight = config.settings.highlight && !global.no_highlight;
        Self {
            cwd,
            config,
            highlight,
            corpus_override: global.corpus.clone(),
            corpus: None,
        }
    }

    /// Returns the corpus, loading it on first use.
    ///
    /// The command-line override wins over the configured path; with neither, the bundled
    /// corpus is used.
    pub fn corpus(&mut self) -> Result<&Corpus, ExitCode> {
        match self.corpus {
            Some(ref corpus) => Ok(corpus),
            None => {
                let corpus = self.load_corpus()?;
                Ok(self.corpus.insert(corpus))
            }
        }
    }

    /// Loads the corpus selected by the override or configuration.
    fn load_corpus(&self) -> Result<Corpus, ExitCode> {
        let path = self
            .corpus_override
            .as_ref()
            .map(|p| self.cwd.join(p))
            .or_else(|| self.config.corpus.path.clone());

        match path {
            Some(path) => load_corpus_or_failure(&path),
            None => {
                debug!("using bundled corpus");
                Ok(Corpus::bundled())
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads a corpus file or exits with an error.
fn load_corpus_or_failure(path: &Path) -> Result<Corpus, ExitCode> {
    Corpus::load(path).map_err(|e| {
        eprintln!("error: failed to load corpus: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn context(cwd: &Path, corpus: Option<&str>) -> CommandContext {
        let global = GlobalArgs {
            corpus: corpus.map(PathBuf::from),
            ..GlobalArgs::default()
        };
        CommandContext::with_config(cwd.to_path_buf(), Config::default(), &global)
    }

    #[test]
    fn corpus_is_loaded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");
        fs::write(&path, r#"[{"title": "Only", "lines": ["one line"]}]"#).unwrap();
        let mut ctx = context(dir.path(), Some("poems.json"));

        assert_eq!(ctx.corpus().unwrap().len(), 1);
        fs::remove_file(&path).unwrap();
        assert_eq!(ctx.corpus().unwrap().documents()[0].title, "Only");
    }

    #[test]
    fn missing_override_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path(), Some("absent.json"));

        assert!(ctx.corpus().is_err());
    }

    #[test]
    fn bundled_corpus_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path(), None);

        assert_eq!(ctx.corpus().unwrap().len(), 6);
    }
}
