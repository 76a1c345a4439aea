//! Path resolution for corpus files.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a corpus path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/poems.json`) - expanded to home directory
/// - Relative paths (`./poems.json`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is after validation
///
/// The path must exist and be a regular file.
pub fn resolve_corpus_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    let canonical = absolute
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: absolute.clone(),
            source,
        })?;

    if !canonical.is_file() {
        return Err(ConfigError::CorpusPathNotFile { path: canonical });
    }

    Ok(canonical)
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_resolve_relative_path() {
        let test_dir = TestDir::new();
        let corpus = test_dir.create_file("data/poems.json", "[]");

        let resolved = resolve_corpus_path("./data/poems.json", test_dir.path()).unwrap();

        assert_eq!(resolved, corpus.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let test_dir = TestDir::new();
        let corpus = test_dir.create_file("poems.json", "[]");
        let config_dir = test_dir.create_dir("project");

        let resolved = resolve_corpus_path("../poems.json", &config_dir).unwrap();

        assert_eq!(resolved, corpus.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let test_dir = TestDir::new();
        let corpus = test_dir.create_file("poems.json", "[]");
        let elsewhere = test_dir.create_dir("elsewhere");

        let resolved = resolve_corpus_path(corpus.to_str().unwrap(), &elsewhere).unwrap();

        assert_eq!(resolved, corpus.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_path() {
        let test_dir = TestDir::new();
        let err = resolve_corpus_path("./missing.json", test_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PathResolution { .. }));
    }

    #[test]
    fn test_resolve_directory_is_rejected() {
        let test_dir = TestDir::new();
        test_dir.create_dir("poems");
        let err = resolve_corpus_path("poems", test_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::CorpusPathNotFile { .. }));
    }

    #[test]
    fn test_expand_tilde_plain_path_unchanged() {
        assert_eq!(expand_tilde("poems.json").unwrap(), PathBuf::from("poems.json"));
    }

    #[test]
    fn test_expand_tilde_home() {
        let home = home_dir().unwrap();
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/poems.json").unwrap(), home.join("poems.json"));
    }
}
