//! Locating `.verso.toml` files.
//!
//! The working directory and each of its ancestors may hold a config file. The file in
//! the home directory is consulted last unless a `root = true` file ends the search.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".verso.toml";

/// Lists the config files that apply to `cwd`, closest first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    discover_from(cwd, home_dir().as_deref())
}

/// Path of the home-directory config file, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILENAME))
}

/// The current user's home directory.
fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Walks up from `cwd`, then falls back to the config in `home`.
fn discover_from(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            debug!(root = %dir.display(), found = configs.len(), "root config ends discovery");
            return configs;
        }
    }

    if let Some(global) = home.map(|home| home.join(CONFIG_FILENAME))
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    debug!(cwd = %cwd.display(), found = configs.len(), "discovered config files");
    configs
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn nothing_to_find() {
        let tree = TestDir::new();
        let cwd = tree.create_dir("a/b/c");

        assert!(discover_from(&cwd, None).is_empty());
    }

    #[test]
    fn closest_config_comes_first() {
        let tree = TestDir::new();
        let top = tree.create_config_at_root();
        let mid = tree.create_config("a/b");
        let near = tree.create_config("a/b/c/d");
        let cwd = tree.create_dir("a/b/c/d/e");

        assert_eq!(discover_from(&cwd, None), vec![near, mid, top]);
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tree = TestDir::new();
        fs::create_dir_all(tree.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = tree.create_dir("poems");

        assert!(discover_from(&cwd, None).is_empty());
    }

    #[test]
    fn home_config_is_appended() {
        let tree = TestDir::new();
        let home = tree.create_dir("home");
        let global = tree.create_config("home");
        let local = tree.create_config("work");
        let cwd = tree.create_dir("work/poems");

        assert_eq!(discover_from(&cwd, Some(&home)), vec![local, global]);
    }

    #[test]
    fn home_config_is_not_listed_twice() {
        let tree = TestDir::new();
        let home = tree.create_dir("home");
        let global = tree.create_config("home");
        let cwd = tree.create_dir("home/poems");

        assert_eq!(discover_from(&cwd, Some(&home)), vec![global]);
    }

    #[test]
    fn root_config_ends_the_walk_and_skips_home() {
        let tree = TestDir::new();
        let home = tree.create_dir("home");
        tree.create_config("home");
        tree.create_config_at_root();
        let root = tree.create_root_config("project");
        let child = tree.create_config("project/sub");
        let cwd = tree.create_dir("project/sub/deep");

        assert_eq!(discover_from(&cwd, Some(&home)), vec![child, root]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let tree = TestDir::new();
        let top = tree.create_config_at_root();
        let mid = tree.create_config_with_content("project", "root = false\n");
        let cwd = tree.create_dir("project/src");

        assert_eq!(discover_from(&cwd, None), vec![mid, top]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        assert!(global_config_path().is_some_and(|p| p.ends_with(CONFIG_FILENAME)));
    }
}
