//! Discovery and creation of the `.relmo/` directory.
//!
//! The `.relmo/` directory holds `config.yaml`. It is found by walking up
//! the directory tree from the working directory, like `.git/`.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the configuration directory.
pub const CONFIG_DIR_NAME: &str = ".relmo";

/// The name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable that overrides directory discovery.
const CONFIG_DIR_ENV: &str = "RELMO_DIR";

/// Walk up the directory tree from `start` looking for a `.relmo/` directory.
///
/// The `RELMO_DIR` environment variable is checked first. Returns `None` if
/// the filesystem root is reached without finding one.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Ensure a `.relmo/` directory exists at the given path.
///
/// If `path` itself is not called `.relmo`, a `.relmo/` subdirectory is
/// created under it. Returns the path to the `.relmo/` directory.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if directory creation fails.
pub fn ensure_config_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let config_dir = if path.ends_with(CONFIG_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(CONFIG_DIR_NAME)
    };

    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_dir_in_temp() {
        let dir = tempfile::tempdir().unwrap();
        let relmo = dir.path().join(".relmo");
        std::fs::create_dir(&relmo).unwrap();

        let found = find_config_dir(dir.path()).unwrap().canonicalize().unwrap();
        assert_eq!(found, relmo.canonicalize().unwrap());
    }

    #[test]
    fn test_find_config_dir_in_child() {
        let dir = tempfile::tempdir().unwrap();
        let relmo = dir.path().join(".relmo");
        std::fs::create_dir(&relmo).unwrap();

        let child = dir.path().join("trips").join("monday");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_config_dir(&child).unwrap().canonicalize().unwrap();
        assert_eq!(found, relmo.canonicalize().unwrap());
    }

    #[test]
    fn test_find_config_dir_missing_start() {
        assert!(find_config_dir(Path::new("/nonexistent/relmo/start")).is_none());
    }

    #[test]
    fn test_ensure_config_dir_creates() {
        let dir = tempfile::tempdir().unwrap();
        let result = ensure_config_dir(dir.path()).unwrap();
        assert!(result.is_dir());
        assert!(result.ends_with(".relmo"));
    }

    #[test]
    fn test_ensure_config_dir_already_named() {
        let dir = tempfile::tempdir().unwrap();
        let relmo = dir.path().join(".relmo");
        let result = ensure_config_dir(&relmo).unwrap();
        assert_eq!(result, relmo);
        assert_eq!(ensure_config_dir(&relmo).unwrap(), relmo);
    }
}
