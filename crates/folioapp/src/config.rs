//! # Configuration
//!
//! Folio configuration is loaded with [`confique`] from environment variables and TOML
//! files.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FOLIO_CONTENT_DIR`, `FOLIO_LOG_LEVEL`.
//! 2. **Local Config**: `./folio.toml` in the working directory.
//! 3. **User Config**: `folio.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The `--content-dir` flag of the CLI overrides all of these.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `content_dir` | `content` | Directory holding the JSON files, relative to the working directory |
//! | `log_level` | `warn` | Default `tracing` filter when `FOLIO_LOG` is unset |

use crate::error::{FolioError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Directory holding `posts.json`, `projects.json`, `gallery.json` and `posts/`.
    #[config(env = "FOLIO_CONTENT_DIR", default = "content")]
    pub content_dir: PathBuf,

    /// Log filter used when neither `FOLIO_LOG` nor `--verbose` is given.
    #[config(env = "FOLIO_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            log_level: "warn".to_string(),
        }
    }
}

impl FolioConfig {
    /// Loads env, `cwd/folio.toml` and the user config file, in that priority.
    pub fn load(cwd: &Path) -> Result<Self> {
        let mut builder = Self::builder().env().file(cwd.join(CONFIG_FILE_NAME));
        if let Some(user_file) = user_config_file() {
            builder = builder.file(user_file);
        }
        builder.load().map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Loads from the given files only, highest priority first. Missing files are skipped.
    pub fn load_files(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder();
        for file in files {
            builder = builder.file(file);
        }
        builder.load().map_err(|e| FolioError::Config(e.to_string()))
    }

    /// The content directory as an absolute path, resolving relative values against `cwd`.
    pub fn resolve_content_dir(&self, cwd: &Path) -> PathBuf {
        if self.content_dir.is_absolute() {
            self.content_dir.clone()
        } else {
            cwd.join(&self.content_dir)
        }
    }
}

/// `folio.toml` in the platform config directory, if there is a home to find it in.
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_files() {
        let dir = TempDir::new().unwrap();
        let config = FolioConfig::load_files(&[dir.path().join(CONFIG_FILE_NAME)]).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn earlier_files_win() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let user = dir.path().join("user.toml");
        fs::write(&local, "content_dir = \"site/data\"\n").unwrap();
        fs::write(&user, "content_dir = \"elsewhere\"\nlog_level = \"debug\"\n").unwrap();

        let config = FolioConfig::load_files(&[local, user]).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("site/data"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&file, "content_dir = [").unwrap();

        let err = FolioConfig::load_files(&[file]).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn relative_content_dir_resolves_against_cwd() {
        let config = FolioConfig::default();
        assert_eq!(
            config.resolve_content_dir(Path::new("/srv/site")),
            PathBuf::from("/srv/site/content")
        );

        let absolute = FolioConfig {
            content_dir: PathBuf::from("/data/content"),
            ..Default::default()
        };
        assert_eq!(
            absolute.resolve_content_dir(Path::new("/srv/site")),
            PathBuf::from("/data/content")
        );
    }
}
