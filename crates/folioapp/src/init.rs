//! # Context Initialization
//!
//! Every UI starts by calling [`initialize`] (or [`initialize_with_config`]), which settles where the content lives and
//! wires an API over it:
//!
//! 1. Load [`FolioConfig`] (env, `./folio.toml`, user config, defaults).
//! 2. If `content_override` is given (the CLI's `--content-dir`), use it instead of the
//!    configured directory.
//! 3. Resolve relative paths against `cwd`.
//!
//! The content directory does not need to exist yet. Reads of a missing directory see
//! empty collections and the first write creates it.

use crate::api::FolioApi;
use crate::config::FolioConfig;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FolioContext {
    pub api: FolioApi<FsBackend>,
    pub config: FolioConfig,
    pub content_dir: PathBuf,
}

pub fn initialize(cwd: &Path, content_override: Option<PathBuf>) -> Result<FolioContext> {
    initialize_with_config(cwd, FolioConfig::load(cwd)?, content_override)
}

/// Same as [`initialize`] with a config the caller already loaded, so a UI can set up
/// logging from it first.
pub fn initialize_with_config(
    cwd: &Path,
    mut config: FolioConfig,
    content_override: Option<PathBuf>,
) -> Result<FolioContext> {
    if let Some(dir) = content_override {
        config.content_dir = dir;
    }
    let content_dir = config.resolve_content_dir(cwd);
    debug!(content_dir = %content_dir.display(), "initialized folio context");

    let api = FolioApi::new(FsBackend::new(content_dir.clone()));
    Ok(FolioContext {
        api,
        config,
        content_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Gallery;
    use crate::model::GalleryDraft;
    use tempfile::TempDir;

    #[test]
    fn override_wins_and_resolves_against_cwd() {
        let cwd = TempDir::new().unwrap();
        let ctx = initialize(cwd.path(), Some(PathBuf::from("site"))).unwrap();
        assert_eq!(ctx.content_dir, cwd.path().join("site"));
        assert_eq!(ctx.api.backend().root(), cwd.path().join("site"));
    }

    #[test]
    fn local_config_file_sets_content_dir() {
        let cwd = TempDir::new().unwrap();
        std::fs::write(
            cwd.path().join("folio.toml"),
            "content_dir = \"data/content\"\n",
        )
        .unwrap();

        // FOLIO_CONTENT_DIR in the test environment would take precedence.
        if std::env::var_os("FOLIO_CONTENT_DIR").is_some() {
            return;
        }
        let ctx = initialize(cwd.path(), None).unwrap();
        assert_eq!(ctx.content_dir, cwd.path().join("data/content"));
    }

    #[test]
    fn preloaded_config_is_used_as_given() {
        let cwd = TempDir::new().unwrap();
        let config = FolioConfig {
            content_dir: PathBuf::from("preloaded"),
            log_level: "debug".into(),
        };
        let ctx = initialize_with_config(cwd.path(), config, None).unwrap();
        assert_eq!(ctx.content_dir, cwd.path().join("preloaded"));
        assert_eq!(ctx.config.log_level, "debug");
    }

    #[test]
    fn first_write_creates_content_dir() {
        let cwd = TempDir::new().unwrap();
        let ctx = initialize(cwd.path(), Some(PathBuf::from("fresh"))).unwrap();
        assert!(!ctx.content_dir.exists());

        ctx.api
            .create::<Gallery>(GalleryDraft {
                title: "First".into(),
                image: "/first.png".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(ctx.content_dir.join("gallery.json").is_file());
    }
}
