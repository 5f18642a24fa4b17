//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every UI (the CLI today, an HTTP layer later).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Serializes mutations** per collection through [`CollectionLocks`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Reads do not lock. Index files are replaced atomically, so a reader sees either the
//! old or the new index, never a torn one.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over StorageBackend
//!
//! `FolioApi<B: StorageBackend>`:
//! - Production: `FolioApi<FsBackend>`
//! - Testing: `FolioApi<MemBackend>`
//!
//! Methods take `&self`, so one API value can be shared between threads.

use crate::commands::{self, get::ListFilter, CmdResult, Item};
use crate::error::Result;
use crate::kinds::ContentKind;
use crate::locks::CollectionLocks;
use crate::model::{Collection, Profile, ProfilePatch};
use crate::store::backend::StorageBackend;
use std::path::PathBuf;

pub struct FolioApi<B: StorageBackend> {
    backend: B,
    locks: CollectionLocks,
}

impl<B: StorageBackend> FolioApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            locks: CollectionLocks::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn create<K: ContentKind>(&self, draft: K::Draft) -> Result<CmdResult<Item<K>>> {
        let _guard = self.locks.lock(K::COLLECTION);
        commands::create::run::<K, B>(&self.backend, draft)
    }

    pub fn update<K: ContentKind>(
        &self,
        slug: &str,
        patch: K::Patch,
    ) -> Result<CmdResult<Item<K>>> {
        let _guard = self.locks.lock(K::COLLECTION);
        commands::update::run::<K, B>(&self.backend, slug, patch)
    }

    pub fn delete<K: ContentKind>(&self, slug: &str) -> Result<CmdResult<K::Entry>> {
        let _guard = self.locks.lock(K::COLLECTION);
        commands::delete::run::<K, B>(&self.backend, slug)
    }

    pub fn get<K: ContentKind>(&self, slug: &str) -> Result<CmdResult<K::Entry>> {
        commands::get::lookup::<K, B>(&self.backend, slug)
    }

    pub fn fetch<K: ContentKind>(&self, slug: &str) -> Result<CmdResult<Item<K>>> {
        commands::get::fetch::<K, B>(&self.backend, slug)
    }

    pub fn list<K: ContentKind>(&self, filter: ListFilter) -> Result<CmdResult<Vec<K::Entry>>> {
        commands::get::list::<K, B>(&self.backend, filter)
    }

    pub fn profile(&self) -> Result<CmdResult<Profile>> {
        commands::profile::show(&self.backend)
    }

    pub fn update_profile(&self, patch: ProfilePatch) -> Result<CmdResult<Profile>> {
        let _guard = self.locks.lock_profile();
        commands::profile::update(&self.backend, patch)
    }

    /// Where the detail record for `slug` lives, for display.
    pub fn detail_path(&self, collection: Collection, slug: &str) -> Result<PathBuf> {
        self.backend.detail_path(collection, slug)
    }
}
