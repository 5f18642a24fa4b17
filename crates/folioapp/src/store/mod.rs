//! # Storage Layer
//!
//! Storage is split in two:
//! - [`backend::StorageBackend`]: raw document I/O (JSON values in, JSON values out).
//!   It knows file names and directories, nothing about slugs or titles.
//! - [`records`]: typed helpers that (de)serialize index entries and detail records
//!   for a given [`crate::kinds::ContentKind`].
//!
//! ## Index vs Detail
//!
//! The index file is the authoritative list of what exists. Detail files are owned by
//! their index entry through the naming convention `{dir}/{slug}.json`:
//! - a detail file with no index entry is an orphan (left behind by a failed index
//!   write) and is ignored;
//! - an index entry whose detail file is gone makes full lookups fail with
//!   `DetailMissing`, while list and delete keep working.
//!
//! ## Writes
//!
//! Every write goes through a temporary file in the target directory followed by a
//! rename, so a reader never sees a half-written JSON file.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: JSON files under a content root.
//! - [`mem_backend::MemBackend`]: In-memory, with failure injection for tests.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod records;
