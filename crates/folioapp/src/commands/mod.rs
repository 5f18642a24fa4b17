//! # Command Layer
//!
//! This module contains the **core business logic** of folio: the index/detail
//! synchronizer. Each operation lives in its own submodule as plain functions over a
//! [`StorageBackend`](crate::store::backend::StorageBackend).
//!
//! ## Operations
//!
//! - [`create`]: Allocate id and unique slug, write detail, then append to the index
//! - [`update`]: Apply a patch; re-slug and rename the detail file when the title moves
//! - [`delete`]: Drop the index entry, then the detail file
//! - [`get`]: Lookup by slug and sorted listings
//! - [`profile`]: Read and patch the profile document
//!
//! ## Write Ordering
//!
//! The index is the authoritative existence record, so every mutation is ordered to keep
//! index and detail agreeing on slugs when a step fails:
//!
//! | Operation | Order                                | On failure                         |
//! |-----------|--------------------------------------|------------------------------------|
//! | create    | detail, index                        | detail fails: nothing written      |
//! | update    | rename, detail, index                | rename fails: nothing written; later steps: detail restored |
//! | delete    | index, detail                        | missing detail is only a warning   |
//!
//! Commands never lock. Callers that share a backend between threads go through
//! [`crate::api::FolioApi`], which serializes mutations per collection.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`]: the value plus [`CmdMessage`]s for the UI to render.

use crate::kinds::ContentKind;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod profile;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult<T> {
    pub value: T,
    pub messages: Vec<CmdMessage>,
}

impl<T> CmdResult<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// An index entry together with its detail record, when the collection has one.
#[derive(Debug, Clone)]
pub struct Item<K: ContentKind> {
    pub entry: K::Entry,
    pub detail: Option<K::Detail>,
}
