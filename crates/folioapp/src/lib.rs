//! # Folio Architecture
//!
//! Folio is a **flat-file content library**: blog posts, portfolio projects, gallery items
//! and a profile document, stored as plain JSON. The `folio` binary is one client of it;
//! an HTTP adapter or a static-site generator would be others.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-ends (the `folio` CLI, or any other client)          │
//! │  - Parse input into typed drafts / patches                  │
//! │  - Render results, map errors to exit codes or statuses     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Serializes mutations per collection (locks.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Slug assignment, index/detail synchronization, renames   │
//! │  - Returns `CmdResult<T>` with structured messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StorageBackend` trait over JSON documents               │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Every item carries two keys:
//! - `id`: a random 128-bit hex token, assigned once and never changed.
//! - `slug`: the human-readable key derived from the title (see [`slug`]). It is unique
//!   within its collection and follows the title: retitling an item re-slugs it, and for
//!   collections with detail files the file is renamed along with it.
//!
//! ## Storage Layout
//!
//! ```text
//! content/
//! ├── posts.json          # blog index
//! ├── posts/{slug}.json   # blog detail records
//! ├── projects.json       # projects (index only)
//! ├── gallery.json        # gallery (index only)
//! └── profile.json        # single profile document
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`locks`]: Per-collection mutual exclusion for mutations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types, drafts and patches
//! - [`kinds`]: Per-collection behavior (`ContentKind`)
//! - [`slug`]: Slug generation and uniqueness resolution
//! - [`date`]: The `Date` value type and its text formats
//! - [`config`]: Configuration loading
//! - [`init`]: Building a ready-to-use API from configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod init;
pub mod kinds;
pub mod locks;
pub mod model;
pub mod slug;
pub mod store;
