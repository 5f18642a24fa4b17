use crate::error::Result;
use crate::model::Collection;
use serde_json::Value;
use std::path::PathBuf;

/// Abstract interface for raw document storage.
///
/// Records cross this boundary as JSON documents so any key-value or document store
/// can sit behind it. All methods take `&self`; implementations that hold state use
/// interior mutability and must be `Sync` to be shared by the API.
pub trait StorageBackend {
    // --- Index Operations ---

    /// Load the index of a collection. A missing index reads as empty.
    fn read_collection(&self, collection: Collection) -> Result<Vec<Value>>;

    /// Replace the index of a collection.
    fn write_collection(&self, collection: Collection, records: &[Value]) -> Result<()>;

    // --- Detail Operations ---

    /// Read a detail record. Returns Ok(None) if it does not exist.
    fn read_detail(&self, collection: Collection, slug: &str) -> Result<Option<Value>>;

    /// Write (create or overwrite) a detail record.
    fn write_detail(&self, collection: Collection, slug: &str, record: &Value) -> Result<()>;

    /// Delete a detail record. Returns Ok(false) if there was nothing to delete.
    fn delete_detail(&self, collection: Collection, slug: &str) -> Result<bool>;

    /// Move a detail record from one slug to another, replacing any record at `to`.
    /// Fails if there is no record at `from`.
    fn rename_detail(&self, collection: Collection, from: &str, to: &str) -> Result<()>;

    // --- Standalone Documents ---

    /// Read a single named document (e.g. the profile). Ok(None) if absent.
    fn read_document(&self, name: &str) -> Result<Option<Value>>;

    /// Write a single named document.
    fn write_document(&self, name: &str, document: &Value) -> Result<()>;

    // --- Paths ---

    /// Where the detail record of `slug` lives, for display.
    /// For FsBackend this is the real path. For MemBackend, a virtual path.
    fn detail_path(&self, collection: Collection, slug: &str) -> Result<PathBuf>;
}
