//! Typed access to a collection's index and detail records.

use super::backend::StorageBackend;
use crate::error::{FolioError, Result};
use crate::kinds::ContentKind;
use crate::model::Record;
use crate::slug::Slugged;
use serde_json::Value;

pub fn load_index<K: ContentKind, B: StorageBackend>(backend: &B) -> Result<Vec<K::Entry>> {
    backend
        .read_collection(K::COLLECTION)?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(FolioError::Serialization))
        .collect()
}

pub fn save_index<K: ContentKind, B: StorageBackend>(
    backend: &B,
    entries: &[K::Entry],
) -> Result<()> {
    let values = entries
        .iter()
        .map(|entry| serde_json::to_value(entry).map_err(FolioError::Serialization))
        .collect::<Result<Vec<Value>>>()?;
    backend.write_collection(K::COLLECTION, &values)
}

pub fn load_detail<K: ContentKind, B: StorageBackend>(
    backend: &B,
    slug: &str,
) -> Result<Option<K::Detail>> {
    backend
        .read_detail(K::COLLECTION, slug)?
        .map(|value| serde_json::from_value(value).map_err(FolioError::Serialization))
        .transpose()
}

/// Writes `detail` under its own slug.
pub fn save_detail<K: ContentKind, B: StorageBackend>(
    backend: &B,
    detail: &K::Detail,
) -> Result<()> {
    let value = serde_json::to_value(detail).map_err(FolioError::Serialization)?;
    backend.write_detail(K::COLLECTION, detail.slug(), &value)
}

pub fn position_by_slug<R: Record>(entries: &[R], slug: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.slug() == slug)
}
