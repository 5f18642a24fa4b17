use super::backend::StorageBackend;
use crate::error::{FolioError, Result};
use crate::model::Collection;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Operations that [`MemBackend`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailOn {
    IndexWrite,
    DetailWrite,
    DetailRename,
    DetailDelete,
}

#[derive(Default)]
struct MemState {
    indexes: HashMap<Collection, Vec<Value>>,
    details: HashMap<(Collection, String), Value>,
    documents: HashMap<String, Value>,
    failures: HashSet<FailOn>,
    renames: Vec<(Collection, String, String)>,
}

/// In-memory storage backend for testing.
///
/// Uses a `Mutex` rather than `RefCell` so the API can be shared across threads
/// in the same way as with [`super::fs_backend::FsBackend`].
#[derive(Default)]
pub struct MemBackend {
    state: Mutex<MemState>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent `op` fail until [`Self::clear_failures`] is called.
    pub fn fail_on(&self, op: FailOn) {
        self.state().failures.insert(op);
    }

    pub fn clear_failures(&self) {
        self.state().failures.clear();
    }

    /// Slugs with a stored detail record, sorted.
    pub fn detail_slugs(&self, collection: Collection) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .state()
            .details
            .keys()
            .filter(|(c, _)| *c == collection)
            .map(|(_, slug)| slug.clone())
            .collect();
        slugs.sort();
        slugs
    }

    /// Every successful rename so far, oldest first.
    pub fn renames(&self) -> Vec<(Collection, String, String)> {
        self.state().renames.clone()
    }
}

fn check(state: &MemState, op: FailOn) -> Result<()> {
    if state.failures.contains(&op) {
        return Err(FolioError::Store(format!("Simulated {:?} failure", op)));
    }
    Ok(())
}

fn check_split(collection: Collection) -> Result<()> {
    if !collection.is_split() {
        return Err(FolioError::Store(format!(
            "{} has no detail records",
            collection
        )));
    }
    Ok(())
}

impl StorageBackend for MemBackend {
    fn read_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        Ok(self
            .state()
            .indexes
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    fn write_collection(&self, collection: Collection, records: &[Value]) -> Result<()> {
        let mut state = self.state();
        check(&state, FailOn::IndexWrite)?;
        state.indexes.insert(collection, records.to_vec());
        Ok(())
    }

    fn read_detail(&self, collection: Collection, slug: &str) -> Result<Option<Value>> {
        check_split(collection)?;
        Ok(self
            .state()
            .details
            .get(&(collection, slug.to_string()))
            .cloned())
    }

    fn write_detail(&self, collection: Collection, slug: &str, record: &Value) -> Result<()> {
        check_split(collection)?;
        let mut state = self.state();
        check(&state, FailOn::DetailWrite)?;
        state
            .details
            .insert((collection, slug.to_string()), record.clone());
        Ok(())
    }

    fn delete_detail(&self, collection: Collection, slug: &str) -> Result<bool> {
        check_split(collection)?;
        let mut state = self.state();
        check(&state, FailOn::DetailDelete)?;
        Ok(state
            .details
            .remove(&(collection, slug.to_string()))
            .is_some())
    }

    fn rename_detail(&self, collection: Collection, from: &str, to: &str) -> Result<()> {
        check_split(collection)?;
        let mut state = self.state();
        check(&state, FailOn::DetailRename)?;
        let record = state
            .details
            .remove(&(collection, from.to_string()))
            .ok_or_else(|| {
                FolioError::Store(format!("cannot rename {}/{}: not found", collection, from))
            })?;
        state.details.insert((collection, to.to_string()), record);
        state
            .renames
            .push((collection, from.to_string(), to.to_string()));
        Ok(())
    }

    fn read_document(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.state().documents.get(name).cloned())
    }

    fn write_document(&self, name: &str, document: &Value) -> Result<()> {
        self.state()
            .documents
            .insert(name.to_string(), document.clone());
        Ok(())
    }

    fn detail_path(&self, collection: Collection, slug: &str) -> Result<PathBuf> {
        let dir = collection.detail_dir().unwrap_or(collection.index_name());
        Ok(PathBuf::from(format!("memory://{}/{}.json", dir, slug)))
    }
}
