use super::backend::StorageBackend;
use crate::error::{FolioError, Result};
use crate::model::Collection;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// JSON-file backend rooted at a content directory.
///
/// Layout: `{root}/{index}.json`, `{root}/{dir}/{slug}.json`, `{root}/{name}.json`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.index_name()))
    }

    fn detail_dir(&self, collection: Collection) -> Result<PathBuf> {
        let dir = collection.detail_dir().ok_or_else(|| {
            FolioError::Store(format!("{} has no detail records", collection))
        })?;
        Ok(self.root.join(dir))
    }

    fn detail_file(&self, collection: Collection, slug: &str) -> Result<PathBuf> {
        check_file_stem(slug)?;
        Ok(self.detail_dir(collection)?.join(format!("{}.json", slug)))
    }

    fn document_file(&self, name: &str) -> Result<PathBuf> {
        check_file_stem(name)?;
        Ok(self.root.join(format!("{}.json", name)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn read_json(&self, path: &Path) -> Result<Option<Value>> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let value = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
                Ok(Some(value))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(FolioError::Io(err)),
        }
    }

    /// Atomic write: temp file in the same directory, then rename over the target.
    fn write_json(&self, path: &Path, value: &Value) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| FolioError::Store(format!("no parent for {}", path.display())))?;
        self.ensure_dir(dir)?;

        let mut content = serde_json::to_string_pretty(value).map_err(FolioError::Serialization)?;
        content.push('\n');

        let tmp_path = dir.join(format!(".folio-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(FolioError::Io)?;
        if let Err(err) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(FolioError::Io(err));
        }
        debug!(path = %path.display(), "wrote json file");
        Ok(())
    }
}

/// Slugs and document names become file names; refuse anything that could escape the
/// content root or produce a hidden file.
fn check_file_stem(stem: &str) -> Result<()> {
    let bad = stem.is_empty()
        || stem.starts_with('.')
        || stem.contains(|c: char| c == '/' || c == '\\')
        || stem.contains("..")
        || stem.chars().any(char::is_control);
    if bad {
        return Err(FolioError::Store(format!(
            "`{}` is not a usable file name",
            stem
        )));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn read_collection(&self, collection: Collection) -> Result<Vec<Value>> {
        let path = self.index_path(collection);
        match self.read_json(&path)? {
            None => Ok(Vec::new()),
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(FolioError::Store(format!(
                "{} is not a JSON array",
                path.display()
            ))),
        }
    }

    fn write_collection(&self, collection: Collection, records: &[Value]) -> Result<()> {
        let path = self.index_path(collection);
        self.write_json(&path, &Value::Array(records.to_vec()))
    }

    fn read_detail(&self, collection: Collection, slug: &str) -> Result<Option<Value>> {
        let path = self.detail_file(collection, slug)?;
        self.read_json(&path)
    }

    fn write_detail(&self, collection: Collection, slug: &str, record: &Value) -> Result<()> {
        let path = self.detail_file(collection, slug)?;
        self.write_json(&path, record)
    }

    fn delete_detail(&self, collection: Collection, slug: &str) -> Result<bool> {
        let path = self.detail_file(collection, slug)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(FolioError::Io(err)),
        }
    }

    fn rename_detail(&self, collection: Collection, from: &str, to: &str) -> Result<()> {
        let from_path = self.detail_file(collection, from)?;
        let to_path = self.detail_file(collection, to)?;
        if !from_path.exists() {
            return Err(FolioError::Store(format!(
                "cannot rename {}: file does not exist",
                from_path.display()
            )));
        }
        if to_path.exists() {
            warn!(path = %to_path.display(), "replacing orphaned detail file");
        }
        fs::rename(&from_path, &to_path).map_err(FolioError::Io)
    }

    fn read_document(&self, name: &str) -> Result<Option<Value>> {
        let path = self.document_file(name)?;
        self.read_json(&path)
    }

    fn write_document(&self, name: &str, document: &Value) -> Result<()> {
        let path = self.document_file(name)?;
        self.write_json(&path, document)
    }

    fn detail_path(&self, collection: Collection, slug: &str) -> Result<PathBuf> {
        self.detail_file(collection, slug)
    }
}
