use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::kinds::ContentKind;
use crate::store::backend::StorageBackend;
use crate::store::records::{load_index, position_by_slug, save_index};
use tracing::{info, warn};

/// Removes the item with `slug`, returning its index entry.
///
/// The index entry goes first. Once it is saved the item is gone, so a detail file that
/// is already missing or cannot be removed only produces a warning.
pub fn run<K: ContentKind, B: StorageBackend>(
    backend: &B,
    slug: &str,
) -> Result<CmdResult<K::Entry>> {
    let collection = K::COLLECTION;

    let mut entries = load_index::<K, B>(backend)?;
    let pos = position_by_slug(&entries, slug)
        .ok_or_else(|| FolioError::not_found(collection, slug))?;
    let entry = entries.remove(pos);
    save_index::<K, B>(backend, &entries)?;

    let mut result = CmdResult::new(entry);
    if collection.is_split() {
        match backend.delete_detail(collection, slug) {
            Ok(true) => {}
            Ok(false) => {
                warn!(%collection, %slug, "detail record was already missing");
                result.add_message(CmdMessage::warning(format!(
                    "Detail file for `{}` was already missing",
                    slug
                )));
            }
            Err(err) => {
                warn!(%collection, %slug, %err, "detail delete failed; detail record left orphaned");
                result.add_message(CmdMessage::warning(format!(
                    "Could not remove detail file for `{}`, it is now orphaned: {}",
                    slug, err
                )));
            }
        }
    }

    info!(%collection, %slug, "deleted item");
    result.add_message(CmdMessage::success(format!(
        "{} deleted: {}",
        collection.noun(),
        slug
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, get, MessageLevel};
    use crate::kinds::{Blog, Projects};
    use crate::model::{Collection, PostDraft, ProjectDraft};
    use crate::store::mem_backend::{FailOn, MemBackend};

    fn seed(backend: &MemBackend, title: &str) {
        create::run::<Blog, _>(
            backend,
            PostDraft {
                title: title.into(),
                content: "body".into(),
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn delete_removes_entry_and_detail() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        seed(&backend, "Other");

        let removed = run::<Blog, _>(&backend, "hello-world").unwrap().value;
        assert_eq!(removed.slug, "hello-world");

        assert_eq!(backend.detail_slugs(Collection::Blog), vec!["other"]);
        let remaining = crate::store::records::load_index::<Blog, _>(&backend).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].slug, "other");
    }

    #[test]
    fn deleting_missing_slug_changes_nothing() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        let index_before = backend.read_collection(Collection::Blog).unwrap();

        let err = run::<Blog, _>(&backend, "does-not-exist").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(backend.read_collection(Collection::Blog).unwrap(), index_before);
        assert_eq!(backend.detail_slugs(Collection::Blog), vec!["hello-world"]);
    }

    #[test]
    fn deleted_item_is_gone_for_good() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        run::<Blog, _>(&backend, "hello-world").unwrap();

        assert!(get::lookup::<Blog, _>(&backend, "hello-world")
            .unwrap_err()
            .is_not_found());
        assert!(run::<Blog, _>(&backend, "hello-world")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn slug_is_reusable_after_delete() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        run::<Blog, _>(&backend, "hello-world").unwrap();

        seed(&backend, "Hello World");
        assert!(get::fetch::<Blog, _>(&backend, "hello-world").is_ok());
    }

    #[test]
    fn missing_detail_is_only_a_warning() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        backend.delete_detail(Collection::Blog, "hello-world").unwrap();

        let result = run::<Blog, _>(&backend, "hello-world").unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        assert!(crate::store::records::load_index::<Blog, _>(&backend)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn failed_index_write_keeps_item() {
        let backend = MemBackend::new();
        seed(&backend, "Hello World");
        backend.fail_on(FailOn::IndexWrite);

        assert!(run::<Blog, _>(&backend, "hello-world").is_err());
        backend.clear_failures();
        assert!(get::fetch::<Blog, _>(&backend, "hello-world").is_ok());
    }

    #[test]
    fn failed_detail_delete_still_completes() {
        let backend = MemBackend::new();
        seed(&backend, "Hello");
        backend.fail_on(FailOn::DetailDelete);

        let result = run::<Blog, _>(&backend, "hello").unwrap();
        assert_eq!(result.value.slug, "hello");
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("orphaned")));

        assert!(get::lookup::<Blog, _>(&backend, "hello")
            .unwrap_err()
            .is_not_found());
        assert_eq!(backend.detail_slugs(Collection::Blog), vec!["hello"]);
    }

    #[test]
    fn index_only_delete_never_touches_details() {
        let backend = MemBackend::new();
        create::run::<Projects, _>(
            &backend,
            ProjectDraft {
                title: "Compiler".into(),
                ..Default::default()
            },
        )
        .unwrap();
        backend.fail_on(FailOn::DetailDelete);

        let removed = run::<Projects, _>(&backend, "compiler").unwrap().value;
        assert_eq!(removed.title, "Compiler");
    }
}
