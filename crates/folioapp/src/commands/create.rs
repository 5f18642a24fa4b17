use crate::commands::{CmdMessage, CmdResult, Item};
use crate::error::Result;
use crate::kinds::{ContentKind, DraftInput};
use crate::model::{new_id, Record};
use crate::slug::{resolve_unique, slugify, Slugged};
use crate::store::backend::StorageBackend;
use crate::store::records::{load_index, save_detail, save_index};
use tracing::{info, warn};

pub fn run<K: ContentKind, B: StorageBackend>(
    backend: &B,
    draft: K::Draft,
) -> Result<CmdResult<Item<K>>> {
    draft.validate()?;
    let collection = K::COLLECTION;

    let mut entries = load_index::<K, B>(backend)?;
    let base = slugify(draft.title());
    let slug = resolve_unique(&base, &entries);
    let (entry, detail) = K::build(new_id(), slug.clone(), draft);

    // Detail first: if it fails, the index never mentions the item.
    if let Some(detail) = &detail {
        save_detail::<K, B>(backend, detail)?;
    }

    entries.push(entry.clone());
    if let Err(err) = save_index::<K, B>(backend, &entries) {
        if detail.is_some() {
            warn!(%collection, %slug, "index write failed; detail record left orphaned");
        }
        return Err(err);
    }

    info!(%collection, %slug, id = entry.id(), "created item");

    let mut result = CmdResult::new(Item::<K> { entry, detail });
    if slug != base {
        result.add_message(CmdMessage::info(format!(
            "Slug `{}` is taken, using `{}`",
            base, slug
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "{} created: {}",
        collection.noun(),
        result.value.entry.slug()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::kinds::{Blog, Gallery, Projects};
    use crate::model::{Collection, GalleryDraft, PostDraft, ProjectDraft};
    use crate::store::mem_backend::{FailOn, MemBackend};

    fn post(title: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            content: "Body".into(),
            ..Default::default()
        }
    }

    #[test]
    fn creates_post_with_slug_from_title() {
        let backend = MemBackend::new();
        let item = run::<Blog, _>(&backend, post("Hello World!")).unwrap().value;

        assert_eq!(item.entry.slug, "hello-world");
        let detail = item.detail.unwrap();
        assert_eq!(detail.slug, "hello-world");
        assert_eq!(detail.id, item.entry.id);
        assert_eq!(backend.detail_slugs(Collection::Blog), vec!["hello-world"]);
    }

    #[test]
    fn duplicate_title_gets_numeric_suffix() {
        let backend = MemBackend::new();
        run::<Blog, _>(&backend, post("Hello World!")).unwrap();
        let second = run::<Blog, _>(&backend, post("Hello World!")).unwrap();

        assert_eq!(second.value.entry.slug, "hello-world-1");
        assert!(second
            .messages
            .iter()
            .any(|m| m.content.contains("is taken")));
        assert_eq!(
            backend.detail_slugs(Collection::Blog),
            vec!["hello-world", "hello-world-1"]
        );
    }

    #[test]
    fn ids_are_distinct_even_for_equal_titles() {
        let backend = MemBackend::new();
        let a = run::<Projects, _>(
            &backend,
            ProjectDraft {
                title: "Same".into(),
                ..Default::default()
            },
        )
        .unwrap();
        let b = run::<Projects, _>(
            &backend,
            ProjectDraft {
                title: "Same".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_ne!(a.value.entry.id, b.value.entry.id);
    }

    #[test]
    fn round_trip_lookup_preserves_title() {
        let backend = MemBackend::new();
        let created = run::<Blog, _>(&backend, post("Writing a Parser, Part 2"))
            .unwrap()
            .value;
        let found = get::fetch::<Blog, _>(&backend, &created.entry.slug)
            .unwrap()
            .value;
        assert_eq!(found.entry.title, "Writing a Parser, Part 2");
        assert_eq!(found.detail.unwrap().content, "Body");
    }

    #[test]
    fn validation_failure_touches_nothing() {
        let backend = MemBackend::new();
        let err = run::<Gallery, _>(
            &backend,
            GalleryDraft {
                title: "No image".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(backend.read_collection(Collection::Gallery).unwrap().is_empty());
    }

    #[test]
    fn detail_write_failure_leaves_index_untouched() {
        let backend = MemBackend::new();
        backend.fail_on(FailOn::DetailWrite);

        let err = run::<Blog, _>(&backend, post("Doomed")).unwrap_err();
        assert!(err.is_storage());
        assert!(backend.read_collection(Collection::Blog).unwrap().is_empty());
        assert!(backend.detail_slugs(Collection::Blog).is_empty());
    }

    #[test]
    fn index_write_failure_leaves_orphan_detail() {
        let backend = MemBackend::new();
        backend.fail_on(FailOn::IndexWrite);

        assert!(run::<Blog, _>(&backend, post("Half Done")).is_err());
        assert!(backend.read_collection(Collection::Blog).unwrap().is_empty());
        assert_eq!(backend.detail_slugs(Collection::Blog), vec!["half-done"]);

        // The orphan does not block a retry.
        backend.clear_failures();
        let retried = run::<Blog, _>(&backend, post("Half Done")).unwrap();
        assert_eq!(retried.value.entry.slug, "half-done");
    }

    #[test]
    fn index_only_collections_write_no_detail() {
        let backend = MemBackend::new();
        let item = run::<Gallery, _>(
            &backend,
            GalleryDraft {
                title: "Sunset".into(),
                image: "/img/sunset.jpg".into(),
                ..Default::default()
            },
        )
        .unwrap()
        .value;
        assert!(item.detail.is_none());
        assert_eq!(backend.read_collection(Collection::Gallery).unwrap().len(), 1);
    }
}
