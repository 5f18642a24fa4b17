use crate::commands::{CmdResult, Item};
use crate::error::{FolioError, Result};
use crate::kinds::ContentKind;
use crate::store::backend::StorageBackend;
use crate::store::records::{load_detail, load_index, position_by_slug};

/// Options for [`list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    /// Skip drafts. Only posts have a draft state.
    pub published_only: bool,
}

/// Finds the index entry for `slug`.
pub fn lookup<K: ContentKind, B: StorageBackend>(
    backend: &B,
    slug: &str,
) -> Result<CmdResult<K::Entry>> {
    let mut entries = load_index::<K, B>(backend)?;
    let pos = position_by_slug(&entries, slug)
        .ok_or_else(|| FolioError::not_found(K::COLLECTION, slug))?;
    Ok(CmdResult::new(entries.swap_remove(pos)))
}

/// Finds the index entry for `slug` together with its detail record.
///
/// For split collections a listed item without a detail file is reported as
/// [`FolioError::DetailMissing`] rather than returned half-loaded.
pub fn fetch<K: ContentKind, B: StorageBackend>(
    backend: &B,
    slug: &str,
) -> Result<CmdResult<Item<K>>> {
    let entry = lookup::<K, B>(backend, slug)?.into_value();
    let detail = if K::COLLECTION.is_split() {
        let detail = load_detail::<K, B>(backend, slug)?.ok_or_else(|| {
            FolioError::DetailMissing {
                collection: K::COLLECTION,
                slug: slug.to_string(),
            }
        })?;
        Some(detail)
    } else {
        None
    };
    Ok(CmdResult::new(Item { entry, detail }))
}

/// All entries of the collection in display order.
pub fn list<K: ContentKind, B: StorageBackend>(
    backend: &B,
    filter: ListFilter,
) -> Result<CmdResult<Vec<K::Entry>>> {
    let mut entries = load_index::<K, B>(backend)?;
    if filter.published_only {
        entries.retain(|entry| K::is_published(entry));
    }
    K::sort(&mut entries);
    Ok(CmdResult::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::date::Date;
    use crate::kinds::{Blog, Gallery, Projects};
    use crate::model::{Collection, GalleryDraft, PostDraft, ProjectDraft};
    use crate::store::mem_backend::MemBackend;

    fn post(backend: &MemBackend, title: &str, date: (i32, u32, u32), published: bool) {
        create::run::<Blog, _>(
            backend,
            PostDraft {
                title: title.into(),
                content: format!("{} content", title),
                date: Date::from_ymd(date.0, date.1, date.2),
                published,
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn lookup_finds_entry_by_slug() {
        let backend = MemBackend::new();
        post(&backend, "First Post", (2024, 1, 1), true);

        let entry = lookup::<Blog, _>(&backend, "first-post").unwrap().value;
        assert_eq!(entry.title, "First Post");
        assert!(lookup::<Blog, _>(&backend, "second-post")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn fetch_loads_detail() {
        let backend = MemBackend::new();
        post(&backend, "First Post", (2024, 1, 1), true);

        let item = fetch::<Blog, _>(&backend, "first-post").unwrap().value;
        let detail = item.detail.unwrap();
        assert_eq!(detail.id, item.entry.id);
        assert_eq!(detail.content, "First Post content");
    }

    #[test]
    fn fetch_reports_missing_detail() {
        let backend = MemBackend::new();
        post(&backend, "First Post", (2024, 1, 1), true);
        backend.delete_detail(Collection::Blog, "first-post").unwrap();

        let err = fetch::<Blog, _>(&backend, "first-post").unwrap_err();
        assert!(matches!(err, FolioError::DetailMissing { .. }));
        // The entry itself is still listed.
        assert!(lookup::<Blog, _>(&backend, "first-post").is_ok());
    }

    #[test]
    fn fetch_index_only_has_no_detail() {
        let backend = MemBackend::new();
        create::run::<Gallery, _>(
            &backend,
            GalleryDraft {
                title: "Sunset".into(),
                image: "/img/sunset.jpg".into(),
                ..Default::default()
            },
        )
        .unwrap();

        let item = fetch::<Gallery, _>(&backend, "sunset").unwrap().value;
        assert!(item.detail.is_none());
        assert_eq!(item.entry.image, "/img/sunset.jpg");
    }

    #[test]
    fn posts_list_newest_first_and_filter_drafts() {
        let backend = MemBackend::new();
        post(&backend, "Old", (2023, 5, 1), true);
        post(&backend, "New", (2024, 5, 1), true);
        post(&backend, "Draft", (2025, 1, 1), false);

        let all = list::<Blog, _>(&backend, ListFilter::default()).unwrap().value;
        let titles: Vec<_> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Draft", "New", "Old"]);

        let published = list::<Blog, _>(
            &backend,
            ListFilter {
                published_only: true,
            },
        )
        .unwrap()
        .value;
        let titles: Vec<_> = published.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[test]
    fn projects_list_featured_first() {
        let backend = MemBackend::new();
        for (title, featured, year) in [("Plain", false, 2025), ("Star", true, 2020)] {
            create::run::<Projects, _>(
                &backend,
                ProjectDraft {
                    title: title.into(),
                    featured,
                    date: Date::from_ymd(year, 1, 1),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let listed = list::<Projects, _>(&backend, ListFilter::default())
            .unwrap()
            .value;
        assert_eq!(listed[0].title, "Star");
        assert_eq!(listed[1].title, "Plain");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let backend = MemBackend::new();
        assert!(list::<Gallery, _>(&backend, ListFilter::default())
            .unwrap()
            .value
            .is_empty());
    }
}
