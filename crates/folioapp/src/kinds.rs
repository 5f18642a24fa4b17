//! # Content Kinds
//!
//! The synchronizer in [`crate::commands`] is written once, generic over [`ContentKind`].
//! Each kind names its collection, its record types and how drafts and patches map onto
//! them:
//!
//! | Kind         | Collection | Entry         | Detail        |
//! |--------------|------------|---------------|---------------|
//! | [`Blog`]     | `blog`     | `PostEntry`   | `PostDetail`  |
//! | [`Projects`] | `projects` | `Project`     | (none)        |
//! | [`Gallery`]  | `gallery`  | `GalleryItem` | (none)        |
//!
//! Kinds without detail files return `None` from [`ContentKind::build`]; their `Detail`
//! type is never instantiated.
//!
//! Drafts and patches are validated before the synchronizer touches storage.

use crate::date::Date;
use crate::error::{FolioError, Result};
use crate::model::{
    derive_excerpt, normalize_tags, Collection, GalleryDraft, GalleryItem, GalleryPatch,
    PostDetail, PostDraft, PostEntry, PostPatch, Project, ProjectDraft, ProjectPatch, Record,
};
use crate::slug::slugify;
use std::cmp::Ordering;

/// Input for creating an item.
pub trait DraftInput {
    fn title(&self) -> &str;
    fn validate(&self) -> Result<()>;
}

/// Input for updating an item. `None` fields are left untouched.
pub trait PatchInput {
    fn title(&self) -> Option<&str>;
    fn validate(&self) -> Result<()>;
}

pub trait ContentKind {
    const COLLECTION: Collection;

    type Entry: Record;
    type Detail: Record;
    type Draft: DraftInput;
    type Patch: PatchInput;

    /// Builds the index entry and, for split collections, the detail record. Both carry
    /// the given `id` and `slug`.
    fn build(id: String, slug: String, draft: Self::Draft) -> (Self::Entry, Option<Self::Detail>);

    /// Applies every field of `patch` except the slug, which the synchronizer owns.
    fn apply(patch: Self::Patch, entry: &mut Self::Entry, detail: Option<&mut Self::Detail>);

    /// Display order for listings.
    fn sort(entries: &mut [Self::Entry]);

    fn is_published(_entry: &Self::Entry) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Blog;

#[derive(Debug, Clone, Copy)]
pub struct Projects;

#[derive(Debug, Clone, Copy)]
pub struct Gallery;

/// A title must be non-blank and yield a non-empty slug.
pub fn validate_title(title: &str) -> Result<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(FolioError::validation("title is required"));
    }
    if slugify(trimmed).is_empty() {
        return Err(FolioError::validation(format!(
            "title `{}` has no letters or digits to build a slug from",
            trimmed
        )));
    }
    Ok(())
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Trims an optional text field; blank means "no value".
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn newest_first(a: &Option<Date>, b: &Option<Date>) -> Ordering {
    b.cmp(a)
}

// --- Blog ---

impl DraftInput for PostDraft {
    fn title(&self) -> &str {
        self.title.trim()
    }

    fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        require("content", &self.content)
    }
}

impl PatchInput for PostPatch {
    fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim)
    }

    fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            require("content", content)?;
        }
        Ok(())
    }
}

impl ContentKind for Blog {
    const COLLECTION: Collection = Collection::Blog;

    type Entry = PostEntry;
    type Detail = PostDetail;
    type Draft = PostDraft;
    type Patch = PostPatch;

    fn build(id: String, slug: String, draft: PostDraft) -> (PostEntry, Option<PostDetail>) {
        let title = draft.title.trim().to_string();
        let date = Some(draft.date.unwrap_or_else(Date::today));
        let tags = normalize_tags(draft.tags);
        let excerpt =
            optional_text(draft.excerpt).unwrap_or_else(|| derive_excerpt(&draft.content));

        let entry = PostEntry {
            id: id.clone(),
            slug: slug.clone(),
            title: title.clone(),
            date,
            excerpt,
            tags: tags.clone(),
            published: draft.published,
        };
        let detail = PostDetail {
            id,
            slug,
            title,
            date,
            tags,
            published: draft.published,
            content: draft.content,
        };
        (entry, Some(detail))
    }

    fn apply(patch: PostPatch, entry: &mut PostEntry, detail: Option<&mut PostDetail>) {
        if let Some(title) = patch.title {
            entry.title = title.trim().to_string();
        }
        if let Some(date) = patch.date {
            entry.date = Some(date);
        }
        if let Some(tags) = patch.tags {
            entry.tags = normalize_tags(tags);
        }
        if let Some(published) = patch.published {
            entry.published = published;
        }

        // `Some("")` asks for the excerpt to be derived from the content again.
        let excerpt_patch = patch.excerpt.map(|e| e.trim().to_string());

        let Some(detail) = detail else {
            if let Some(excerpt) = excerpt_patch.filter(|e| !e.is_empty()) {
                entry.excerpt = excerpt;
            }
            return;
        };

        // An excerpt that was derived from the old content follows the new content.
        let excerpt_was_derived = entry.excerpt == derive_excerpt(&detail.content);
        if let Some(content) = patch.content {
            detail.content = content;
        }
        match excerpt_patch {
            Some(excerpt) if !excerpt.is_empty() => entry.excerpt = excerpt,
            Some(_) => entry.excerpt = derive_excerpt(&detail.content),
            None if excerpt_was_derived => entry.excerpt = derive_excerpt(&detail.content),
            None => {}
        }

        detail.title = entry.title.clone();
        detail.date = entry.date;
        detail.tags = entry.tags.clone();
        detail.published = entry.published;
    }

    fn sort(entries: &mut [PostEntry]) {
        entries.sort_by(|a, b| newest_first(&a.date, &b.date).then_with(|| a.title.cmp(&b.title)));
    }

    fn is_published(entry: &PostEntry) -> bool {
        entry.published
    }
}

// --- Projects ---

impl DraftInput for ProjectDraft {
    fn title(&self) -> &str {
        self.title.trim()
    }

    fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

impl PatchInput for ProjectPatch {
    fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim)
    }

    fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

impl ContentKind for Projects {
    const COLLECTION: Collection = Collection::Projects;

    type Entry = Project;
    type Detail = Project;
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn build(id: String, slug: String, draft: ProjectDraft) -> (Project, Option<Project>) {
        let project = Project {
            id,
            slug,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            tech: normalize_tags(draft.tech),
            url: optional_text(draft.url),
            repo: optional_text(draft.repo),
            image: optional_text(draft.image),
            featured: draft.featured,
            date: Some(draft.date.unwrap_or_else(Date::today)),
        };
        (project, None)
    }

    fn apply(patch: ProjectPatch, entry: &mut Project, _detail: Option<&mut Project>) {
        if let Some(title) = patch.title {
            entry.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            entry.description = description.trim().to_string();
        }
        if let Some(tech) = patch.tech {
            entry.tech = normalize_tags(tech);
        }
        // Blank strings clear the optional links.
        if patch.url.is_some() {
            entry.url = optional_text(patch.url);
        }
        if patch.repo.is_some() {
            entry.repo = optional_text(patch.repo);
        }
        if patch.image.is_some() {
            entry.image = optional_text(patch.image);
        }
        if let Some(featured) = patch.featured {
            entry.featured = featured;
        }
        if let Some(date) = patch.date {
            entry.date = Some(date);
        }
    }

    fn sort(entries: &mut [Project]) {
        entries.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| newest_first(&a.date, &b.date))
                .then_with(|| a.title.cmp(&b.title))
        });
    }
}

// --- Gallery ---

impl DraftInput for GalleryDraft {
    fn title(&self) -> &str {
        self.title.trim()
    }

    fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        require("image", &self.image)
    }
}

impl PatchInput for GalleryPatch {
    fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim)
    }

    fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(image) = &self.image {
            require("image", image)?;
        }
        Ok(())
    }
}

impl ContentKind for Gallery {
    const COLLECTION: Collection = Collection::Gallery;

    type Entry = GalleryItem;
    type Detail = GalleryItem;
    type Draft = GalleryDraft;
    type Patch = GalleryPatch;

    fn build(id: String, slug: String, draft: GalleryDraft) -> (GalleryItem, Option<GalleryItem>) {
        let item = GalleryItem {
            id,
            slug,
            title: draft.title.trim().to_string(),
            image: draft.image.trim().to_string(),
            caption: draft.caption.trim().to_string(),
            date: Some(draft.date.unwrap_or_else(Date::today)),
        };
        (item, None)
    }

    fn apply(patch: GalleryPatch, entry: &mut GalleryItem, _detail: Option<&mut GalleryItem>) {
        if let Some(title) = patch.title {
            entry.title = title.trim().to_string();
        }
        if let Some(image) = patch.image {
            entry.image = image.trim().to_string();
        }
        if let Some(caption) = patch.caption {
            entry.caption = caption.trim().to_string();
        }
        if let Some(date) = patch.date {
            entry.date = Some(date);
        }
    }

    fn sort(entries: &mut [GalleryItem]) {
        entries.sort_by(|a, b| newest_first(&a.date, &b.date).then_with(|| a.title.cmp(&b.title)));
    }
}
